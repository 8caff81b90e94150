mod config;
mod convert;
mod deployment;
mod home_directory;
mod swap_config;

use {
    crate::{
        config::parse_config, convert::ConvertCmd, deployment::DeploymentCmd,
        home_directory::HomeDirectory, swap_config::SwapConfigCmd,
    },
    bridge_math::AmountScaler,
    clap::Parser,
    colored_json::ToColoredJson,
    serde::Serialize,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Directory for the config and deployment files [default: ~/.bridge]
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Convert amounts and fee rates between human and contract units
    #[command(subcommand, next_display_order = None)]
    Convert(ConvertCmd),

    /// Manage the saved router config and router addresses
    #[command(subcommand, next_display_order = None)]
    Deployment(DeploymentCmd),

    /// Encode or decode swap configs
    #[command(subcommand, next_display_order = None)]
    SwapConfig(SwapConfigCmd),
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Find the home directory from the CLI `--home` flag.
    let app_dir = HomeDirectory::new_or_default(cli.home)?;

    // Parse the config file.
    let cfg = parse_config(app_dir.config_file())?;

    // Set up tracing. Logs go to stderr; stdout carries command output.
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(home = ?app_dir.path(), scaler = ?cfg.scaler, "Loaded config");

    // Fail early on malformed chain entries.
    let chains = cfg.chain_registry()?;
    tracing::debug!(chains = chains.iter().count(), "Loaded chain registry");

    match cli.command {
        Command::Convert(cmd) => cmd.run(cfg.scaler),
        Command::Deployment(cmd) => cmd.run(app_dir, &chains),
        Command::SwapConfig(cmd) => cmd.run(AmountScaler::new(cfg.scaler)),
    }
}

fn print_json_pretty<T>(data: T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let json = serde_json::to_string_pretty(&data)?;
    let colored = json.to_colored_json_auto()?;

    println!("{colored}");

    Ok(())
}
