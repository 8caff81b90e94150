use {
    crate::print_json_pretty,
    anyhow::Context,
    bridge_math::AmountScaler,
    bridge_types::{SwapConfig, SwapConfigForm},
    clap::Subcommand,
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

#[derive(Subcommand)]
pub enum SwapConfigCmd {
    /// Convert a swap config in human units (TOML or JSON) into the router
    /// config contract's payload
    Encode {
        /// Path to the human-unit swap config
        path: PathBuf,
    },
    /// Convert a router config contract payload (JSON) into human units
    Decode {
        /// Path to the contract payload
        path: PathBuf,
    },
}

impl SwapConfigCmd {
    pub fn run(self, scaler: AmountScaler) -> anyhow::Result<()> {
        match self {
            SwapConfigCmd::Encode { path } => print_json_pretty(encode(&path, &scaler)?),
            SwapConfigCmd::Decode { path } => print_json_pretty(decode(&path, &scaler)?),
        }
    }
}

fn encode(path: &Path, scaler: &AmountScaler) -> anyhow::Result<SwapConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))?;

    let form: SwapConfigForm = if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&raw)?
    } else {
        serde_json::from_str(&raw)?
    };

    tracing::debug!(?form, "Encoding swap config");

    Ok(form.to_swap_config(scaler)?)
}

fn decode(path: &Path, scaler: &AmountScaler) -> anyhow::Result<SwapConfigForm> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))?;
    let config: SwapConfig = serde_json::from_str(&raw)?;

    tracing::debug!(?config, "Decoding swap config");

    Ok(SwapConfigForm::from_swap_config(&config, scaler))
}

// ----------------------------------- tests -----------------------------------
