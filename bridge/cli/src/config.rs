use {
    bridge_math::ScalerConfig,
    bridge_types::ChainRegistry,
    serde::{Deserialize, Serialize},
    std::{collections::BTreeMap, path::Path},
};

/// Prefix of environment variables overriding the config file, e.g.
/// `BRIDGE_SCALER__DECIMALS=6`.
pub const ENV_PREFIX: &str = "BRIDGE";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub scaler: ScalerConfig,
    /// Extra chain names by chain id, on top of the built-in ones.
    pub chains: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            scaler: ScalerConfig::default(),
            chains: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn chain_registry(&self) -> anyhow::Result<ChainRegistry> {
        let mut registry = ChainRegistry::default();
        registry.extend_from_strings(&self.chains)?;
        Ok(registry)
    }
}

/// Reads the config file, if it exists, and applies environment overrides.
pub fn parse_config<P>(path: P) -> anyhow::Result<Config>
where
    P: AsRef<Path>,
{
    parse_config_with_prefix(path, ENV_PREFIX)
}

fn parse_config_with_prefix<P>(path: P, env_prefix: &str) -> anyhow::Result<Config>
where
    P: AsRef<Path>,
{
    let env_override = ::config::Environment::with_prefix(env_prefix)
        .prefix_separator("_")
        .separator("__");

    let cfg = ::config::Config::builder()
        .add_source(::config::File::from(path.as_ref()).required(false))
        .add_source(env_override)
        .build()?;

    Ok(cfg.try_deserialize()?)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, bridge_math::Rounding, std::fs};

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = parse_config(dir.path().join("app.toml")).unwrap();

        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.scaler, ScalerConfig::default());
    }

    #[test]
    fn parsing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");

        fs::write(
            &path,
            r#"
log_level = "debug"

[scaler]
decimals = 6
rounding = "reject"

[chains]
4002 = "Fantom Testnet"
"#,
        )
        .unwrap();

        let cfg = parse_config(&path).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.scaler, ScalerConfig {
            decimals: 6,
            rounding: Rounding::Reject,
        });

        let chains = cfg.chain_registry().unwrap();
        assert_eq!(chains.name(4002), Some("Fantom Testnet"));
        assert_eq!(chains.name(1), Some("Ethereum"));
    }

    #[test]
    fn environment_overrides_config_file() {
        // A prefix of its own, so parallel tests reading `BRIDGE_*` don't see it.
        const PREFIX: &str = "BRIDGE_ENV_OVERRIDE_TEST";

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");

        fs::write(
            &path,
            r#"
log_level = "warn"

[scaler]
decimals = 18
rounding = "truncate"
"#,
        )
        .unwrap();

        std::env::set_var(format!("{PREFIX}_SCALER__DECIMALS"), "6");
        std::env::set_var(format!("{PREFIX}_SCALER__ROUNDING"), "reject");

        let cfg = parse_config_with_prefix(&path, PREFIX).unwrap();

        std::env::remove_var(format!("{PREFIX}_SCALER__DECIMALS"));
        std::env::remove_var(format!("{PREFIX}_SCALER__ROUNDING"));

        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.scaler, ScalerConfig {
            decimals: 6,
            rounding: Rounding::Reject,
        });
    }
}
