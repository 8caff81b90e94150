use {
    crate::{home_directory::HomeDirectory, print_json_pretty},
    anyhow::Context,
    bridge_types::{Addr, ChainRegistry, DeploymentInfo},
    clap::Subcommand,
    std::{fs, path::Path},
};

#[derive(Subcommand)]
pub enum DeploymentCmd {
    /// Show the saved deployment info
    Show,
    /// Save the chain id and address of the router config contract
    SetRouterConfig {
        /// Chain hosting the router config contract
        #[arg(long)]
        chain_id: u64,
        /// Address of the router config contract
        #[arg(long)]
        address: Addr,
    },
    /// Save the address of the router contract on a chain
    SetRouter {
        /// Chain hosting the router contract
        #[arg(long)]
        chain_id: u64,
        /// Address of the router contract
        #[arg(long)]
        address: Addr,
    },
}

impl DeploymentCmd {
    pub fn run(self, dir: HomeDirectory, chains: &ChainRegistry) -> anyhow::Result<()> {
        let path = dir.deployment_file();
        let mut info = load(&path)?;

        match self {
            DeploymentCmd::Show => return print_json_pretty(info),
            DeploymentCmd::SetRouterConfig { chain_id, address } => {
                info.set_router_config(chain_id, address);
                tracing::info!(chain_id, %address, "Saved router config contract");
            },
            DeploymentCmd::SetRouter { chain_id, address } => {
                let Some(name) = chains.name(chain_id) else {
                    anyhow::bail!("unknown chain id {chain_id}; add it under [chains]");
                };

                info.set_router(chain_id, address);
                tracing::info!(chain_id, chain = name, %address, "Saved router contract");
            },
        }

        save(&path, &info)
    }
}

/// Reads the deployment info, or the empty default if nothing was saved yet.
pub fn load(path: &Path) -> anyhow::Result<DeploymentInfo> {
    if !path.exists() {
        return Ok(DeploymentInfo::default());
    }

    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))?;

    Ok(serde_json::from_str(&raw)?)
}

pub fn save(path: &Path, info: &DeploymentInfo) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_json::to_string_pretty(info)?)
        .with_context(|| format!("failed to write {path:?}"))
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saving_deployment_info() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("home");
        let chains = ChainRegistry::default();

        DeploymentCmd::SetRouterConfig {
            chain_id: 56,
            address: Addr::mock(1),
        }
        .run(HomeDirectory::new(home.clone()), &chains)
        .unwrap();

        DeploymentCmd::SetRouter {
            chain_id: 137,
            address: Addr::mock(2),
        }
        .run(HomeDirectory::new(home.clone()), &chains)
        .unwrap();

        let info = load(&HomeDirectory::new(home).deployment_file()).unwrap();
        assert_eq!(info.router_config(), Some((56, Addr::mock(1))));
        assert_eq!(info.router(137), Some(Addr::mock(2)));
    }

    #[test]
    fn refusing_unknown_chain() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("home");

        let err = DeploymentCmd::SetRouter {
            chain_id: 4002,
            address: Addr::mock(3),
        }
        .run(HomeDirectory::new(home.clone()), &ChainRegistry::default())
        .unwrap_err();
        assert!(err.to_string().contains("4002"));

        let mut chains = ChainRegistry::default();
        chains.insert(4002, "Fantom Testnet");

        DeploymentCmd::SetRouter {
            chain_id: 4002,
            address: Addr::mock(3),
        }
        .run(HomeDirectory::new(home.clone()), &chains)
        .unwrap();

        let info = load(&HomeDirectory::new(home).deployment_file()).unwrap();
        assert_eq!(info.router(4002), Some(Addr::mock(3)));
    }

    #[test]
    fn loading_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            load(&dir.path().join("deployment.json")).unwrap(),
            DeploymentInfo::default()
        );
    }
}
