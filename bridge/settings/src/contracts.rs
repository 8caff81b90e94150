use {
    crate::{RouterConfig, SettingsError, SettingsResult},
    bridge_types::{Addr, ChainConfig, ChainRegistry, DeploymentInfo, TokenConfig, Underlying},
};

/// Registers routers and crosschain tokens with the router config contract.
pub struct ContractSettings<'a, C> {
    contract: &'a C,
    deployment: DeploymentInfo,
    chains: ChainRegistry,
}

impl<'a, C> ContractSettings<'a, C>
where
    C: RouterConfig + Sync,
{
    pub fn new(contract: &'a C, deployment: DeploymentInfo, chains: ChainRegistry) -> Self {
        Self {
            contract,
            deployment,
            chains,
        }
    }

    pub fn deployment(&self) -> &DeploymentInfo {
        &self.deployment
    }

    pub fn into_deployment(self) -> DeploymentInfo {
        self.deployment
    }

    /// Registers the router deployed on `chain_id`.
    ///
    /// Chain configs can only be written on the chain hosting the router
    /// config contract.
    pub async fn set_chain_config(&mut self, router: Addr, chain_id: u64) -> SettingsResult<()> {
        if !self.deployment.is_config_chain(chain_id) {
            tracing::warn!(
                chain_id,
                config_chain_id = ?self.deployment.router_config_chain_id,
                "Refusing to set chain config off the config chain"
            );

            return Err(SettingsError::NotOnConfigChain {
                expected: self.deployment.router_config_chain_id,
                actual: chain_id,
            });
        }

        let name = self
            .chains
            .name(chain_id)
            .ok_or(SettingsError::UnknownChain { chain_id })?;

        self.contract
            .set_chain_config(chain_id, ChainConfig::new(name, router))
            .await
            .map_err(SettingsError::contract)?;

        self.deployment.set_router(chain_id, router);

        tracing::info!(chain_id, %router, chain = name, "Chain config set");

        Ok(())
    }

    /// The crosschain token registered for `token_id` on `chain_id`, if any.
    pub async fn crosschain_token(
        &self,
        token_id: &str,
        chain_id: u64,
    ) -> SettingsResult<Option<Addr>> {
        let config = self
            .contract
            .get_token_config(token_id, chain_id)
            .await
            .map_err(SettingsError::contract)?;

        tracing::debug!(token = token_id, chain_id, ?config, "Loaded token config");

        Ok(config.crosschain_token())
    }

    /// Registers `crosschain_token` as the wrapper of `underlying` on
    /// `chain_id`.
    pub async fn set_token_config(
        &self,
        underlying: &Underlying,
        chain_id: u64,
        crosschain_token: Addr,
    ) -> SettingsResult<()> {
        if !underlying.has_name() {
            return Err(SettingsError::MissingUnderlying);
        }

        let config = TokenConfig::new(underlying.decimals, crosschain_token);

        self.contract
            .set_token_config(&underlying.name, chain_id, config)
            .await
            .map_err(SettingsError::contract)?;

        tracing::info!(
            token = %underlying.name,
            chain_id,
            %crosschain_token,
            "Token config set"
        );

        Ok(())
    }
}
