use {
    crate::RouterConfig,
    async_trait::async_trait,
    bridge_types::{ChainConfig, SwapConfig, TokenConfig},
    std::{
        collections::HashMap,
        sync::atomic::{AtomicBool, Ordering},
    },
    tokio::sync::RwLock,
};

#[derive(Debug, thiserror::Error)]
pub enum MemoryRouterConfigError {
    #[error("writes are disabled on this router config")]
    WritesDisabled,
}

type TokenKey = (String, u64);

/// A router config contract held in memory.
#[derive(Debug, Default)]
pub struct MemoryRouterConfig {
    swap_configs: RwLock<HashMap<TokenKey, SwapConfig>>,
    token_configs: RwLock<HashMap<TokenKey, TokenConfig>>,
    chain_configs: RwLock<HashMap<u64, ChainConfig>>,
    writes_disabled: AtomicBool,
}

impl MemoryRouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail, to exercise error paths.
    pub fn disable_writes(&self, disabled: bool) {
        self.writes_disabled.store(disabled, Ordering::SeqCst);
    }

    fn ensure_writable(&self) -> Result<(), MemoryRouterConfigError> {
        if self.writes_disabled.load(Ordering::SeqCst) {
            return Err(MemoryRouterConfigError::WritesDisabled);
        }

        Ok(())
    }
}

#[async_trait]
impl RouterConfig for MemoryRouterConfig {
    type Error = MemoryRouterConfigError;

    async fn get_swap_config(
        &self,
        token_id: &str,
        chain_id: u64,
    ) -> Result<SwapConfig, Self::Error> {
        let configs = self.swap_configs.read().await;
        Ok(configs
            .get(&(token_id.to_string(), chain_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn set_swap_config(
        &self,
        token_id: &str,
        chain_id: u64,
        config: SwapConfig,
    ) -> Result<(), Self::Error> {
        self.ensure_writable()?;
        self.swap_configs
            .write()
            .await
            .insert((token_id.to_string(), chain_id), config);
        Ok(())
    }

    async fn get_token_config(
        &self,
        token_id: &str,
        chain_id: u64,
    ) -> Result<TokenConfig, Self::Error> {
        let configs = self.token_configs.read().await;
        Ok(configs
            .get(&(token_id.to_string(), chain_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn set_token_config(
        &self,
        token_id: &str,
        chain_id: u64,
        config: TokenConfig,
    ) -> Result<(), Self::Error> {
        self.ensure_writable()?;
        self.token_configs
            .write()
            .await
            .insert((token_id.to_string(), chain_id), config);
        Ok(())
    }

    async fn get_chain_config(&self, chain_id: u64) -> Result<ChainConfig, Self::Error> {
        let configs = self.chain_configs.read().await;
        Ok(configs.get(&chain_id).cloned().unwrap_or_default())
    }

    async fn set_chain_config(
        &self,
        chain_id: u64,
        config: ChainConfig,
    ) -> Result<(), Self::Error> {
        self.ensure_writable()?;
        self.chain_configs.write().await.insert(chain_id, config);
        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, bridge_types::Addr};

    #[tokio::test]
    async fn unset_entries_read_as_default() {
        let contract = MemoryRouterConfig::new();

        assert_eq!(
            contract.get_swap_config("USDC", 56).await.unwrap(),
            SwapConfig::default()
        );
        assert_eq!(
            contract.get_token_config("USDC", 56).await.unwrap(),
            TokenConfig::default()
        );
        assert!(!contract.get_chain_config(56).await.unwrap().is_set());
    }

    #[tokio::test]
    async fn entries_are_keyed_by_token_and_chain() {
        let contract = MemoryRouterConfig::new();
        let config = TokenConfig::new(6, Addr::mock(1));

        contract
            .set_token_config("USDC", 56, config.clone())
            .await
            .unwrap();

        assert_eq!(contract.get_token_config("USDC", 56).await.unwrap(), config);
        assert_eq!(
            contract.get_token_config("USDC", 137).await.unwrap(),
            TokenConfig::default()
        );
        assert_eq!(
            contract.get_token_config("DAI", 56).await.unwrap(),
            TokenConfig::default()
        );
    }

    #[tokio::test]
    async fn disabled_writes_fail() {
        let contract = MemoryRouterConfig::new();
        contract.disable_writes(true);

        assert!(matches!(
            contract
                .set_chain_config(56, ChainConfig::new("BSC", Addr::mock(1)))
                .await,
            Err(MemoryRouterConfigError::WritesDisabled)
        ));
    }
}
