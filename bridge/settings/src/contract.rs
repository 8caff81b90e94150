use {
    async_trait::async_trait,
    bridge_types::{ChainConfig, SwapConfig, TokenConfig},
};

/// The router config contract, as seen by the settings workflows.
///
/// Entries are keyed by the underlying token's name and a chain id. Reading an
/// entry that was never written yields the all-zero default, the same way a
/// contract mapping does.
#[async_trait]
pub trait RouterConfig {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get_swap_config(&self, token_id: &str, chain_id: u64)
        -> Result<SwapConfig, Self::Error>;

    async fn set_swap_config(
        &self,
        token_id: &str,
        chain_id: u64,
        config: SwapConfig,
    ) -> Result<(), Self::Error>;

    async fn get_token_config(
        &self,
        token_id: &str,
        chain_id: u64,
    ) -> Result<TokenConfig, Self::Error>;

    async fn set_token_config(
        &self,
        token_id: &str,
        chain_id: u64,
        config: TokenConfig,
    ) -> Result<(), Self::Error>;

    async fn get_chain_config(&self, chain_id: u64) -> Result<ChainConfig, Self::Error>;

    async fn set_chain_config(&self, chain_id: u64, config: ChainConfig)
        -> Result<(), Self::Error>;
}
