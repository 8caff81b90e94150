use {
    crate::Addr,
    serde::{Deserialize, Serialize},
};

/// Version of the crosschain token contract registered by this tool.
pub const CONTRACT_VERSION: u64 = 6;

/// Per-token, per-chain settings held by the router config contract.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TokenConfig {
    pub decimals: u8,
    pub contract_address: Addr,
    pub contract_version: u64,
}

impl TokenConfig {
    pub fn new(decimals: u8, contract_address: Addr) -> Self {
        Self {
            decimals,
            contract_address,
            contract_version: CONTRACT_VERSION,
        }
    }

    /// The registered crosschain token, if any.
    pub fn crosschain_token(&self) -> Option<Addr> {
        (!self.contract_address.is_zero()).then_some(self.contract_address)
    }
}

/// The ERC-20 token a crosschain token wraps. Router config entries are keyed
/// by its name.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct Underlying {
    pub address: Addr,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Underlying {
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

// ----------------------------------- tests -----------------------------------
