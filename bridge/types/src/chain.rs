use {
    crate::{Addr, TypesError, TypesResult},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Number of block confirmations the bridge waits for on a newly registered
/// chain.
pub const DEFAULT_CONFIRMATIONS: u64 = 3;

/// Height from which the bridge starts scanning a newly registered chain.
pub const DEFAULT_INITIAL_HEIGHT: u64 = 0;

/// Per-chain settings held by the router config contract.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ChainConfig {
    pub block_chain: String,
    pub router_contract: Addr,
    pub confirmations: u64,
    pub initial_height: u64,
}

impl ChainConfig {
    pub fn new<N>(block_chain: N, router_contract: Addr) -> Self
    where
        N: Into<String>,
    {
        Self {
            block_chain: block_chain.into(),
            router_contract,
            confirmations: DEFAULT_CONFIRMATIONS,
            initial_height: DEFAULT_INITIAL_HEIGHT,
        }
    }

    /// Contract mappings hand out an all-zero value for chains never set.
    pub fn is_set(&self) -> bool {
        !self.router_contract.is_zero()
    }
}

/// Names of EVM chains, by chain id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRegistry {
    names: BTreeMap<u64, String>,
}

impl ChainRegistry {
    pub fn empty() -> Self {
        Self {
            names: BTreeMap::new(),
        }
    }

    pub fn name(&self, chain_id: u64) -> Option<&str> {
        self.names.get(&chain_id).map(String::as_str)
    }

    pub fn insert<N>(&mut self, chain_id: u64, name: N)
    where
        N: Into<String>,
    {
        self.names.insert(chain_id, name.into());
    }

    /// Adds entries whose chain ids are still in string form, as read from a
    /// config file.
    pub fn extend_from_strings<'a, I>(&mut self, entries: I) -> TypesResult<()>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (chain_id, name) in entries {
            let chain_id = chain_id
                .trim()
                .parse::<u64>()
                .map_err(|_| TypesError::InvalidChainId {
                    value: chain_id.clone(),
                })?;

            self.insert(chain_id, name.clone());
        }

        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> + '_ {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();

        for (chain_id, name) in [
            (1, "Ethereum"),
            (4, "Rinkeby"),
            (5, "Goerli"),
            (56, "BSC"),
            (97, "BSC Testnet"),
            (100, "Gnosis"),
            (137, "Polygon"),
            (250, "Fantom"),
            (42161, "Arbitrum One"),
            (43114, "Avalanche"),
        ] {
            registry.insert(chain_id, name);
        }

        registry
    }
}

// ----------------------------------- tests -----------------------------------
