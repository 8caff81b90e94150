use {
    crate::Addr,
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Where the bridge contracts live. There is a single router config contract,
/// on one chain, and one router contract per chain.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DeploymentInfo {
    pub router_config_chain_id: Option<u64>,
    pub router_config_address: Option<Addr>,
    pub routers: BTreeMap<u64, Addr>,
}

impl DeploymentInfo {
    /// Chain id and address of the router config contract, once both are
    /// known.
    pub fn router_config(&self) -> Option<(u64, Addr)> {
        self.router_config_chain_id.zip(self.router_config_address)
    }

    pub fn set_router_config(&mut self, chain_id: u64, address: Addr) {
        self.router_config_chain_id = Some(chain_id);
        self.router_config_address = Some(address);
    }

    pub fn is_config_chain(&self, chain_id: u64) -> bool {
        self.router_config_chain_id == Some(chain_id)
    }

    pub fn router(&self, chain_id: u64) -> Option<Addr> {
        self.routers.get(&chain_id).copied()
    }

    pub fn set_router(&mut self, chain_id: u64, address: Addr) {
        self.routers.insert(chain_id, address);
    }
}

// ----------------------------------- tests -----------------------------------
