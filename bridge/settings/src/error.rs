use {bridge_types::TypesError, thiserror::Error};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Types(#[from] TypesError),

    /// The router config contract call failed.
    #[error(transparent)]
    Contract(#[from] anyhow::Error),

    #[error("the router config contract is on chain {expected:?}, not on chain {actual}")]
    NotOnConfigChain { expected: Option<u64>, actual: u64 },

    #[error("unknown chain id {chain_id}")]
    UnknownChain { chain_id: u64 },

    #[error("no underlying token selected")]
    MissingUnderlying,

    #[error("swap config can't be submitted: form incomplete or a submission is pending")]
    CannotSubmit,
}

impl SettingsError {
    pub fn contract<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Contract(err.into())
    }
}

pub type SettingsResult<T> = core::result::Result<T, SettingsError>;
