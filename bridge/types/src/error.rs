use {bridge_math::MathError, thiserror::Error};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("invalid EVM address `{value}`: {reason}")]
    InvalidAddress { value: String, reason: String },

    #[error("invalid chain id `{value}`")]
    InvalidChainId { value: String },

    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },
}

pub type TypesResult<T> = core::result::Result<T, TypesError>;
