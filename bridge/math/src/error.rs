use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("invalid amount `{value}`: {reason}")]
    InvalidAmount { value: String, reason: String },
}

impl MathError {
    pub fn invalid_amount<V, R>(value: V, reason: R) -> Self
    where
        V: ToString,
        R: ToString,
    {
        Self::InvalidAmount {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type MathResult<T> = core::result::Result<T, MathError>;
