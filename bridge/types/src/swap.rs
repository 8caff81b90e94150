use {
    crate::{TypesError, TypesResult},
    bridge_math::{AmountScaler, BaseAmount, Millionths},
    serde::{Deserialize, Serialize},
    serde_with::skip_serializing_none,
};

/// Swap limits and fees of a token on a chain, as stored by the router config
/// contract: amounts in base units, the fee rate in millionths.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SwapConfig {
    pub maximum_swap: BaseAmount,
    pub minimum_swap: BaseAmount,
    pub big_value_threshold: BaseAmount,
    pub swap_fee_rate_per_million: Millionths,
    pub maximum_swap_fee: BaseAmount,
    pub minimum_swap_fee: BaseAmount,
}

/// The human-facing counterpart of [`SwapConfig`]: amounts in token units, the
/// fee rate as a plain ratio. Fields hold text exactly as typed, and any of
/// them may be absent while the form is being filled in.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SwapConfigForm {
    pub minimum_swap: Option<String>,
    pub maximum_swap: Option<String>,
    pub minimum_swap_fee: Option<String>,
    pub maximum_swap_fee: Option<String>,
    pub big_value_threshold: Option<String>,
    pub swap_fee_rate_per_million: Option<String>,
}

impl SwapConfigForm {
    /// Fills the form from a contract read.
    pub fn from_swap_config(config: &SwapConfig, scaler: &AmountScaler) -> Self {
        let scaled = |amount: &BaseAmount| Some(scaler.scale_down(amount).to_string());

        Self {
            minimum_swap: scaled(&config.minimum_swap),
            maximum_swap: scaled(&config.maximum_swap),
            minimum_swap_fee: scaled(&config.minimum_swap_fee),
            maximum_swap_fee: scaled(&config.maximum_swap_fee),
            big_value_threshold: scaled(&config.big_value_threshold),
            swap_fee_rate_per_million: Some(config.swap_fee_rate_per_million.to_ratio().to_string()),
        }
    }

    /// Whether every required field has a value. The fee rate is optional.
    pub fn is_complete(&self) -> bool {
        [
            &self.minimum_swap,
            &self.maximum_swap,
            &self.minimum_swap_fee,
            &self.maximum_swap_fee,
            &self.big_value_threshold,
        ]
        .into_iter()
        .all(|field| filled(field).is_some())
    }

    /// Builds the payload for a contract write. A missing fee rate means zero.
    pub fn to_swap_config(&self, scaler: &AmountScaler) -> TypesResult<SwapConfig> {
        let base = |field: &'static str, value: &Option<String>| -> TypesResult<BaseAmount> {
            let value = filled(value).ok_or(TypesError::MissingField { field })?;
            Ok(scaler.to_base(value)?)
        };

        Ok(SwapConfig {
            maximum_swap: base("maximum_swap", &self.maximum_swap)?,
            minimum_swap: base("minimum_swap", &self.minimum_swap)?,
            big_value_threshold: base("big_value_threshold", &self.big_value_threshold)?,
            swap_fee_rate_per_million: scaler
                .to_millionths(filled(&self.swap_fee_rate_per_million).unwrap_or("0"))?,
            maximum_swap_fee: base("maximum_swap_fee", &self.maximum_swap_fee)?,
            minimum_swap_fee: base("minimum_swap_fee", &self.minimum_swap_fee)?,
        })
    }
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// ----------------------------------- tests -----------------------------------
