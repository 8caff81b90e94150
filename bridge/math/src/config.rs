use serde::{Deserialize, Serialize};

/// Number of decimal places of the tokens handled by the bridge router.
pub const WEI_DECIMALS: u8 = 18;

/// What to do when a value carries more fractional digits than an integral
/// target (base units, millionths) can hold.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Drop the excess digits, rounding toward zero.
    #[default]
    Truncate,
    /// Refuse the value.
    Reject,
}

/// Settings of an [`AmountScaler`](crate::AmountScaler).
///
/// Output is always rendered in plain positional notation, so there is no
/// notation threshold to configure.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ScalerConfig {
    pub decimals: u8,
    pub rounding: Rounding,
}

impl ScalerConfig {
    pub const DEFAULT: Self = Self {
        decimals: WEI_DECIMALS,
        rounding: Rounding::Truncate,
    };
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializing_partial_config() {
        let cfg: ScalerConfig = serde_json::from_str(r#"{"rounding":"reject"}"#).unwrap();
        assert_eq!(cfg, ScalerConfig {
            decimals: 18,
            rounding: Rounding::Reject,
        });

        let cfg: ScalerConfig = serde_json::from_str(r#"{"decimals":6}"#).unwrap();
        assert_eq!(cfg, ScalerConfig {
            decimals: 6,
            rounding: Rounding::Truncate,
        });
    }
}
