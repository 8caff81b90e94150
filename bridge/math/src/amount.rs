use {
    crate::{
        parse::into_integer, parse_non_negative, serde_str::impl_serde_as_string, to_plain_string,
        MathResult, Rounding, ScalerConfig,
    },
    bigdecimal::{num_bigint::BigUint, BigDecimal, Zero},
    std::{
        fmt::{self, Display},
        str::FromStr,
    },
};

// -------------------------------- base amount --------------------------------

/// A token amount in base units, i.e. the integer the contract stores.
#[derive(Default, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaseAmount(BigUint);

impl BaseAmount {
    pub fn new(units: BigUint) -> Self {
        Self(units)
    }

    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn units(&self) -> &BigUint {
        &self.0
    }

    pub fn into_units(self) -> BigUint {
        self.0
    }
}

impl From<u128> for BaseAmount {
    fn from(units: u128) -> Self {
        Self(BigUint::from(units))
    }
}

impl From<BigUint> for BaseAmount {
    fn from(units: BigUint) -> Self {
        Self(units)
    }
}

impl Display for BaseAmount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for BaseAmount {
    type Err = crate::MathError;

    /// Base amounts are integral: fractional digits other than zeros are
    /// refused rather than rounded.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value = parse_non_negative(input)?;
        into_integer(value, Rounding::Reject, input).map(Self)
    }
}

impl_serde_as_string!(BaseAmount, "string-encoded non-negative integer");

// ------------------------------- scaled amount -------------------------------

/// A token amount in human units, e.g. `100.5` tokens.
#[derive(Default, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScaledAmount(BigDecimal);

impl ScaledAmount {
    pub fn new(value: BigDecimal) -> Self {
        Self(value.normalized())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }
}

impl Display for ScaledAmount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&to_plain_string(&self.0))
    }
}

impl FromStr for ScaledAmount {
    type Err = crate::MathError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_non_negative(input).map(Self::new)
    }
}

impl_serde_as_string!(ScaledAmount, "string-encoded non-negative decimal");

// ------------------------------- amount scaler -------------------------------

/// Converts token amounts between human units and base units.
///
/// ```rust
/// use bridge_math::AmountScaler;
///
/// let scaler = AmountScaler::default();
///
/// let base = scaler.to_base("100.5").unwrap();
/// assert_eq!(base.to_string(), "100500000000000000000");
///
/// let scaled = scaler.to_scaled("100500000000000000000").unwrap();
/// assert_eq!(scaled.to_string(), "100.5");
/// ```
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountScaler {
    config: ScalerConfig,
}

impl AmountScaler {
    pub const fn new(config: ScalerConfig) -> Self {
        Self { config }
    }

    pub const fn with_decimals(decimals: u8) -> Self {
        Self::new(ScalerConfig {
            decimals,
            rounding: ScalerConfig::DEFAULT.rounding,
        })
    }

    pub const fn config(&self) -> &ScalerConfig {
        &self.config
    }

    pub const fn decimals(&self) -> u8 {
        self.config.decimals
    }

    /// Computes `amount × 10^decimals`.
    ///
    /// Digits beyond the base-unit precision are handled according to the
    /// configured [`Rounding`].
    pub fn to_base(&self, amount: &str) -> MathResult<BaseAmount> {
        let value = parse_non_negative(amount)?;
        let shifted = shift(value, -i64::from(self.config.decimals));

        into_integer(shifted, self.config.rounding, amount).map(BaseAmount)
    }

    /// Computes `amount / 10^decimals`. Never loses precision.
    pub fn to_scaled(&self, amount: &str) -> MathResult<ScaledAmount> {
        let value = parse_non_negative(amount)?;

        Ok(ScaledAmount::new(shift(value, i64::from(self.config.decimals))))
    }

    /// Typed counterpart of [`to_base`](Self::to_base).
    pub fn scale_up(&self, amount: &ScaledAmount) -> MathResult<BaseAmount> {
        self.to_base(&amount.to_string())
    }

    /// Typed counterpart of [`to_scaled`](Self::to_scaled).
    pub fn scale_down(&self, amount: &BaseAmount) -> ScaledAmount {
        let value = BigDecimal::new(amount.0.clone().into(), 0);

        ScaledAmount::new(shift(value, i64::from(self.config.decimals)))
    }
}

/// Divides `value` by `10^places` by moving the decimal point. Negative
/// `places` multiply.
fn shift(value: BigDecimal, places: i64) -> BigDecimal {
    let (digits, scale) = value.into_bigint_and_exponent();
    BigDecimal::new(digits, scale + places)
}

/// Computes `amount × 10^decimals` with the default rounding policy.
pub fn to_base(amount: &str, decimals: u8) -> MathResult<BaseAmount> {
    AmountScaler::with_decimals(decimals).to_base(amount)
}

/// Computes `amount / 10^decimals`.
pub fn to_scaled(amount: &str, decimals: u8) -> MathResult<ScaledAmount> {
    AmountScaler::with_decimals(decimals).to_scaled(amount)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{MathError, WEI_DECIMALS},
        proptest::prelude::*,
        test_case::test_case,
    };

    #[test_case("0", 18 => "0"; "zero")]
    #[test_case("1", 18 => "1000000000000000000"; "one token")]
    #[test_case("100.5", 18 => "100500000000000000000"; "fractional token")]
    #[test_case("0.000000000000000001", 18 => "1"; "one wei")]
    #[test_case("1000000000", 18 => "1000000000000000000000000000"; "a billion tokens")]
    #[test_case("1.5", 6 => "1500000"; "six decimals")]
    #[test_case("42", 0 => "42"; "zero decimals")]
    #[test_case("1e9", 18 => "1000000000000000000000000000"; "exponent input")]
    #[test_case("0.0000000000000000019", 18 => "1"; "excess digits truncated")]
    fn converting_to_base(amount: &str, decimals: u8) -> String {
        to_base(amount, decimals).unwrap().to_string()
    }

    #[test_case("0", 18 => "0"; "zero")]
    #[test_case("1000000000000000000", 18 => "1"; "one token")]
    #[test_case("100500000000000000000", 18 => "100.5"; "fractional token")]
    #[test_case("1", 18 => "0.000000000000000001"; "one wei")]
    #[test_case("1000000000000000000000000000", 18 => "1000000000"; "a billion tokens")]
    #[test_case("1500000", 6 => "1.5"; "six decimals")]
    #[test_case("1e30", 18 => "1000000000000"; "exponent input")]
    fn converting_to_scaled(amount: &str, decimals: u8) -> String {
        to_scaled(amount, decimals).unwrap().to_string()
    }

    #[test_case("1e300", 18 => format!("1{}", "0".repeat(282)); "very large")]
    #[test_case("1e-300", 18 => format!("0.{}1", "0".repeat(317)); "very small")]
    fn converting_extreme_magnitudes_to_scaled(amount: &str, decimals: u8) -> String {
        to_scaled(amount, decimals).unwrap().to_string()
    }

    #[test]
    fn converting_extreme_magnitudes_to_base() {
        assert_eq!(
            to_base("1e300", 18).unwrap().to_string(),
            format!("1{}", "0".repeat(318))
        );
        assert!(to_base("1e-300", 18).unwrap().is_zero());
        assert!(to_base("2.5e257", 18).is_ok());
    }

    #[test_case(""; "empty")]
    #[test_case("not-a-number"; "garbage")]
    #[test_case("NaN"; "nan")]
    #[test_case("-1"; "negative")]
    fn rejecting_invalid_amounts(amount: &str) {
        assert!(matches!(
            to_base(amount, WEI_DECIMALS),
            Err(MathError::InvalidAmount { .. })
        ));
        assert!(matches!(
            to_scaled(amount, WEI_DECIMALS),
            Err(MathError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn rejecting_excess_precision() {
        let scaler = AmountScaler::new(ScalerConfig {
            decimals: 18,
            rounding: Rounding::Reject,
        });

        assert!(scaler.to_base("1.000000000000000001").is_ok());
        assert!(matches!(
            scaler.to_base("1.0000000000000000001"),
            Err(MathError::InvalidAmount { .. })
        ));
        // Trailing zeros past the precision are not excess digits.
        assert!(scaler.to_base("1.00000000000000000000").is_ok());
    }

    #[test]
    fn base_and_scaled_are_inverses() {
        let scaler = AmountScaler::default();

        let base = scaler.to_base("100.5").unwrap();
        assert_eq!(base, BaseAmount::from(100_500_000_000_000_000_000_u128));
        assert_eq!(scaler.scale_down(&base).to_string(), "100.5");

        let scaled = scaler.to_scaled("100500000000000000000").unwrap();
        assert_eq!(scaler.scale_up(&scaled).unwrap(), base);
    }

    #[test]
    fn parsing_base_amounts() {
        assert_eq!(
            "1000".parse::<BaseAmount>().unwrap(),
            BaseAmount::from(1000_u128)
        );
        assert_eq!("1000.00".parse::<BaseAmount>().unwrap().to_string(), "1000");
        assert!("1000.5".parse::<BaseAmount>().is_err());
    }

    #[test]
    fn serializing_amounts() {
        let base = BaseAmount::from(10_u128.pow(24));
        let json = serde_json::to_string(&base).unwrap();
        assert_eq!(json, r#""1000000000000000000000000""#);
        assert_eq!(serde_json::from_str::<BaseAmount>(&json).unwrap(), base);
        assert_eq!(
            serde_json::from_str::<BaseAmount>("25").unwrap(),
            BaseAmount::from(25_u128)
        );

        let scaled: ScaledAmount = "0.10".parse().unwrap();
        assert_eq!(serde_json::to_string(&scaled).unwrap(), r#""0.1""#);
    }

    proptest! {
        /// Scaling a value with at most `decimals` fractional digits up to
        /// base units and back reproduces it, up to trailing zeros.
        #[test]
        fn round_trip_is_identity(
            whole in 0_u64..=u64::MAX,
            fraction in proptest::collection::vec(0_u8..10, 0..=18),
            decimals in 18_u8..=36,
        ) {
            let fraction = fraction.iter().map(|d| char::from(b'0' + d)).collect::<String>();
            let amount = if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{whole}.{fraction}")
            };

            let base = to_base(&amount, decimals).unwrap();
            let back = to_scaled(&base.to_string(), decimals).unwrap();

            prop_assert!(!back.to_string().contains('e'));
            prop_assert_eq!(back, amount.parse::<ScaledAmount>().unwrap());
        }
    }
}
