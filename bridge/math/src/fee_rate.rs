use {
    crate::{
        parse::into_integer, parse_non_negative, serde_str::impl_serde_as_string, to_plain_string,
        AmountScaler, MathResult, Rounding,
    },
    bigdecimal::{
        num_bigint::{BigInt, BigUint},
        BigDecimal, Zero,
    },
    std::{
        fmt::{self, Display},
        str::FromStr,
    },
};

/// Number of millionths in a ratio of one.
pub const MILLION: u32 = 1_000_000;

/// Decimal places between a ratio and its millionths encoding.
const MILLION_PLACES: i64 = 6;

// -------------------------------- millionths ---------------------------------

/// A fee rate encoded as an integer number of millionths, the way the router
/// config contract stores it: `1_000` stands for `0.001`.
#[derive(Default, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Millionths(BigUint);

impl Millionths {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn to_ratio(&self) -> FeeRate {
        let digits = BigInt::from(self.0.clone());
        FeeRate(BigDecimal::new(digits, MILLION_PLACES).normalized())
    }
}

impl From<u64> for Millionths {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl Display for Millionths {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for Millionths {
    type Err = crate::MathError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value = parse_non_negative(input)?;
        into_integer(value, Rounding::Reject, input).map(Self)
    }
}

impl_serde_as_string!(Millionths, "string-encoded number of millionths");

// --------------------------------- fee rate ----------------------------------

/// A fee rate as a plain ratio, e.g. `0.001` for a tenth of a percent.
#[derive(Default, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FeeRate(BigDecimal);

impl FeeRate {
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    pub fn to_millionths(&self, rounding: Rounding) -> MathResult<Millionths> {
        let (digits, scale) = self.0.as_bigint_and_exponent();
        let scaled = BigDecimal::new(digits, scale - MILLION_PLACES);

        into_integer(scaled, rounding, &self.to_string()).map(Millionths)
    }
}

impl Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&to_plain_string(&self.0))
    }
}

impl FromStr for FeeRate {
    type Err = crate::MathError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_non_negative(input).map(|value| Self(value.normalized()))
    }
}

impl_serde_as_string!(FeeRate, "string-encoded fee ratio");

// ------------------------------- conversions ---------------------------------

impl AmountScaler {
    /// Computes `ratio × 1_000_000`, rounding according to the scaler's
    /// configuration.
    pub fn to_millionths(&self, ratio: &str) -> MathResult<Millionths> {
        ratio
            .parse::<FeeRate>()?
            .to_millionths(self.config().rounding)
    }
}

/// Computes `millionths / 1_000_000`.
///
/// ```rust
/// assert_eq!(bridge_math::to_ratio(1_000_u64).to_string(), "0.001");
/// ```
pub fn to_ratio<M>(millionths: M) -> FeeRate
where
    M: Into<Millionths>,
{
    millionths.into().to_ratio()
}

/// Computes `ratio × 1_000_000`, dropping digits below one millionth.
///
/// ```rust
/// assert_eq!(bridge_math::to_millionths("0.001").unwrap().to_string(), "1000");
/// ```
pub fn to_millionths(ratio: &str) -> MathResult<Millionths> {
    AmountScaler::default().to_millionths(ratio)
}

// ----------------------------------- tests -----------------------------------
