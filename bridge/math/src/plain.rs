use bigdecimal::{num_bigint::Sign, BigDecimal};

/// Renders a decimal in positional notation, without trailing fractional
/// zeros, never switching to exponential notation regardless of magnitude.
///
/// ```rust
/// use {bigdecimal::BigDecimal, bridge_math::to_plain_string, std::str::FromStr};
///
/// let value = BigDecimal::from_str("1e24").unwrap();
/// assert_eq!(to_plain_string(&value), "1000000000000000000000000");
/// ```
pub fn to_plain_string(value: &BigDecimal) -> String {
    let (digits, scale) = value.normalized().into_bigint_and_exponent();

    if digits.sign() == Sign::NoSign {
        return "0".to_string();
    }

    let sign = if digits.sign() == Sign::Minus { "-" } else { "" };
    let digits = digits.magnitude().to_string();
    let shift = scale.unsigned_abs() as usize;

    if scale <= 0 {
        return format!("{sign}{digits}{}", "0".repeat(shift));
    }

    if digits.len() > shift {
        let (whole, fraction) = digits.split_at(digits.len() - shift);
        format!("{sign}{whole}.{fraction}")
    } else {
        format!("{sign}0.{}{digits}", "0".repeat(shift - digits.len()))
    }
}

// ----------------------------------- tests -----------------------------------
