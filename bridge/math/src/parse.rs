use {
    crate::{MathError, MathResult, Rounding},
    bigdecimal::{
        num_bigint::{BigInt, BigUint},
        BigDecimal, Zero,
    },
    std::str::FromStr,
};

/// Largest accepted magnitude of a scientific-notation exponent.
///
/// Bounds the length of the positional rendering, and of the powers of ten
/// built when converting, at about a million digits.
pub const MAX_EXPONENT: u64 = 1_000_000;

/// Parses a non-negative decimal number.
///
/// Accepted: `"1"`, `"001.50"`, `".5"`, `"5."`, `"+2"`, `"1e21"`, `"2.5E-3"`.
/// Surrounding whitespace is ignored.
///
/// Rejected: `""`, `"."`, `"-1"`, `"NaN"`, `"Infinity"`, `"1,000"`, `"1.2.3"`,
/// and exponents larger than [`MAX_EXPONENT`] in magnitude.
pub fn parse_non_negative(input: &str) -> MathResult<BigDecimal> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(MathError::invalid_amount(input, "empty input"));
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    if unsigned.starts_with('-') {
        return Err(MathError::invalid_amount(input, "amount cannot be negative"));
    }

    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if whole.is_empty() && fraction.is_empty() {
        return Err(MathError::invalid_amount(input, "no digits"));
    }

    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(MathError::invalid_amount(input, "not a decimal number"));
    }

    let exponent = match exponent {
        Some(exponent) => exponent
            .parse::<i64>()
            .map_err(|_| MathError::invalid_amount(input, "malformed exponent"))?,
        None => 0,
    };

    if exponent.unsigned_abs() > MAX_EXPONENT {
        return Err(MathError::invalid_amount(
            input,
            format!("exponent exceeds {MAX_EXPONENT} in magnitude"),
        ));
    }

    // Digits are all ASCII decimal, so this can't fail.
    let digits = BigInt::from_str(&format!("{whole}{fraction}"))
        .map_err(|err| MathError::invalid_amount(input, err))?;

    let scale = i64::try_from(fraction.len())
        .map_err(|_| MathError::invalid_amount(input, "too many fractional digits"))?;

    Ok(BigDecimal::new(digits, scale - exponent))
}

/// Converts a non-negative decimal into an integer, applying the rounding
/// policy to any fractional part. `input` is only used in error messages.
pub(crate) fn into_integer(
    value: BigDecimal,
    rounding: Rounding,
    input: &str,
) -> MathResult<BigUint> {
    let (digits, scale) = value.into_bigint_and_exponent();

    let digits = digits
        .to_biguint()
        .ok_or_else(|| MathError::invalid_amount(input, "amount cannot be negative"))?;

    let shift = u32::try_from(scale.unsigned_abs())
        .map_err(|_| MathError::invalid_amount(input, "exponent out of range"))?;

    let factor = BigUint::from(10_u8).pow(shift);

    if scale <= 0 {
        return Ok(digits * factor);
    }

    let quotient = &digits / &factor;
    let remainder = &digits % &factor;

    if rounding == Rounding::Reject && !remainder.is_zero() {
        return Err(MathError::invalid_amount(
            input,
            "more fractional digits than the target precision",
        ));
    }

    Ok(quotient)
}

// ----------------------------------- tests -----------------------------------
