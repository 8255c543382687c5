//! Built-in converters.
//!
//! Each converter takes a trimmed, non-empty line and either produces a
//! value or says why it could not. They never print anything; reporting
//! is the prompt loop's job.

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::{ConversionError, ConversionResult};

/// Parse an optionally signed run of ASCII digits into any integer type.
///
/// Overflow in either direction is [`ConversionError::OutOfRange`].
pub fn parse_whole<T>(raw: &str, type_name: &str) -> ConversionResult<T>
where
    T: FromStr<Err = ParseIntError>,
{
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::malformed(type_name));
    }

    raw.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ConversionError::out_of_range(type_name)
        }
        _ => ConversionError::malformed(type_name),
    })
}

/// Parse a decimal or exponential literal into an `f64`.
///
/// Infinity and NaN spellings are not numbers here. A literal that
/// overflows to infinity, or a non-zero literal that underflows to zero,
/// is out of range.
pub fn parse_number(raw: &str, type_name: &str) -> ConversionResult<f64> {
    if !is_decimal_literal(raw) {
        return Err(ConversionError::malformed(type_name));
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| ConversionError::malformed(type_name))?;

    if value.is_infinite() || (value == 0.0 && has_nonzero_mantissa(raw)) {
        return Err(ConversionError::out_of_range(type_name));
    }
    Ok(value)
}

/// Parse a decimal literal with unbounded precision.
///
/// A well-formed literal whose exponent does not fit the decimal's scale
/// is out of range.
pub fn parse_decimal(raw: &str, type_name: &str) -> ConversionResult<BigDecimal> {
    if !is_decimal_literal(raw) {
        return Err(ConversionError::malformed(type_name));
    }
    BigDecimal::from_str(raw).map_err(|_| ConversionError::out_of_range(type_name))
}

/// Accept exactly one character.
pub fn parse_character(raw: &str, type_name: &str) -> ConversionResult<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConversionError::WrongLength {
            type_name: type_name.to_string(),
            length: raw.chars().count(),
        }),
    }
}

/// Text is always valid.
pub fn parse_text(raw: &str, _type_name: &str) -> ConversionResult<String> {
    Ok(raw.to_string())
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    let skip_digits = |i: &mut usize| {
        let start = *i;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - start
    };

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let mut mantissa_digits = skip_digits(&mut i);
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        mantissa_digits += skip_digits(&mut i);
    }
    if mantissa_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if skip_digits(&mut i) == 0 {
            return false;
        }
    }

    i == bytes.len()
}

fn has_nonzero_mantissa(s: &str) -> bool {
    s.split(|c| c == 'e' || c == 'E')
        .next()
        .is_some_and(|mantissa| mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')))
}
