// Locale-aware number parsing and formatting shared by all numeric converters.
//
// Parsing normalizes the locale text ("1.234,56" in de_DE) into the plain form
// Rust's `FromStr` understands ("1234.56") and then range-checks the result
// against the bounds the caller passes in. Formatting goes the other way,
// starting from the `Display` output of the value.
use std::fmt::LowerExp;
use std::str::FromStr;

use shared::models::{Locale, NumberSymbols};
use shared::utils::number_symbols;

use crate::error::{ConversionError, ConversionErrorKind};

const INFINITY_SYMBOL: &str = "∞";
const NAN_SYMBOL: &str = "NaN";

#[derive(Debug, PartialEq)]
enum Scanned {
    Empty,
    NaN,
    Infinite { negative: bool },
    Finite { negative: bool, integer: String, fraction: String },
}

// Returns None when the text is not a number in this locale.
fn scan(text: &str, symbols: &NumberSymbols, allow_fraction: bool) -> Option<Scanned> {
    let text = text.trim();
    if text.is_empty() {
        return Some(Scanned::Empty);
    }
    if text.eq_ignore_ascii_case(NAN_SYMBOL) {
        return Some(Scanned::NaN);
    }

    let (negative, body) = match text.strip_prefix(symbols.minus).or_else(|| text.strip_prefix('-')) {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if body == INFINITY_SYMBOL || body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
        return Some(Scanned::Infinite { negative });
    }

    let chars: Vec<char> = body.chars().collect();
    let mut integer = String::new();
    let mut fraction = String::new();
    let mut in_fraction = false;

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_digit() {
            if in_fraction {
                fraction.push(c);
            } else {
                integer.push(c);
            }
        } else if !in_fraction && c == symbols.decimal {
            if !allow_fraction {
                return None;
            }
            in_fraction = true;
        } else if !in_fraction && symbols.is_grouping(c) {
            // Grouping separators only count between two digits.
            let before = i > 0 && chars[i - 1].is_ascii_digit();
            let after = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            if !before || !after {
                return None;
            }
        } else {
            return None;
        }
    }

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    Some(Scanned::Finite { negative, integer, fraction })
}

/// Pattern shown in error messages, e.g. `#.##0,###` for de_DE.
pub fn describe_format(locale: &Locale, allow_fraction: bool) -> String {
    let symbols = number_symbols(locale);
    if allow_fraction {
        format!("#{}##0{}###", symbols.grouping, symbols.decimal)
    } else {
        format!("#{}##0", symbols.grouping)
    }
}

/// Parses a decimal number written in `locale`, rejecting results outside `[min, max]`.
///
/// Empty (or all-whitespace) text is `Ok(None)`. The plain decimal string is handed
/// to `T::from_str`, so rounding to the target precision is exact for that type.
/// The range check runs on the rounded value: text slightly above `f32::MAX` that
/// rounds down to it is accepted, which keeps `f32::MAX` itself round-tripping.
/// Only text that rounds to infinity is out of range.
pub fn parse_decimal<T>(
    value: &str,
    min: T,
    max: T,
    locale: &Locale,
    target_type: &'static str,
) -> Result<Option<T>, ConversionError>
where
    T: FromStr + PartialOrd + LowerExp + Copy,
{
    let symbols = number_symbols(locale);
    let unparseable = || ConversionError::unparseable(describe_format(locale, true), value, target_type, locale);

    let plain = match scan(value, &symbols, true).ok_or_else(unparseable)? {
        Scanned::Empty => return Ok(None),
        Scanned::NaN => "NaN".to_string(),
        Scanned::Infinite { negative } => format!("{}inf", if negative { "-" } else { "" }),
        Scanned::Finite { negative, integer, fraction } => format!(
            "{}{}.{}",
            if negative { "-" } else { "" },
            if integer.is_empty() { "0" } else { integer.as_str() },
            if fraction.is_empty() { "0" } else { fraction.as_str() },
        ),
    };
    let number: T = plain.parse().map_err(|_| unparseable())?;

    if number < min {
        return Err(ConversionError::new(
            ConversionErrorKind::BelowMinimum { min: format!("{:e}", min) },
            value,
            target_type,
            locale,
        ));
    }
    if number > max {
        return Err(ConversionError::new(
            ConversionErrorKind::AboveMaximum { max: format!("{:e}", max) },
            value,
            target_type,
            locale,
        ));
    }
    Ok(Some(number))
}

/// Parses a whole number written in `locale`, rejecting results outside `[min, max]`.
///
/// Digits are accumulated exactly, so the extremes of 64-bit types survive.
/// A decimal separator makes the text unparseable.
pub fn parse_integer<T>(
    value: &str,
    min: T,
    max: T,
    locale: &Locale,
    target_type: &'static str,
) -> Result<Option<T>, ConversionError>
where
    T: Into<i128> + TryFrom<i128> + Copy,
{
    let symbols = number_symbols(locale);
    let unparseable = || ConversionError::unparseable(describe_format(locale, false), value, target_type, locale);
    let below = || {
        ConversionError::new(
            ConversionErrorKind::BelowMinimum { min: min.into().to_string() },
            value,
            target_type,
            locale,
        )
    };
    let above = || {
        ConversionError::new(
            ConversionErrorKind::AboveMaximum { max: max.into().to_string() },
            value,
            target_type,
            locale,
        )
    };

    let (negative, digits) = match scan(value, &symbols, false).ok_or_else(unparseable)? {
        Scanned::Empty => return Ok(None),
        Scanned::NaN => return Err(unparseable()),
        Scanned::Infinite { negative } => return Err(if negative { below() } else { above() }),
        Scanned::Finite { negative, integer, .. } => (negative, integer),
    };

    // Only digits remain, so the sole failure is overflowing i128.
    let magnitude: i128 = match digits.parse() {
        Ok(m) => m,
        Err(_) => return Err(if negative { below() } else { above() }),
    };
    let number = if negative { -magnitude } else { magnitude };

    if number < min.into() {
        return Err(below());
    }
    if number > max.into() {
        return Err(above());
    }
    T::try_from(number).map(Some).map_err(|_| above())
}

/// Renders the `Display` form of a number (`-1234.5`, `NaN`, `inf`) in `locale`.
pub fn format_number(plain: &str, locale: &Locale) -> String {
    let symbols = number_symbols(locale);
    let (negative, body) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain),
    };

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if body.eq_ignore_ascii_case("nan") {
        return NAN_SYMBOL.to_string();
    }
    if negative {
        out.push(symbols.minus);
    }
    if body == "inf" {
        out.push_str(INFINITY_SYMBOL);
        return out;
    }

    let (integer, fraction) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let len = integer.len();
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(symbols.grouping);
        }
        out.push(c);
    }
    if let Some(fraction) = fraction.filter(|f| !f.is_empty()) {
        out.push(symbols.decimal);
        out.push_str(fraction);
    }
    out
}
