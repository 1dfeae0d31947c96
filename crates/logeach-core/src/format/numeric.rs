//! Number rendering for numeric directives.

use super::{directive::Directive, FormatError};
use crate::value::Value;

/// Render an integer directive (`d`, `i`, `u`, `b`, `o`, `x`, `X`).
pub fn integer(
    value: &Value,
    directive: &Directive,
    precision: Option<usize>,
) -> Result<String, FormatError> {
    let mut n = to_integer(value)?;
    let base = match directive.specifier {
        'b' => 2,
        'o' => 8,
        'x' | 'X' => 16,
        _ => 10,
    };
    // Unsigned and non-decimal conversions show negatives as 32-bit two's complement.
    if n < 0 && (directive.specifier == 'u' || base != 10) {
        n = i64::from(n as u32);
    }

    let magnitude = n.unsigned_abs();
    let mut digits = match base {
        2 => format!("{magnitude:b}"),
        8 => format!("{magnitude:o}"),
        16 => format!("{magnitude:x}"),
        _ => magnitude.to_string(),
    };
    if let Some(precision) = precision {
        digits = zero_fill(digits, precision);
    }

    let mut out = if n < 0 {
        format!("-{digits}")
    } else {
        format!("{}{digits}", directive.sign())
    };
    match base {
        16 => {
            if directive.alternate {
                out = format!("0x{out}");
            }
            if directive.specifier == 'X' {
                out = out.to_uppercase();
            }
        }
        8 if directive.alternate && !out.starts_with('0') => out = format!("0{out}"),
        _ => {}
    }
    Ok(out)
}

/// Render a floating-point directive (`f`, `F`, `e`, `E`, `g`, `G`).
pub fn double(value: &Value, directive: &Directive, precision: usize) -> Result<String, FormatError> {
    let mut f = value
        .as_f64()
        .ok_or_else(|| FormatError::InvalidFloat {
            value: value.to_string(),
        })?;
    if f == 0.0 {
        f = 0.0;
    }

    let mut out = if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        String::from(if f > 0.0 { "inf" } else { "-inf" })
    } else {
        match directive.specifier.to_ascii_lowercase() {
            'e' => exponential(f, precision),
            'g' => general(f, precision, directive.alternate),
            _ => fixed(f, precision),
        }
    };

    if directive.alternate && f.is_finite() && !out.contains('.') {
        out = match out.find('e') {
            Some(at) => format!("{}.{}", &out[..at], &out[at..]),
            None => format!("{out}."),
        };
    }
    if f >= 0.0 || f.is_nan() {
        out = format!("{}{out}", directive.sign());
    }
    if directive.specifier.is_ascii_uppercase() {
        out = out.to_uppercase();
    }
    Ok(out)
}

/// Render a character directive from a code point or a string.
pub fn character(value: &Value) -> Result<String, FormatError> {
    let invalid = || FormatError::InvalidCharacter {
        value: value.to_string(),
    };
    match value {
        Value::Str(s) if s.trim().parse::<f64>().is_err() => Ok(s.clone()),
        _ => {
            let code = value.as_f64().ok_or_else(invalid)?;
            if code < 0.0 || code > f64::from(u32::MAX) {
                return Err(invalid());
            }
            char::from_u32(code.trunc() as u32)
                .map(String::from)
                .ok_or_else(invalid)
        }
    }
}

/// Pad `text` to `width` characters.
///
/// Zero padding goes after any sign or radix prefix and only applies when
/// `zero_pad` is set and the text is not left-aligned.
pub fn pad(text: String, width: usize, left_align: bool, zero_pad: bool) -> String {
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    let fill = width - len;
    if left_align {
        format!("{text}{}", " ".repeat(fill))
    } else if zero_pad && text.chars().any(|c| c.is_ascii_digit()) {
        let prefix = numeric_prefix_len(&text);
        format!("{}{}{}", &text[..prefix], "0".repeat(fill), &text[prefix..])
    } else {
        format!("{}{text}", " ".repeat(fill))
    }
}

fn numeric_prefix_len(text: &str) -> usize {
    let sign = usize::from(text.starts_with(['-', '+', ' ']));
    let rest = &text[sign..];
    if rest.starts_with("0x") || rest.starts_with("0X") {
        sign + 2
    } else {
        sign
    }
}

fn to_integer(value: &Value) -> Result<i64, FormatError> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Float(f) if !f.is_finite() => Ok(0),
        Value::Float(_) | Value::Str(_) => value
            .as_f64()
            .map(|f| if f.is_finite() { f.trunc() as i64 } else { 0 })
            .ok_or_else(|| FormatError::InvalidInteger {
                value: value.to_string(),
            }),
        _ => Err(FormatError::InvalidInteger {
            value: value.to_string(),
        }),
    }
}

fn zero_fill(digits: String, precision: usize) -> String {
    if digits.len() >= precision {
        digits
    } else {
        format!("{}{digits}", "0".repeat(precision - digits.len()))
    }
}

/// Scientific notation with at least two exponent digits (`1.50e+00`).
fn exponential(f: f64, precision: usize) -> String {
    let rendered = format!("{f:.precision$e}");
    let (mantissa, exponent) = split_exponent(&rendered);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// `%g`: fixed or scientific notation depending on the decimal exponent.
fn general(f: f64, precision: usize, alternate: bool) -> String {
    let precision = precision.max(1);
    let out = if f != 0.0 && f.abs() < 0.0001 {
        exponential(f, precision - 1)
    } else {
        let (_, exponent) = split_exponent(&format!("{f:.prec$e}", prec = precision - 1));
        if exponent < -6 || exponent >= precision as i32 {
            exponential(f, precision - 1)
        } else {
            let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
            fixed(f, decimals)
        }
    };
    if alternate {
        out
    } else {
        strip_trailing_zeros(&out)
    }
}

/// Fixed-point notation; exact ties round away from zero.
fn fixed(f: f64, precision: usize) -> String {
    // A tie needs a binary expansion no longer than `precision + 1` decimals,
    // in which case rendering one extra digit is exact.
    let scaled = f * 2f64.powi(precision as i32 + 1);
    if scaled.fract() == 0.0 {
        let exact = format!("{:.*}", precision + 1, f.abs());
        if let Some(kept) = exact.strip_suffix('5') {
            let rounded = increment_last_digit(kept.trim_end_matches('.'));
            return if f < 0.0 { format!("-{rounded}") } else { rounded };
        }
    }
    format!("{f:.precision$}")
}

fn increment_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    for c in chars.iter_mut().rev() {
        match *c {
            '.' => {}
            '9' => *c = '0',
            d => {
                *c = char::from(d as u8 + 1);
                return chars.into_iter().collect();
            }
        }
    }
    chars.insert(0, '1');
    chars.into_iter().collect()
}

fn split_exponent(rendered: &str) -> (&str, i32) {
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (rendered, 0),
    }
}

fn strip_trailing_zeros(out: &str) -> String {
    let (mantissa, exponent) = match out.find('e') {
        Some(at) => out.split_at(at),
        None => (out, ""),
    };
    if !mantissa.contains('.') {
        return out.to_string();
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{exponent}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(specifier: char) -> Directive {
        Directive {
            specifier,
            ..Directive::default()
        }
    }

    #[test]
    fn test_fixed_ties_round_away_from_zero() {
        assert_eq!(double(&Value::from(0.125), &plain('f'), 2).unwrap(), "0.13");
        assert_eq!(double(&Value::from(2.5), &plain('f'), 0).unwrap(), "3");
        assert_eq!(double(&Value::from(-1.5), &plain('f'), 0).unwrap(), "-2");
        assert_eq!(double(&Value::from(99.5), &plain('f'), 0).unwrap(), "100");
        assert_eq!(double(&Value::from(0.125), &plain('g'), 2).unwrap(), "0.13");
        assert_eq!(double(&Value::from(1.005), &plain('f'), 2).unwrap(), "1.00");
        assert_eq!(double(&Value::from(0.25), &plain('f'), 3).unwrap(), "0.250");
    }

    #[test]
    fn test_integer_truncates_floats() {
        assert_eq!(integer(&Value::from(2.9), &plain('d'), None).unwrap(), "2");
        assert_eq!(integer(&Value::from(-2.9), &plain('d'), None).unwrap(), "-2");
        assert_eq!(integer(&Value::from("42"), &plain('i'), None).unwrap(), "42");
    }

    #[test]
    fn test_integer_rejects_non_numbers() {
        let err = integer(&Value::from("abc"), &plain('d'), None).unwrap_err();
        assert!(matches!(err, FormatError::InvalidInteger { .. }));
        assert!(integer(&Value::Null, &plain('d'), None).is_err());
    }

    #[test]
    fn test_integer_bases() {
        assert_eq!(integer(&Value::from(5), &plain('b'), None).unwrap(), "101");
        assert_eq!(integer(&Value::from(8), &plain('o'), None).unwrap(), "10");
        assert_eq!(integer(&Value::from(255), &plain('X'), None).unwrap(), "FF");
        assert_eq!(integer(&Value::from(-1), &plain('x'), None).unwrap(), "ffffffff");
        assert_eq!(integer(&Value::from(-1), &plain('u'), None).unwrap(), "4294967295");
        let alt = Directive {
            alternate: true,
            ..plain('x')
        };
        assert_eq!(integer(&Value::from(255), &alt, None).unwrap(), "0xff");
    }

    #[test]
    fn test_integer_precision_and_sign() {
        let plus = Directive {
            plus_sign: true,
            ..plain('d')
        };
        assert_eq!(integer(&Value::from(7), &plus, Some(3)).unwrap(), "+007");
        assert_eq!(integer(&Value::from(-7), &plus, Some(3)).unwrap(), "-007");
    }

    #[test]
    fn test_fixed_notation() {
        assert_eq!(double(&Value::from(0.25), &plain('f'), 2).unwrap(), "0.25");
        assert_eq!(double(&Value::from(1), &plain('f'), 6).unwrap(), "1.000000");
        assert_eq!(double(&Value::from(-0.0), &plain('f'), 1).unwrap(), "0.0");
    }

    #[test]
    fn test_exponential_notation() {
        assert_eq!(double(&Value::from(1.5), &plain('e'), 2).unwrap(), "1.50e+00");
        assert_eq!(double(&Value::from(12345.0), &plain('E'), 1).unwrap(), "1.2E+04");
        assert_eq!(double(&Value::from(0.00012), &plain('e'), 1).unwrap(), "1.2e-04");
    }

    #[test]
    fn test_general_notation() {
        assert_eq!(double(&Value::from(100000.0), &plain('g'), 6).unwrap(), "100000");
        assert_eq!(double(&Value::from(1000000.0), &plain('g'), 6).unwrap(), "1e+06");
        assert_eq!(double(&Value::from(0.5), &plain('g'), 6).unwrap(), "0.5");
        assert_eq!(double(&Value::from(0.00001), &plain('g'), 6).unwrap(), "1e-05");
        assert_eq!(double(&Value::from(0), &plain('g'), 6).unwrap(), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(double(&Value::from(f64::NAN), &plain('f'), 6).unwrap(), "nan");
        assert_eq!(double(&Value::from(f64::INFINITY), &plain('F'), 6).unwrap(), "INF");
        assert!(double(&Value::from("x"), &plain('f'), 6).is_err());
    }

    #[test]
    fn test_character() {
        assert_eq!(character(&Value::from(65)).unwrap(), "A");
        assert_eq!(character(&Value::from("hi")).unwrap(), "hi");
        assert!(character(&Value::from(-1)).is_err());
    }

    #[test]
    fn test_padding() {
        assert_eq!(pad("5".into(), 3, false, false), "  5");
        assert_eq!(pad("5".into(), 3, true, false), "5  ");
        assert_eq!(pad("-5".into(), 4, false, true), "-005");
        assert_eq!(pad("0xff".into(), 6, false, true), "0x00ff");
        assert_eq!(pad("abcd".into(), 2, false, false), "abcd");
    }
}
