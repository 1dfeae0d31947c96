//! C-style string formatting.
//!
//! [`format`] substitutes `%` directives in a template with a flat list of
//! [`Value`]s:
//!
//! ```text
//! %[position$][flags][width][.precision]specifier
//! ```
//!
//! | Specifier            | Output                                    |
//! |----------------------|-------------------------------------------|
//! | `s`                  | value as displayed by [`Value`]           |
//! | `d`, `i`, `u`        | decimal integer, floats truncated         |
//! | `b`, `o`, `x`, `X`   | binary, octal, hexadecimal integer        |
//! | `f`, `F`             | fixed-point, precision defaults to 6      |
//! | `e`, `E`             | scientific notation                       |
//! | `g`, `G`             | shortest of fixed and scientific          |
//! | `c`                  | character from a code point               |
//! | `%%`                 | literal `%`                               |
//!
//! Flags are `-` (left-align), `0` (zero-pad numbers), `+` and ` ` (sign of
//! non-negative numbers) and `#` (alternate form). Width and precision may
//! be `*`, in which case they are read from the value list. Values left over
//! after the last directive are ignored.
//!
//! # Examples
//!
//! ```rust
//! use logeach_core::{format::format, Value};
//!
//! let values = [Value::from(0.5), Value::from(0.75), Value::from(0.375)];
//! let line = format("%0.2f * %0.2f = %0.2f", &values)?;
//! assert_eq!(line, "0.50 * 0.75 = 0.38");
//! # Ok::<(), logeach_core::format::FormatError>(())
//! ```

mod directive;
mod numeric;

use thiserror::Error;

pub use directive::{tokenize, Count, Directive, Token};

use crate::value::Value;

/// Errors raised while interpolating a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A directive referenced a value past the end of the list
    #[error("insufficient arguments. Directive `%{specifier}` requires value {position}, but {available} provided.")]
    MissingArgument {
        specifier: char,
        position: usize,
        available: usize,
    },
    /// Integer directive applied to a non-numeric value
    #[error("invalid integer. Value: `{value}`.")]
    InvalidInteger { value: String },
    /// Floating-point directive applied to a non-numeric value
    #[error("invalid floating-point number. Value: `{value}`.")]
    InvalidFloat { value: String },
    /// `%c` applied to a value that is not a valid code point
    #[error("invalid character code. Value: `{value}`.")]
    InvalidCharacter { value: String },
    /// `*` width or precision taken from a non-integer value
    #[error("invalid width or precision. Value: `{value}`.")]
    InvalidCount { value: String },
    /// Unsupported conversion specifier
    #[error("invalid specifier: `{specifier}`.")]
    UnknownSpecifier { specifier: char },
}

/// Widest accepted field width.
const MAX_WIDTH: usize = u16::MAX as usize;
/// Largest accepted precision for numeric directives.
const MAX_PRECISION: usize = 100;

/// Interpolate `values` into `template`.
pub fn format(template: &str, values: &[Value]) -> Result<String, FormatError> {
    interpolate(template, values).map(|(line, _)| line)
}

/// Interpolate `values` into `template`, also returning how many leading
/// values the directives consumed.
///
/// ```rust
/// use logeach_core::{format::interpolate, Value};
///
/// let values = [Value::from("a"), Value::from("b")];
/// assert_eq!(interpolate("%s", &values)?, ("a".to_string(), 1));
/// # Ok::<(), logeach_core::format::FormatError>(())
/// ```
pub fn interpolate(template: &str, values: &[Value]) -> Result<(String, usize), FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    let mut used = 0;

    for token in tokenize(template) {
        let directive = match token {
            Token::Literal(text) => {
                out.push_str(text);
                continue;
            }
            Token::Directive(directive) => directive,
        };
        if !is_supported(directive.specifier) {
            return Err(FormatError::UnknownSpecifier {
                specifier: directive.specifier,
            });
        }
        if let Some(position) = directive.position {
            next = position - 1;
        }

        let mut left_align = directive.left_align;
        let width = match directive.width {
            Some(count) => {
                let width = resolve_count(count, values, &mut next, directive.specifier)?;
                if width < 0 {
                    left_align = true;
                }
                let width = usize::try_from(width.unsigned_abs()).unwrap_or(usize::MAX);
                out_of_range(width, MAX_WIDTH)?
            }
            None => 0,
        };
        let precision = match directive.precision {
            Some(count) => {
                let precision = resolve_count(count, values, &mut next, directive.specifier)?;
                match usize::try_from(precision) {
                    Ok(precision) if is_numeric(directive.specifier) => {
                        Some(out_of_range(precision, MAX_PRECISION)?)
                    }
                    precision => precision.ok(),
                }
            }
            None => None,
        };

        let value = take(values, &mut next, directive.specifier)?;
        used = used.max(next);
        let text = render(value, &directive, precision)?;
        let zero_pad = directive.zero_pad && is_numeric(directive.specifier);
        out.push_str(&numeric::pad(text, width, left_align, zero_pad));
    }

    Ok((out, used))
}

fn out_of_range(count: usize, max: usize) -> Result<usize, FormatError> {
    if count > max {
        return Err(FormatError::InvalidCount {
            value: count.to_string(),
        });
    }
    Ok(count)
}

fn render(
    value: &Value,
    directive: &Directive,
    precision: Option<usize>,
) -> Result<String, FormatError> {
    match directive.specifier {
        's' => {
            let text = value.to_string();
            Ok(match precision {
                Some(max) => text.chars().take(max).collect(),
                None => text,
            })
        }
        'c' => numeric::character(value),
        'f' | 'F' | 'e' | 'E' | 'g' | 'G' => {
            numeric::double(value, directive, precision.unwrap_or(6))
        }
        _ => numeric::integer(value, directive, precision),
    }
}

fn take<'a>(values: &'a [Value], next: &mut usize, specifier: char) -> Result<&'a Value, FormatError> {
    let value = values.get(*next).ok_or(FormatError::MissingArgument {
        specifier,
        position: *next + 1,
        available: values.len(),
    })?;
    *next += 1;
    Ok(value)
}

fn resolve_count(
    count: Count,
    values: &[Value],
    next: &mut usize,
    specifier: char,
) -> Result<i64, FormatError> {
    match count {
        Count::Fixed(n) => Ok(i64::try_from(n).unwrap_or(i64::MAX)),
        Count::FromArg => {
            let value = take(values, next, specifier)?;
            value.as_i64().ok_or_else(|| FormatError::InvalidCount {
                value: value.to_string(),
            })
        }
    }
}

fn is_numeric(specifier: char) -> bool {
    matches!(
        specifier,
        'd' | 'i' | 'u' | 'b' | 'o' | 'x' | 'X' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G'
    )
}

fn is_supported(specifier: char) -> bool {
    is_numeric(specifier) || matches!(specifier, 's' | 'c')
}
