//! Dynamic values accepted by the console helpers.
//!
//! The entry points take variadic, loosely typed argument lists: any position
//! may hold a number, a string, an array to broadcast over, or a callback.
//! [`Value`] is the tagged union carrying those arguments. It deserializes
//! from JSON so that command-line and configuration inputs map onto it
//! directly.

mod accessor;
mod callback;

use std::{collections::BTreeMap, fmt, rc::Rc};

use serde::Deserialize;

pub use accessor::{AccessorArray, FnArray};
pub use callback::{Callback, Invocation};

/// A dynamically typed argument value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Integer number
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// String; never treated as a collection
    Str(String),
    /// Plain indexed collection
    Array(Vec<Value>),
    /// String-keyed record, typically used as a callback context
    Object(BTreeMap<String, Value>),
    /// Collection whose elements are reached through an accessor
    #[serde(skip)]
    Accessor(Rc<dyn AccessorArray>),
    /// Callable value
    #[serde(skip)]
    Function(Callback),
}

impl Value {
    /// Returns true for function values.
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Returns true for values iterated element by element when broadcasting.
    ///
    /// Strings are indexable but never count as collections here.
    pub fn is_collection(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Accessor(_))
    }

    /// Number of elements for collections, `None` otherwise.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            Value::Accessor(array) => Some(array.len()),
            _ => None,
        }
    }

    /// Returns true for empty collections.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Element at `index` for collections.
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            Value::Array(items) => items.get(index).cloned(),
            Value::Accessor(array) if index < array.len() => Some(array.get(index)),
            _ => None,
        }
    }

    /// Field lookup on objects.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Borrow the string contents, `None` for any other value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the callback of a function value.
    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            Value::Function(callback) => Some(callback),
            _ => None,
        }
    }

    /// Integer view of whole numbers.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            _ => None,
        }
    }

    /// Numeric view of numbers and numeric strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The `+` operator: numeric addition, or concatenation when either
    /// operand is not a plain number, boolean or null.
    pub fn plus(&self, rhs: &Value) -> Value {
        match (self.primitive_number(), rhs.primitive_number()) {
            (Some(Number::Int(a)), Some(Number::Int(b))) => a
                .checked_add(b)
                .map_or_else(|| Value::Float(a as f64 + b as f64), Value::Int),
            (Some(a), Some(b)) => Value::Float(a.as_f64() + b.as_f64()),
            _ => Value::Str(format!("{self}{rhs}")),
        }
    }

    fn primitive_number(&self) -> Option<Number> {
        match self {
            Value::Null => Some(Number::Int(0)),
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (a, b) if a.is_collection() && b.is_collection() => {
                let len = a.len().unwrap_or(0);
                len == b.len().unwrap_or(0) && (0..len).all(|i| a.get(i) == b.get(i))
            }
            _ => false,
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 prints as 0
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let rendered = format!("{n:e}");
        match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&rendered),
        }
    } else {
        write!(f, "{n}")
    }
}

fn write_elements(f: &mut fmt::Formatter<'_>, len: usize, get: impl Fn(usize) -> Value) -> fmt::Result {
    for i in 0..len {
        if i > 0 {
            f.write_str(",")?;
        }
        match get(i) {
            Value::Null => {}
            item => write!(f, "{item}")?,
        }
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write_number(f, *n),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => write_elements(f, items.len(), |i| items[i].clone()),
            Value::Accessor(array) => write_elements(f, array.len(), |i| array.get(i)),
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Function(_) => f.write_str("[Function]"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Int)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Callback> for Value {
    fn from(callback: Callback) -> Self {
        Value::Function(callback)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<T: AccessorArray + 'static> From<Rc<T>> for Value {
    fn from(array: Rc<T>) -> Self {
        Value::Accessor(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_predicate() {
        assert!(Value::from(vec![1, 2, 3]).is_collection());
        assert!(Value::Array(vec![]).is_collection());
        assert!(!Value::from("abc").is_collection());
        assert!(!Value::from(3).is_collection());
        assert!(!Value::Null.is_collection());
        let ctx: Value = [("factor", 2)].into_iter().collect();
        assert!(!ctx.is_collection());
    }

    #[test]
    fn test_display_matches_console_conventions() {
        assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "1,2,3");
        assert_eq!(Value::Array(vec![Value::Null, 1.into()]).to_string(), ",1");
        assert_eq!(Value::from(1.0).to_string(), "1");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
        assert_eq!(Value::from(-0.0).to_string(), "0");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Null.to_string(), "null");
        let ctx: Value = [("factor", 2)].into_iter().collect();
        assert_eq!(ctx.to_string(), "[object Object]");
    }

    #[test]
    fn test_display_switches_to_exponent_at_extremes() {
        assert_eq!(Value::from(1e21).to_string(), "1e+21");
        assert_eq!(Value::from(-2.5e22).to_string(), "-2.5e+22");
        assert_eq!(Value::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::from(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(Value::from(0.000001).to_string(), "0.000001");
    }

    #[test]
    fn test_function_predicate() {
        let callback = Callback::map(|_| Value::Null);
        let value = Value::from(callback.clone());
        assert!(value.is_function());
        assert!(value.as_callback().is_some_and(|cb| cb.ptr_eq(&callback)));
        assert!(!Value::from("f").is_function());
        assert!(Value::from(1).as_callback().is_none());
    }

    #[test]
    fn test_plus_adds_numbers_and_concatenates_strings() {
        assert_eq!(Value::from(1).plus(&Value::from(4)), Value::Int(5));
        assert_eq!(Value::from(0.5).plus(&Value::from(1)), Value::Float(1.5));
        assert_eq!(
            Value::from("foo").plus(&Value::from("bar")),
            Value::from("foobar")
        );
        assert_eq!(Value::from("a").plus(&Value::from(1)), Value::from("a1"));
        assert_eq!(Value::from(true).plus(&Value::from(1)), Value::Int(2));
    }

    #[test]
    fn test_int_and_float_compare_numerically() {
        assert_eq!(Value::Int(2), Value::Float(2.0));
        assert_ne!(Value::Int(2), Value::from("2"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let value: Value = serde_json::from_str(r#"[1, 2.5, "x", null, true, {"k": 1}]"#)
            .expect("valid JSON");
        let Value::Array(items) = value else {
            panic!("expected array");
        };
        assert!(matches!(items[0], Value::Int(1)));
        assert!(matches!(items[1], Value::Float(f) if f == 2.5));
        assert_eq!(items[2], Value::from("x"));
        assert!(matches!(items[3], Value::Null));
        assert!(matches!(items[4], Value::Bool(true)));
        assert_eq!(items[5].field("k"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_get_out_of_range() {
        let v = Value::from(vec![1]);
        assert_eq!(v.get(0), Some(Value::Int(1)));
        assert_eq!(v.get(1), None);
        assert_eq!(Value::from(1).get(0), None);
    }
}
