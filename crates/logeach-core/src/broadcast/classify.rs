//! Classification of broadcast arguments.

use std::fmt;

use crate::value::Value;

/// Element accessor resolved once per argument: `(sequence, offset) -> element`.
pub type Getter = fn(&Value, usize) -> Value;

/// Resolve the element accessor for a backing sequence.
pub fn resolve_getter(sequence: &Value) -> Getter {
    match sequence {
        Value::Accessor(_) => accessor_get,
        _ => array_get,
    }
}

fn array_get(sequence: &Value, offset: usize) -> Value {
    match sequence {
        Value::Array(items) => items.get(offset).cloned().unwrap_or_default(),
        _ => Value::Null,
    }
}

fn accessor_get(sequence: &Value, offset: usize) -> Value {
    match sequence {
        Value::Accessor(array) if offset < array.len() => array.get(offset),
        _ => Value::Null,
    }
}

/// A classified positional argument.
#[derive(Clone)]
pub enum Argument {
    /// Non-collection value repeated on every iteration
    Scalar(Value),
    /// Collection read one element per iteration
    Collection {
        sequence: Value,
        getter: Getter,
        len: usize,
    },
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Argument::Collection { sequence, len, .. } => f
                .debug_struct("Collection")
                .field("sequence", sequence)
                .field("len", len)
                .finish(),
        }
    }
}

impl Argument {
    /// Classify a raw argument. Strings are always scalars.
    pub fn classify(value: Value) -> Self {
        match value.len() {
            Some(len) if value.is_collection() => Argument::Collection {
                getter: resolve_getter(&value),
                sequence: value,
                len,
            },
            _ => Argument::Scalar(value),
        }
    }

    /// Length of a collection argument.
    pub fn len(&self) -> Option<usize> {
        match self {
            Argument::Collection { len, .. } => Some(*len),
            Argument::Scalar(_) => None,
        }
    }

    /// Read offset increment: 1 for collections, 0 for broadcast scalars.
    pub fn stride(&self) -> usize {
        match self {
            Argument::Collection { .. } => 1,
            Argument::Scalar(_) => 0,
        }
    }

    /// Split into backing sequence, accessor and stride. Scalars become
    /// singleton arrays.
    pub fn into_parts(self) -> (Value, Getter, usize) {
        let stride = self.stride();
        match self {
            Argument::Collection {
                sequence, getter, ..
            } => (sequence, getter, stride),
            Argument::Scalar(value) => {
                let sequence = Value::Array(vec![value]);
                let getter = resolve_getter(&sequence);
                (sequence, getter, stride)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::value::FnArray;

    #[test]
    fn test_array_is_collection_with_unit_stride() {
        let arg = Argument::classify(Value::from(vec![1, 2, 3]));
        assert_eq!(arg.len(), Some(3));
        assert_eq!(arg.stride(), 1);
    }

    #[test]
    fn test_string_is_scalar() {
        let arg = Argument::classify(Value::from("foo"));
        assert!(matches!(arg, Argument::Scalar(_)));
        assert_eq!(arg.stride(), 0);
        assert_eq!(arg.len(), None);
    }

    #[test]
    fn test_scalar_wrapped_as_singleton() {
        let (sequence, getter, stride) = Argument::classify(Value::from(5)).into_parts();
        assert_eq!(sequence, Value::from(vec![5]));
        assert_eq!(getter(&sequence, 0), Value::Int(5));
        assert_eq!(stride, 0);
    }

    #[test]
    fn test_accessor_collection_uses_accessor_getter() {
        let lazy = Value::from(Rc::new(FnArray::new(3, |i| Value::from(i * 10))));
        let (sequence, getter, stride) = Argument::classify(lazy).into_parts();
        assert_eq!(stride, 1);
        assert_eq!(getter(&sequence, 2), Value::Int(20));
    }

    #[test]
    fn test_empty_collection_is_legal() {
        let arg = Argument::classify(Value::Array(vec![]));
        assert_eq!(arg.len(), Some(0));
    }
}
