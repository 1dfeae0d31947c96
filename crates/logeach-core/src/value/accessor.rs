//! Collections that expose their elements through an accessor.

use std::fmt;

use super::Value;

/// An ordered collection read element by element through `get`.
///
/// Implement this for packed or lazily computed buffers that cannot hand out
/// a `Vec<Value>`. Broadcasting treats accessor collections exactly like
/// plain arrays.
pub trait AccessorArray: fmt::Debug {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, which is always below [`AccessorArray::len`].
    fn get(&self, index: usize) -> Value;

    /// Returns true when the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accessor collection computing each element from its index.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use logeach_core::value::{FnArray, Value};
///
/// let squares = Value::from(Rc::new(FnArray::new(3, |i| Value::from(i * i))));
/// assert_eq!(squares.to_string(), "0,1,4");
/// ```
pub struct FnArray<F> {
    len: usize,
    element: F,
}

impl<F> FnArray<F>
where
    F: Fn(usize) -> Value,
{
    /// Create an accessor collection of `len` elements.
    pub fn new(len: usize, element: F) -> Self {
        Self { len, element }
    }
}

impl<F> fmt::Debug for FnArray<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnArray").field("len", &self.len).finish()
    }
}

impl<F> AccessorArray for FnArray<F>
where
    F: Fn(usize) -> Value,
{
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Value {
        (self.element)(index)
    }
}
