//! Callback values invoked by `log_each_map`.

use std::{fmt, rc::Rc};

use super::Value;
use crate::error::CallbackError;

/// Arguments handed to a callback on one iteration.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    /// Execution context supplied after the callback, if any
    pub this: Option<&'a Value>,
    /// Current element of every broadcast argument, in argument order
    pub values: &'a [Value],
    /// Zero-based iteration index
    pub index: usize,
    /// Every resolved argument sequence; scalars appear as singleton arrays
    pub arrays: &'a [Value],
}

impl Invocation<'_> {
    /// Current element of the argument at `position`, or null when absent.
    pub fn arg(&self, position: usize) -> Value {
        self.values.get(position).cloned().unwrap_or_default()
    }

    /// Field of the execution context.
    pub fn this_field(&self, name: &str) -> Option<&Value> {
        self.this.and_then(|this| this.field(name))
    }
}

type CallbackFn = dyn Fn(&Invocation<'_>) -> Result<Value, CallbackError>;

/// A shareable, fallible callback.
#[derive(Clone)]
pub struct Callback(Rc<CallbackFn>);

impl Callback {
    /// Wrap a closure receiving the full invocation.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Invocation<'_>) -> Result<Value, CallbackError> + 'static,
    {
        Self(Rc::new(f))
    }

    /// Wrap an infallible closure that only looks at the current elements.
    pub fn map<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        Self::new(move |invocation| Ok(f(invocation.values)))
    }

    /// Invoke the callback.
    pub fn call(&self, invocation: &Invocation<'_>) -> Result<Value, CallbackError> {
        (self.0)(invocation)
    }

    /// Returns true when both handles refer to the same closure.
    pub fn ptr_eq(&self, other: &Callback) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}
