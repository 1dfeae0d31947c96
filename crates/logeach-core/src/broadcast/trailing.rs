//! Locating the trailing callback and its optional execution context.

use crate::{
    error::{ConsoleError, Result},
    value::{Callback, Value},
};

/// Arguments of a mapping call after the callback has been located.
#[derive(Debug)]
pub struct Trailing {
    pub callback: Callback,
    pub this: Option<Value>,
    /// Arguments strictly between the template and the callback
    pub args: Vec<Value>,
}

/// Split `args` into broadcast arguments, callback and context.
///
/// A function in last position is the callback and no context is bound.
/// Otherwise the second-to-last argument must be a function and the last one
/// is its context.
///
/// # Errors
///
/// Returns [`ConsoleError::InvalidCallback`] when neither candidate is a
/// function.
pub fn split_callback(mut args: Vec<Value>) -> Result<Trailing> {
    let this = match args.last() {
        Some(last) if last.is_function() => None,
        _ => args.pop(),
    };
    let candidate = args.pop().unwrap_or_default();
    let callback = candidate
        .as_callback()
        .cloned()
        .ok_or_else(|| ConsoleError::invalid_callback(&candidate))?;
    Ok(Trailing {
        callback,
        this,
        args,
    })
}
