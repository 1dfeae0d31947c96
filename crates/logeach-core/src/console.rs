//! Console entry points.
//!
//! - [`log`]: print one formatted line
//! - [`log_each`]: print a formatted line per broadcast row
//! - [`log_each_map`]: pass each broadcast row through a callback and print
//!   the row followed by the callback's result
//!
//! All three write through an injected [`LineSink`]. Nothing is written
//! before argument validation succeeds; once iteration starts, each line is
//! handed to the sink before the next row is computed, so lines printed
//! before a failing callback remain visible.

mod builder;

use ::log::debug;

pub use builder::ConsoleBuilder;

use crate::{
    broadcast::{split_callback, Broadcast, Trailing},
    error::{CallbackResultExt, ConsoleError, Result},
    format::{format, interpolate},
    sink::LineSink,
    value::{Invocation, Value},
};

/// Print a single line.
///
/// A string first argument followed by further values is a template. Values
/// its directives leave unused are appended, separated by spaces. Any other
/// argument list is printed as its values joined by spaces.
///
/// # Examples
///
/// ```rust
/// use logeach_core::{console, Value};
///
/// let mut lines: Vec<String> = Vec::new();
/// console::log(&mut lines, &[Value::from("Hello, %s!"), Value::from("World")])?;
/// console::log(&mut lines, &[Value::from("%d:"), Value::from(1), Value::from("extra")])?;
/// assert_eq!(lines, ["Hello, World!", "1: extra"]);
/// # Ok::<(), logeach_core::ConsoleError>(())
/// ```
pub fn log<S: LineSink + ?Sized>(sink: &mut S, args: &[Value]) -> Result<()> {
    let (mut line, rest) = match args.split_first() {
        Some((Value::Str(template), rest)) if !rest.is_empty() => {
            let (line, used) = interpolate(template, rest)?;
            (Some(line), &rest[used..])
        }
        _ => (None, args),
    };
    for value in rest {
        match line.as_mut() {
            Some(line) => {
                line.push(' ');
                line.push_str(&value.to_string());
            }
            None => line = Some(value.to_string()),
        }
    }
    sink.write_line(&line.unwrap_or_default())?;
    Ok(())
}

/// Insert the elements of `args` into `template` and print one line per
/// broadcast row.
///
/// Non-collection arguments are repeated on every row. Without any
/// collection argument exactly one line is printed; an empty collection
/// prints nothing.
///
/// # Errors
///
/// - [`ConsoleError::InvalidTemplate`] if `template` is not a string
/// - [`ConsoleError::LengthMismatch`] if collections differ in length
/// - [`ConsoleError::Format`] / [`ConsoleError::Sink`] from formatting or
///   writing a line
///
/// # Examples
///
/// ```rust
/// use logeach_core::{console, Value};
///
/// let mut lines: Vec<String> = Vec::new();
/// console::log_each(
///     &mut lines,
///     &Value::from("%d < %d "),
///     vec![Value::from(vec![1, 2, 3]), Value::from(vec![4, 5, 6])],
/// )?;
/// assert_eq!(lines, ["1 < 4 ", "2 < 5 ", "3 < 6 "]);
/// # Ok::<(), logeach_core::ConsoleError>(())
/// ```
pub fn log_each<S: LineSink + ?Sized>(sink: &mut S, template: &Value, args: Vec<Value>) -> Result<()> {
    let template = expect_template(template)?;
    let broadcast = Broadcast::new(args)?;

    for row in &broadcast {
        let line = format(template, &row)?;
        sink.write_line(&line)?;
    }
    Ok(())
}

/// Map each broadcast row through a callback and print the row followed by
/// the callback's result.
///
/// `args` ends with the callback, optionally followed by an execution
/// context. The callback receives the current elements, the zero-based
/// row index and every resolved argument sequence (see [`Invocation`]).
///
/// # Errors
///
/// - [`ConsoleError::InvalidTemplate`] if `template` is not a string
/// - [`ConsoleError::InvalidCallback`] if neither the last nor the
///   second-to-last argument is a function
/// - [`ConsoleError::LengthMismatch`] if collections differ in length
/// - [`ConsoleError::Callback`] if the callback fails; remaining rows are
///   skipped
///
/// # Examples
///
/// ```rust
/// use logeach_core::{console, Callback, Value};
///
/// let add = Callback::map(|v| v[0].plus(&v[1]));
/// let mut lines: Vec<String> = Vec::new();
/// console::log_each_map(
///     &mut lines,
///     &Value::from("%d + %d = %d"),
///     vec![Value::from(vec![1, 2, 3]), Value::from(vec![4, 5, 6]), add.into()],
/// )?;
/// assert_eq!(lines, ["1 + 4 = 5", "2 + 5 = 7", "3 + 6 = 9"]);
/// # Ok::<(), logeach_core::ConsoleError>(())
/// ```
pub fn log_each_map<S: LineSink + ?Sized>(
    sink: &mut S,
    template: &Value,
    args: Vec<Value>,
) -> Result<()> {
    let template = expect_template(template)?;
    let Trailing {
        callback,
        this,
        args,
    } = split_callback(args)?;
    let broadcast = Broadcast::new(args)?;
    debug!("mapping with context bound: {}", this.is_some());

    for (index, mut row) in broadcast.iter().enumerate() {
        let result = callback
            .call(&Invocation {
                this: this.as_ref(),
                values: &row,
                index,
                arrays: broadcast.arrays(),
            })
            .at_index(index)?;
        row.push(result);
        let line = format(template, &row)?;
        sink.write_line(&line)?;
    }
    Ok(())
}

fn expect_template(template: &Value) -> Result<&str> {
    template
        .as_str()
        .ok_or_else(|| ConsoleError::invalid_template(template))
}

/// Console bound to one sink.
///
/// # Examples
///
/// ```rust
/// use logeach_core::{Console, Value};
///
/// let mut console = Console::new(Vec::<String>::new());
/// console.log_each(&"x: %s".into(), vec![Value::from(vec!["a", "b"])])?;
/// assert_eq!(console.into_sink(), ["x: a", "x: b"]);
/// # Ok::<(), logeach_core::ConsoleError>(())
/// ```
#[derive(Debug)]
pub struct Console<S> {
    sink: S,
}

impl<S: LineSink> Console<S> {
    /// Create a console writing to `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// See [`log`].
    pub fn log(&mut self, args: &[Value]) -> Result<()> {
        log(&mut self.sink, args)
    }

    /// See [`log_each`].
    pub fn log_each(&mut self, template: &Value, args: Vec<Value>) -> Result<()> {
        log_each(&mut self.sink, template, args)
    }

    /// See [`log_each_map`].
    pub fn log_each_map(&mut self, template: &Value, args: Vec<Value>) -> Result<()> {
        log_each_map(&mut self.sink, template, args)
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Recover the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: LineSink> LineSink for Console<S> {
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.sink.write_line(line)
    }
}
