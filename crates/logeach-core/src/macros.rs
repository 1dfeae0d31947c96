//! Variadic call-site macros.
//!
//! Each macro converts its trailing arguments with [`Value::from`] and
//! forwards to the matching function in [`console`]. The sink expression is
//! borrowed mutably: pass a mutable binding such as `lines`, or `*sink` when
//! holding a `&mut` reference.
//!
//! [`Value::from`]: crate::Value
//! [`console`]: crate::console

/// Print one line, see [`console::log`](crate::console::log).
///
/// ```rust
/// use logeach_core::log_line;
///
/// let mut lines: Vec<String> = Vec::new();
/// log_line!(lines, "Hello, %s!", "World")?;
/// assert_eq!(lines, ["Hello, World!"]);
/// # Ok::<(), logeach_core::ConsoleError>(())
/// ```
#[macro_export]
macro_rules! log_line {
    ($sink:expr $(, $arg:expr)* $(,)?) => {
        $crate::console::log(&mut $sink, &[$($crate::Value::from($arg)),*])
    };
}

/// Print a line per broadcast row, see
/// [`console::log_each`](crate::console::log_each).
///
/// ```rust
/// use logeach_core::log_each;
///
/// let mut lines: Vec<String> = Vec::new();
/// log_each!(lines, "%0.2f > %0.2f", vec![0.5, 1.0, 1.5], vec![0.25, 0.5, 0.75])?;
/// assert_eq!(lines, ["0.50 > 0.25", "1.00 > 0.50", "1.50 > 0.75"]);
/// # Ok::<(), logeach_core::ConsoleError>(())
/// ```
#[macro_export]
macro_rules! log_each {
    ($sink:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::console::log_each(
            &mut $sink,
            &$crate::Value::from($template),
            vec![$($crate::Value::from($arg)),*],
        )
    };
}

/// Map each broadcast row through a callback and print it, see
/// [`console::log_each_map`](crate::console::log_each_map).
///
/// ```rust
/// use logeach_core::{log_each_map, Callback};
///
/// let append = Callback::map(|v| v[0].plus(&v[1]));
/// let mut lines: Vec<String> = Vec::new();
/// log_each_map!(lines, "%s+%s = %s", vec!["foo", "bar"], vec!["baz", "beep"], append)?;
/// assert_eq!(lines, ["foo+baz = foobaz", "bar+beep = barbeep"]);
/// # Ok::<(), logeach_core::ConsoleError>(())
/// ```
#[macro_export]
macro_rules! log_each_map {
    ($sink:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::console::log_each_map(
            &mut $sink,
            &$crate::Value::from($template),
            vec![$($crate::Value::from($arg)),*],
        )
    };
}
