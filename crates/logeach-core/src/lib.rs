//! Core library for the logeach console helpers.
//!
//! This crate prints formatted lines once per element of one or more
//! collections, broadcasting non-collection arguments across every line and
//! optionally mapping each row through a callback first.
//!
//! # Architecture
//!
//! ```text
//! template + args ──▶ Argument Classifier ──▶ Broadcast Iterator ──▶ format ──▶ LineSink
//!                      (broadcast)              (broadcast)          (format)    (sink)
//! ```
//!
//! - **Values** ([`value`]): dynamic argument type, callbacks and accessor
//!   collections
//! - **Broadcasting** ([`broadcast`]): classification into collections and
//!   scalars, length validation, lock-step iteration
//! - **Formatting** ([`format`]): `%`-directive interpolation
//! - **Sinks** ([`sink`]): where finished lines go
//! - **Entry points** ([`console`]): `log`, `log_each`, `log_each_map`
//!
//! # Quick Start
//!
//! ```rust
//! use logeach_core::{log_each, log_each_map, Callback, Value};
//!
//! let mut lines: Vec<String> = Vec::new();
//!
//! // Collections are iterated in lock-step
//! log_each!(lines, "%d < %d ", vec![1, 2, 3], vec![4, 5, 6])?;
//!
//! // Scalars are repeated on every line
//! let add = Callback::map(|v| v[0].plus(&v[1]));
//! log_each_map!(lines, "%d + %d = %d", vec![1, 2, 3], 5, add)?;
//!
//! assert_eq!(lines, [
//!     "1 < 4 ", "2 < 5 ", "3 < 6 ",
//!     "1 + 5 = 6", "2 + 5 = 7", "3 + 5 = 8",
//! ]);
//! # Ok::<(), logeach_core::ConsoleError>(())
//! ```

mod macros;

pub mod broadcast;
pub mod console;
pub mod error;
pub mod format;
pub mod sink;
pub mod value;

// Re-export commonly used types
pub use broadcast::{split_callback, Argument, Broadcast, Trailing};
pub use console::{log, log_each, log_each_map, Console, ConsoleBuilder};
pub use error::{CallbackError, ConsoleError, Result};
pub use format::FormatError;
pub use sink::{LineSink, OutputTarget, StandardSink, WriterSink};
pub use value::{AccessorArray, Callback, FnArray, Invocation, Value};
