use clap::{Parser, Subcommand};

use crate::cli::{LogArgs, MapArgs, PrintArgs};

/// Print formatted lines once per element of broadcast collections
///
/// Every trailing argument is parsed as JSON. Arrays are iterated in
/// lock-step, one output line per element; any other value is repeated on
/// every line. Text that is not valid JSON is used as a plain string.
#[derive(Parser)]
#[command(version, about, name = "logeach")]
pub struct Args {
    /// Write lines to standard error instead of standard output
    #[arg(long, global = true)]
    pub stderr: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the logeach CLI
///
/// - `print`: one formatted line per broadcast row
/// - `map`: pass each row through a built-in callback, then print the row
///   followed by the result
/// - `log`: a single formatted line
#[derive(Subcommand)]
pub enum Commands {
    /// Print one formatted line per broadcast row
    #[command(alias = "p")]
    Print(PrintArgs),
    /// Map each row through a built-in callback and print it
    #[command(alias = "m")]
    Map(MapArgs),
    /// Print a single formatted line
    #[command(alias = "l")]
    Log(LogArgs),
}
