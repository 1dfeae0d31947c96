//! Subcommand arguments and their execution.
//!
//! Each subcommand keeps its clap-facing argument structure here and is
//! converted into plain [`Value`]s before reaching the core console:
//!
//! ```text
//! User Input → CLI Args (clap) → Values → Console
//! ```

use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use logeach_core::{Console, LineSink, Value};

use crate::{args::Commands, ops::MapOp};

/// Arguments for printing one line per broadcast row
#[derive(Args)]
pub struct PrintArgs {
    /// printf-style template, for example "%d < %d"
    pub template: String,

    /// Values to insert; JSON arrays are iterated, anything else repeats
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for mapping each row through a built-in callback
#[derive(Args)]
pub struct MapArgs {
    /// printf-style template; the callback result fills the last directive
    pub template: String,

    /// Callback applied to every row
    #[arg(short = 'w', long = "with", value_enum)]
    pub op: MapOp,

    /// JSON object bound as the callback's context
    #[arg(short, long)]
    pub context: Option<String>,

    /// Values to insert; JSON arrays are iterated, anything else repeats
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for printing a single line
#[derive(Args)]
pub struct LogArgs {
    /// printf-style template, or the first value when no others follow
    pub template: String,

    /// Values to insert
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Parse a command-line value as JSON, keeping it as text otherwise.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw))
}

fn parse_values(raw: &[String]) -> Vec<Value> {
    raw.iter().map(|arg| parse_value(arg)).collect()
}

impl MapArgs {
    /// Positional values followed by the callback and its optional context.
    fn into_values(self) -> Result<Vec<Value>> {
        let mut values = parse_values(&self.args);
        values.push(self.op.callback().into());
        if let Some(context) = self.context {
            let context: Value = serde_json::from_str(&context)
                .with_context(|| format!("Invalid JSON context: {context}"))?;
            values.push(context);
        }
        Ok(values)
    }
}

/// Command handler bound to one console
pub struct Cli<S> {
    console: Console<S>,
}

impl<S: LineSink> Cli<S> {
    pub fn new(console: Console<S>) -> Self {
        Self { console }
    }

    pub fn handle_command(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Print(args) => self.print(args),
            Commands::Map(args) => self.map(args),
            Commands::Log(args) => self.log(args),
        }
    }

    fn print(&mut self, args: PrintArgs) -> Result<()> {
        let values = parse_values(&args.args);
        debug!("print with {} value(s)", values.len());
        self.console
            .log_each(&Value::from(args.template), values)
            .context("Failed to print template")
    }

    fn map(&mut self, args: MapArgs) -> Result<()> {
        debug!("map with {:?}", args.op);
        let template = Value::from(args.template.as_str());
        let values = args.into_values()?;
        self.console
            .log_each_map(&template, values)
            .context("Failed to map template")
    }

    fn log(&mut self, args: LogArgs) -> Result<()> {
        let mut values = vec![Value::from(args.template)];
        values.extend(parse_values(&args.args));
        self.console
            .log(&values)
            .context("Failed to log values")
    }

    #[cfg(test)]
    fn into_sink(self) -> S {
        self.console.into_sink()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: Commands) -> Vec<String> {
        let mut cli = Cli::new(Console::new(Vec::<String>::new()));
        cli.handle_command(command).expect("command succeeds");
        cli.into_sink()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_value_prefers_json() {
        assert_eq!(parse_value("[1,2]"), Value::from(vec![1, 2]));
        assert_eq!(parse_value("-3"), Value::Int(-3));
        assert_eq!(parse_value("\"quoted\""), Value::from("quoted"));
        assert_eq!(parse_value("plain text"), Value::from("plain text"));
    }

    #[test]
    fn test_print_broadcasts_arrays() {
        let lines = run(Commands::Print(PrintArgs {
            template: "%d < %d ".into(),
            args: strings(&["[1,2,3]", "[4,5,6]"]),
        }));
        assert_eq!(lines, ["1 < 4 ", "2 < 5 ", "3 < 6 "]);
    }

    #[test]
    fn test_map_with_context() {
        let lines = run(Commands::Map(MapArgs {
            template: "%d + %d = %d".into(),
            op: MapOp::Scale,
            context: Some(r#"{"factor": 10}"#.into()),
            args: strings(&["[1,2]", "1"]),
        }));
        assert_eq!(lines, ["1 + 1 = 20", "2 + 1 = 30"]);
    }

    #[test]
    fn test_map_rejects_bad_context() {
        let mut cli = Cli::new(Console::new(Vec::<String>::new()));
        let result = cli.handle_command(Commands::Map(MapArgs {
            template: "%s".into(),
            op: MapOp::Sum,
            context: Some("{not json".into()),
            args: Vec::new(),
        }));
        assert!(result.is_err());
        assert!(cli.into_sink().is_empty());
    }

    #[test]
    fn test_log_single_line() {
        let lines = run(Commands::Log(LogArgs {
            template: "%s has %d".into(),
            args: strings(&["list", "3"]),
        }));
        assert_eq!(lines, ["list has 3"]);
    }
}
