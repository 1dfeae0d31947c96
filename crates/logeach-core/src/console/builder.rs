//! Builder for creating and configuring Console instances.

use super::Console;
use crate::sink::{OutputTarget, StandardSink};

/// Builder for creating and configuring [`Console`] instances.
#[derive(Debug, Clone, Default)]
pub struct ConsoleBuilder {
    target: OutputTarget,
}

impl ConsoleBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output stream.
    ///
    /// If not specified, lines go to standard output.
    pub fn with_target(mut self, target: OutputTarget) -> Self {
        self.target = target;
        self
    }

    /// Routes output to standard error when `enabled` is set.
    pub fn with_stderr(self, enabled: bool) -> Self {
        if enabled {
            self.with_target(OutputTarget::Stderr)
        } else {
            self
        }
    }

    /// Builds the configured console.
    pub fn build(self) -> Console<StandardSink> {
        Console::new(StandardSink::new(self.target))
    }
}
