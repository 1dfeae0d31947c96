//! Line sinks receiving fully formatted output lines.
//!
//! Every printed iteration produces exactly one call to
//! [`LineSink::write_line`]. Sinks add their own line terminator; the lines
//! handed to them never contain one.

use std::io::{self, Write};

/// Capability to emit one formatted line.
pub trait LineSink {
    /// Write a single line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// In-memory capture, mostly useful in tests.
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Standard stream selected for console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Standard output
    #[default]
    Stdout,
    /// Standard error
    Stderr,
}

/// Sink writing to standard output or standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSink {
    target: OutputTarget,
}

impl StandardSink {
    /// Create a sink for the given stream.
    pub fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    /// Stream this sink writes to.
    pub fn target(&self) -> OutputTarget {
        self.target
    }
}

impl LineSink for StandardSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self.target {
            OutputTarget::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{line}")?;
                out.flush()
            }
            OutputTarget::Stderr => writeln!(io::stderr().lock(), "{line}"),
        }
    }
}

/// Sink adapting any [`io::Write`].
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_lines() {
        let mut lines: Vec<String> = Vec::new();
        lines.write_line("one").unwrap();
        lines.write_line("two").unwrap();
        assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_writer_sink_terminates_lines() {
        let mut sink = WriterSink::new(Vec::<u8>::new());
        sink.write_line("1 < 4 ").unwrap();
        sink.write_line("2 < 5 ").unwrap();
        let bytes = sink.into_inner();
        assert_eq!(String::from_utf8(bytes).unwrap(), "1 < 4 \n2 < 5 \n");
    }

    #[test]
    fn test_default_target_is_stdout() {
        assert_eq!(StandardSink::default().target(), OutputTarget::Stdout);
        assert_eq!(
            StandardSink::new(OutputTarget::Stderr).target(),
            OutputTarget::Stderr
        );
    }

    #[test]
    fn test_borrowed_sink_forwards() {
        fn emit(mut sink: impl LineSink) {
            sink.write_line("x").unwrap();
        }

        let mut lines: Vec<String> = Vec::new();
        emit(&mut lines);
        emit(&mut lines);
        assert_eq!(lines.len(), 2);
    }
}
