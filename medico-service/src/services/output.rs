//! Output channel that registration payloads are written to.

use crate::config::OutputKind;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Destination for the textual rendering of accepted registrations.
pub trait RegistrationSink: Send + Sync {
    /// Write one line. The sink appends the line terminator.
    fn emit(&self, line: &str) -> io::Result<()>;

    fn name(&self) -> &'static str;
}

/// Writes each registration to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl RegistrationSink for StdoutSink {
    fn emit(&self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}

/// Keeps registrations in memory, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn count(&self) -> usize {
        self.lines().len()
    }
}

impl RegistrationSink for MemorySink {
    fn emit(&self, line: &str) -> io::Result<()> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        lines.push(line.to_owned());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

pub fn sink_for(kind: OutputKind) -> Arc<dyn RegistrationSink> {
    match kind {
        OutputKind::Stdout => Arc::new(StdoutSink),
        OutputKind::Memory => Arc::new(MemorySink::new()),
    }
}
