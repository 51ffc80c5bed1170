//! The `LineSink` trait and its two implementations.

use std::io::{BufWriter, Write};

use crate::{MatPlanError, MatPlanResult};

/// Destination for the emitted document, one line at a time.
///
/// Lines are passed without a trailing newline; the sink decides the line
/// terminator.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> MatPlanResult<()>;

    /// Flush whatever is buffered.
    ///
    /// Idempotent — safe to call more than once.  Writing after `finish`
    /// returns [`MatPlanError::Finished`].
    fn finish(&mut self) -> MatPlanResult<()>;
}

// ── VecSink ───────────────────────────────────────────────────────────────────

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct VecSink {
    lines:    Vec<String>,
    finished: bool,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// The document as a single string, newline-terminated lines.
    pub fn to_document(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl LineSink for VecSink {
    fn write_line(&mut self, line: &str) -> MatPlanResult<()> {
        if self.finished {
            return Err(MatPlanError::Finished);
        }
        self.lines.push(line.to_owned());
        Ok(())
    }

    fn finish(&mut self) -> MatPlanResult<()> {
        self.finished = true;
        Ok(())
    }
}

// ── IoSink ────────────────────────────────────────────────────────────────────

/// Writes `\n`-terminated lines to any `Write` through a `BufWriter`.
pub struct IoSink<W: Write> {
    out:      BufWriter<W>,
    finished: bool,
}

impl<W: Write> IoSink<W> {
    pub fn new(out: W) -> Self {
        Self { out: BufWriter::new(out), finished: false }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> MatPlanResult<W> {
        self.out.into_inner().map_err(|e| MatPlanError::Io(e.into_error()))
    }
}

impl<W: Write> LineSink for IoSink<W> {
    fn write_line(&mut self, line: &str) -> MatPlanResult<()> {
        if self.finished {
            return Err(MatPlanError::Finished);
        }
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> MatPlanResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
