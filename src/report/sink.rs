use std::io::{BufWriter, Write};

use crate::error::QcError;

pub trait TextSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), QcError>;
}

/// Writes each line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl TextSink for ConsoleSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), QcError> {
        let stdout = std::io::stdout();
        let mut w = BufWriter::new(stdout.lock());
        for line in lines {
            writeln!(w, "{}", line)?;
        }
        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl TextSink for MemorySink {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), QcError> {
        self.lines.extend_from_slice(lines);
        Ok(())
    }
}
