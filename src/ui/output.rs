use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::errors::Result;

pub trait OutputSink {
    fn print_line(&mut self, line: &str) -> Result<()>;
}

/// Newline-terminated lines over any writer.
pub struct WriterOutput<W: Write> {
    writer: W,
}

impl<W: Write> WriterOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterOutput<W> {
    fn print_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Standard output, or append to `path` (created when absent).
pub fn make_output_sink(path: Option<&Path>) -> Result<Box<dyn OutputSink>> {
    match path {
        None => Ok(Box::new(WriterOutput::new(io::stdout()))),
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(Box::new(WriterOutput::new(file)))
        }
    }
}
