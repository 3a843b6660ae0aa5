use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::core::types::DataType;

/// Raw token reads from a buffered source, split the way `data_type` asks.
///
/// Words and numbers are maximal runs of non-whitespace. Lines are taken
/// whole without their terminator; whitespace-only lines are held back
/// until a line with content follows, so a whitespace-only tail yields
/// nothing.
pub struct RawTokens<R> {
    reader: R,
    data_type: DataType,
    ready: VecDeque<String>,
    held_blank: Vec<String>,
    exhausted: bool,
}

impl<R: BufRead> RawTokens<R> {
    pub fn new(reader: R, data_type: DataType) -> Self {
        Self {
            reader,
            data_type,
            ready: VecDeque::new(),
            held_blank: Vec::new(),
            exhausted: false,
        }
    }

    /// Returns `false` once the source is exhausted.
    fn fill(&mut self) -> io::Result<bool> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(false);
        }
        // invalid UTF-8 becomes U+FFFD rather than failing the read
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        strip_terminator(&mut line);

        match self.data_type {
            DataType::Line => {
                if line.trim().is_empty() {
                    self.held_blank.push(line);
                } else {
                    self.ready.extend(self.held_blank.drain(..));
                    self.ready.push_back(line);
                }
            }
            DataType::Long | DataType::Word => {
                self.ready
                    .extend(line.split_whitespace().map(str::to_string));
            }
        }
        Ok(true)
    }
}

impl<R: BufRead> Iterator for RawTokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(Ok(token));
            }
            if self.exhausted {
                return None;
            }
            match self.fill() {
                Ok(true) => {}
                Ok(false) => self.exhausted = true,
                Err(err) => {
                    self.exhausted = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
