//! Lazy line source over a check log.

use std::borrow::Cow;
use std::io::{self, BufRead};

/// A single line of the check log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Line number in the file (1-based).
    pub number: usize,
    /// Raw bytes as read, including the line terminator if present.
    pub raw: Vec<u8>,
}

impl LogLine {
    /// Line content without its `\n` or `\r\n` terminator.
    pub fn text(&self) -> Cow<'_, str> {
        let mut end = self.raw.len();
        if end > 0 && self.raw[end - 1] == b'\n' {
            end -= 1;
            if end > 0 && self.raw[end - 1] == b'\r' {
                end -= 1;
            }
        }
        String::from_utf8_lossy(&self.raw[..end])
    }
}

/// Single-pass iterator over the lines of a reader.
///
/// Each item is produced on demand; once an IO error is yielded the
/// iterator is fused and returns `None`.
pub struct LogLines<R> {
    reader: R,
    number: usize,
    done: bool,
}

impl<R: BufRead> LogLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            number: 0,
            done: false,
        }
    }

    /// Number of lines produced so far.
    pub fn lines_read(&self) -> usize {
        self.number
    }
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = io::Result<LogLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut raw = Vec::new();
        match self.reader.read_until(b'\n', &mut raw) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.number += 1;
                Some(Ok(LogLine {
                    number: self.number,
                    raw,
                }))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
