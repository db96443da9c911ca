/// Scanner over a plain buffered reader
use std::io::{self, BufRead, Write};

use crate::error::{Result, TermError};
use crate::scanner::{normalize_err, Scanner};

/// Reads lines from any [`BufRead`] with the same pull protocol as
/// [`crate::Term`], for use when the terminal cannot host a line editor.
///
/// No history is kept. A non-empty prompt is written to `writer` before
/// every read.
pub struct BufScanner<R, W> {
    reader: R,
    writer: W,
    line: String,
    err: Option<TermError>,
    prompt: String,
}

impl<R: BufRead, W: Write> BufScanner<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
            err: None,
            prompt: String::new(),
        }
    }

    fn read_next(&mut self) -> Result<String> {
        if !self.prompt.is_empty() {
            self.writer.write_all(self.prompt.as_bytes())?;
            self.writer.flush()?;
        }

        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Err(TermError::EndOfInput);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }

    /// Consume the scanner, returning the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Scanner for BufScanner<R, W> {
    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        if prompt != self.prompt {
            self.prompt = prompt.to_string();
        }
        Ok(())
    }

    fn scan(&mut self) -> bool {
        match self.read_next() {
            Ok(line) => {
                self.err = None;
                self.line = line;
                true
            }
            Err(e) => {
                self.err = Some(e);
                false
            }
        }
    }

    fn err(&self) -> Option<&TermError> {
        normalize_err(self.err.as_ref())
    }

    fn text(&self) -> &str {
        &self.line
    }

    fn close(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<R, W: Write> Write for BufScanner<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
