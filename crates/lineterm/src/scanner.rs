use crate::error::{Result, TermError};

/// Pull interface for line-oriented input, shared by the interactive
/// session, its platform stub and the buffered fallback.
///
/// Usage follows the buffered-scanner convention: call [`Scanner::scan`]
/// until it returns `false`, read each line with [`Scanner::text`], then
/// check [`Scanner::err`] to tell a clean end of input from a failure.
pub trait Scanner {
    /// Set the prompt shown before the next read
    fn write_prompt(&mut self, prompt: &str) -> Result<()>;

    /// Read the next line. Returns `false` once input ends or fails.
    fn scan(&mut self) -> bool;

    /// The error that stopped scanning, or `None` for a clean end of input.
    fn err(&self) -> Option<&TermError>;

    /// The line read by the last successful [`Scanner::scan`]
    fn text(&self) -> &str;

    /// Release the input source
    fn close(self) -> Result<()>
    where
        Self: Sized;

    /// Iterate over the remaining lines. Check [`Scanner::err`] afterwards.
    fn lines(&mut self) -> Lines<'_, Self>
    where
        Self: Sized,
    {
        Lines { scanner: self }
    }
}

/// Iterator returned by [`Scanner::lines`]
pub struct Lines<'a, S> {
    scanner: &'a mut S,
}

impl<S: Scanner> Iterator for Lines<'_, S> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.scanner.scan() {
            Some(self.scanner.text().to_string())
        } else {
            None
        }
    }
}

/// Map a stored read error to what [`Scanner::err`] reports.
pub(crate) fn normalize_err(err: Option<&TermError>) -> Option<&TermError> {
    err.filter(|e| !e.is_end_of_input())
}
