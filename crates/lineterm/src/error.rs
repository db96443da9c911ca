use thiserror::Error;

/// Errors produced while opening or reading from a line session.
///
/// `EndOfInput` is the clean termination of a read loop. Accessors such as
/// [`crate::Scanner::err`] normalize it away, so callers only ever see the
/// remaining variants as failures.
#[derive(Debug, Error)]
pub enum TermError {
    /// The environment cannot host an interactive line editor.
    #[error("not supported")]
    NotSupported,
    /// No more input will be available (Ctrl-D or a closed input stream).
    #[error("end of input")]
    EndOfInput,
    /// The user pressed the interrupt key while a line was being edited.
    #[error("interrupted")]
    Interrupted,
    /// The line editor was used after it had been released.
    #[error("line editor already closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(rustyline::error::ReadlineError),
}

impl TermError {
    /// Whether this is the clean end-of-input signal.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, TermError::EndOfInput)
    }
}

impl From<rustyline::error::ReadlineError> for TermError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        use rustyline::error::ReadlineError;

        match err {
            ReadlineError::Eof => TermError::EndOfInput,
            ReadlineError::Interrupted => TermError::Interrupted,
            ReadlineError::Io(e) => TermError::Io(e),
            other => TermError::Readline(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, TermError>;
