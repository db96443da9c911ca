/// Line editor abstraction consumed by [`crate::Term`]
use std::io::Write;

use crate::error::Result;

/// Operations a session needs from an interactive line editor.
///
/// Implementations own all terminal handling: raw mode, key bindings,
/// rendering and the history file format.
#[cfg_attr(test, mockall::automock)]
pub trait LineEngine {
    /// Set the prompt shown before the next line is read
    fn set_prompt(&mut self, prompt: &str);

    /// Block until the user submits a line.
    /// End of input is reported as [`crate::TermError::EndOfInput`].
    fn read_line(&mut self) -> Result<String>;

    /// Record a line in the recall history (and history file, if any)
    fn append_history(&mut self, line: &str) -> Result<()>;

    /// Writer whose output is coordinated with the prompt being edited
    fn output(&mut self) -> Box<dyn Write + Send>;

    /// Release the editor and restore the terminal
    fn close(&mut self) -> Result<()>;
}
