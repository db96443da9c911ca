/// Stand-in session for builds without an interactive line editor
use std::io::{self, Write};

use crate::config::TermConfig;
use crate::error::{Result, TermError};
use crate::scanner::Scanner;

/// Session type for platforms that rely on the shell's own line editing
/// (the Windows console keeps its own command history).
///
/// It can never be opened: [`UnsupportedTerm::open`] always returns
/// [`TermError::NotSupported`]. Every other operation is a no-op that behaves
/// like an input stream which has already ended.
#[derive(Debug, Default)]
pub struct UnsupportedTerm {
    _private: (),
}

impl UnsupportedTerm {
    pub fn open(_config: TermConfig) -> Result<Self> {
        Err(TermError::NotSupported)
    }

    pub fn write_prompt(&mut self, _prompt: &str) -> Result<()> {
        Ok(())
    }

    pub fn scan(&mut self) -> bool {
        false
    }

    pub fn err(&self) -> Option<&TermError> {
        None
    }

    pub fn text(&self) -> &str {
        ""
    }

    pub fn close(self) -> Result<()> {
        Ok(())
    }
}

impl Write for UnsupportedTerm {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Scanner for UnsupportedTerm {
    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        UnsupportedTerm::write_prompt(self, prompt)
    }

    fn scan(&mut self) -> bool {
        UnsupportedTerm::scan(self)
    }

    fn err(&self) -> Option<&TermError> {
        UnsupportedTerm::err(self)
    }

    fn text(&self) -> &str {
        UnsupportedTerm::text(self)
    }

    fn close(self) -> Result<()> {
        UnsupportedTerm::close(self)
    }
}
