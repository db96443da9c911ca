/// Interactive line session over a [`LineEngine`]
use std::io::{self, Write};

use crate::config::TermConfig;
use crate::engine::LineEngine;
use crate::error::{Result, TermError};
use crate::gate;
use crate::scanner::{normalize_err, Scanner};

/// One open interactive terminal binding.
///
/// Reads lines through the engine, caches the prompt so repeated
/// [`Term::write_prompt`] calls with the same text do not touch the engine,
/// and records a line in history only when a non-empty prompt has been set
/// and the line itself is non-empty. Reads without a prompt are treated as
/// automated and never pollute the recall history.
///
/// `Term` implements [`Write`]; output written through it is coordinated
/// with the line being edited.
pub struct Term<E: LineEngine> {
    engine: E,
    output: Box<dyn Write + Send>,
    line: String,
    err: Option<TermError>,
    prompt: String,
    closed: bool,
}

#[cfg(not(windows))]
impl Term<crate::rustyline_engine::RustylineEngine> {
    /// Open a session on the rustyline editor.
    ///
    /// Returns [`TermError::NotSupported`] when `TERM=dumb`, without creating
    /// the editor or touching the history file.
    pub fn open(config: TermConfig) -> Result<Self> {
        Self::open_with(config, crate::rustyline_engine::RustylineEngine::new)
    }
}

impl<E: LineEngine> Term<E> {
    /// Open a session on the engine built by `factory`.
    ///
    /// The capability gate runs first; the factory is only invoked when it
    /// passes. Factory errors are returned unchanged.
    pub fn open_with<F>(config: TermConfig, factory: F) -> Result<Self>
    where
        F: FnOnce(&TermConfig) -> Result<E>,
    {
        gate::check_support()?;
        let engine = factory(&config)?;
        log::debug!("Opened line session (history file: {:?})", config.history_file);
        Ok(Self::from_engine(engine))
    }

    /// Wrap an engine that has already been constructed
    pub fn from_engine(mut engine: E) -> Self {
        let output = engine.output();
        Self {
            engine,
            output,
            line: String::new(),
            err: None,
            prompt: String::new(),
            closed: false,
        }
    }

    pub fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        if prompt != self.prompt {
            self.engine.set_prompt(prompt);
            self.prompt = prompt.to_string();
            log::debug!("Prompt set to {:?}", prompt);
        }
        Ok(())
    }

    pub fn scan(&mut self) -> bool {
        match self.engine.read_line() {
            Ok(line) => {
                log::trace!("Read line ({} bytes)", line.len());
                self.err = None;
                if !self.prompt.is_empty() && !line.is_empty() {
                    if let Err(e) = self.engine.append_history(&line) {
                        log::warn!("Failed to record history entry: {}", e);
                    }
                }
                self.line = line;
                true
            }
            Err(e) => {
                log::trace!("Read stopped: {}", e);
                self.err = Some(e);
                false
            }
        }
    }

    /// `None` after a clean end of input; any other stored error as-is.
    pub fn err(&self) -> Option<&TermError> {
        normalize_err(self.err.as_ref())
    }

    pub fn text(&self) -> &str {
        &self.line
    }

    /// The prompt currently shown by the engine
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Flush pending output and release the engine.
    pub fn close(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if let Err(e) = self.output.flush() {
            log::warn!("Failed to flush session output: {}", e);
        }
        self.engine.close()
    }
}

impl<E: LineEngine> Drop for Term<E> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            log::warn!("Failed to close line editor: {}", e);
        }
    }
}

impl<E: LineEngine> Write for Term<E> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

impl<E: LineEngine> Scanner for Term<E> {
    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        Term::write_prompt(self, prompt)
    }

    fn scan(&mut self) -> bool {
        Term::scan(self)
    }

    fn err(&self) -> Option<&TermError> {
        Term::err(self)
    }

    fn text(&self) -> &str {
        Term::text(self)
    }

    fn close(self) -> Result<()> {
        Term::close(self)
    }
}
