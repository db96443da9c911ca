/// Line editor backed by rustyline
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use rustyline::{Config, DefaultEditor, ExternalPrinter};

use crate::config::{EditMode, TermConfig};
use crate::engine::LineEngine;
use crate::error::{Result, TermError};

pub struct RustylineEngine {
    editor: Option<DefaultEditor>,
    prompt: String,
    history_file: Option<PathBuf>,
}

impl RustylineEngine {
    /// Create the editor and load the configured history file.
    ///
    /// A missing history file is created empty, so an unusable path is
    /// reported here rather than on the first accepted line.
    pub fn new(config: &TermConfig) -> Result<Self> {
        let edit_mode = match config.edit_mode {
            EditMode::Emacs => rustyline::EditMode::Emacs,
            EditMode::Vi => rustyline::EditMode::Vi,
        };
        let mut builder = Config::builder()
            .auto_add_history(false)
            .history_ignore_dups(config.history_ignore_dups)?
            .edit_mode(edit_mode);
        if let Some(limit) = config.history_limit {
            builder = builder.max_history_size(limit)?;
        }
        let rl_config = builder.build();

        let mut editor = DefaultEditor::with_config(rl_config)?;

        if let Some(path) = &config.history_file {
            if path.exists() {
                editor.load_history(path)?;
                log::debug!("Loaded history from {}", path.display());
            } else {
                OpenOptions::new().create(true).append(true).open(path)?;
                log::debug!("Created history file {}", path.display());
            }
        }

        Ok(Self {
            editor: Some(editor),
            prompt: String::new(),
            history_file: config.history_file.clone(),
        })
    }

    fn editor(&mut self) -> Result<&mut DefaultEditor> {
        self.editor.as_mut().ok_or(TermError::Closed)
    }
}

impl LineEngine for RustylineEngine {
    fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }

    fn read_line(&mut self) -> Result<String> {
        let prompt = self.prompt.clone();
        Ok(self.editor()?.readline(&prompt)?)
    }

    fn append_history(&mut self, line: &str) -> Result<()> {
        let history_file = self.history_file.clone();
        let editor = self.editor()?;
        editor.add_history_entry(line)?;
        if let Some(path) = history_file {
            editor.append_history(&path)?;
        }
        Ok(())
    }

    fn output(&mut self) -> Box<dyn Write + Send> {
        let printer = match self.editor.as_mut() {
            Some(editor) => editor.create_external_printer(),
            None => return Box::new(io::stdout()),
        };
        match printer {
            Ok(printer) => Box::new(PrinterWriter::new(Box::new(printer))),
            Err(e) => {
                // Not a tty on both ends; nothing to coordinate with
                log::debug!("External printer unavailable ({}), writing to stdout", e);
                Box::new(io::stdout())
            }
        }
    }

    fn close(&mut self) -> Result<()> {
        match self.editor.take() {
            Some(editor) => {
                drop(editor);
                Ok(())
            }
            None => Err(TermError::Closed),
        }
    }
}

/// Adapts rustyline's external printer to `io::Write`.
///
/// Output is forwarded one batch of complete lines at a time so the prompt is
/// redrawn once per batch; a trailing partial line waits for `flush`.
struct PrinterWriter {
    printer: Box<dyn ExternalPrinter + Send>,
    pending: Vec<u8>,
}

impl PrinterWriter {
    fn new(printer: Box<dyn ExternalPrinter + Send>) -> Self {
        Self {
            printer,
            pending: Vec::new(),
        }
    }

    /// Print the first `len` pending bytes, dropping them only once printed
    fn emit(&mut self, len: usize) -> io::Result<()> {
        let msg = String::from_utf8_lossy(&self.pending[..len]).into_owned();
        self.printer
            .print(msg)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        self.pending.drain(..len);
        Ok(())
    }
}

impl Write for PrinterWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let start = self.pending.len();
        self.pending.extend_from_slice(buf);
        if let Some(pos) = self.pending.iter().rposition(|&b| b == b'\n') {
            if let Err(e) = self.emit(pos + 1) {
                // Nothing from `buf` was written
                self.pending.truncate(start);
                return Err(e);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        self.emit(self.pending.len())
    }
}

impl Drop for PrinterWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rustyline::config::Configurer;
    use rustyline::history::History;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct RecordingPrinter {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl ExternalPrinter for RecordingPrinter {
        fn print(&mut self, msg: String) -> rustyline::Result<()> {
            self.messages.lock().unwrap().push(msg);
            Ok(())
        }
    }

    #[test]
    fn test_printer_writer_batches_complete_lines() {
        let printer = RecordingPrinter::default();
        let mut writer = PrinterWriter::new(Box::new(printer.clone()));

        write!(writer, "partial").unwrap();
        assert!(printer.messages.lock().unwrap().is_empty());

        write!(writer, " line\nnext\nrest").unwrap();
        assert_eq!(
            *printer.messages.lock().unwrap(),
            vec!["partial line\nnext\n".to_string()]
        );

        writer.flush().unwrap();
        assert_eq!(
            *printer.messages.lock().unwrap(),
            vec!["partial line\nnext\n".to_string(), "rest".to_string()]
        );
    }

    struct BrokenPrinter;

    impl ExternalPrinter for BrokenPrinter {
        fn print(&mut self, _msg: String) -> rustyline::Result<()> {
            Err(rustyline::error::ReadlineError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "printer gone",
            )))
        }
    }

    #[test]
    fn test_printer_writer_keeps_output_when_print_fails() {
        let mut writer = PrinterWriter::new(Box::new(BrokenPrinter));

        writer.write_all(b"held").unwrap();
        assert!(writer.write(b" back\n").is_err());
        assert_eq!(writer.pending, b"held".to_vec());

        assert!(writer.flush().is_err());
        assert_eq!(writer.pending, b"held".to_vec());
    }

    #[test]
    fn test_printer_writer_flushes_on_drop() {
        let printer = RecordingPrinter::default();
        {
            let mut writer = PrinterWriter::new(Box::new(printer.clone()));
            write!(writer, "unterminated").unwrap();
        }
        assert_eq!(*printer.messages.lock().unwrap(), vec!["unterminated".to_string()]);
    }

    #[test]
    fn test_history_limit_defaults_to_editor_setting() {
        let mut engine = RustylineEngine::new(&TermConfig::default()).unwrap();
        let editor = engine.editor().unwrap();
        assert_eq!(
            editor.config_mut().max_history_size(),
            Config::default().max_history_size()
        );
        assert!(!editor.config_mut().auto_add_history());

        let mut engine = RustylineEngine::new(&TermConfig::new().with_history_limit(42)).unwrap();
        assert_eq!(engine.editor().unwrap().config_mut().max_history_size(), 42);
    }

    #[test]
    fn test_missing_history_file_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history");
        let config = TermConfig::new().with_history_file(&path);

        let engine = RustylineEngine::new(&config).unwrap();

        assert!(path.exists());
        assert_eq!(engine.history_file, Some(path));
    }

    #[test]
    fn test_unopenable_history_file_fails_construction() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing-dir").join("history");
        let config = TermConfig::new().with_history_file(&path);

        match RustylineEngine::new(&config) {
            Err(TermError::Io(_)) => {}
            Err(other) => panic!("expected an I/O error, got {:?}", other),
            Ok(_) => panic!("expected construction to fail"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_append_history_persists_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history");
        let config = TermConfig::new().with_history_file(&path);

        let mut engine = RustylineEngine::new(&config).unwrap();
        engine.append_history("cargo_build").unwrap();
        engine.append_history("cargo_test").unwrap();
        engine.close().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("cargo_build"));
        assert!(contents.contains("cargo_test"));

        // A fresh editor loads what was written
        let mut reopened = RustylineEngine::new(&config).unwrap();
        assert_eq!(reopened.editor().unwrap().history().len(), 2);
    }

    #[test]
    fn test_close_releases_editor_once() {
        let mut engine = RustylineEngine::new(&TermConfig::default()).unwrap();
        engine.set_prompt("> ");
        assert_eq!(engine.prompt, "> ");

        assert!(engine.close().is_ok());
        assert!(matches!(engine.close(), Err(TermError::Closed)));
        assert!(matches!(engine.read_line(), Err(TermError::Closed)));
        assert!(matches!(engine.append_history("x"), Err(TermError::Closed)));
    }
}
