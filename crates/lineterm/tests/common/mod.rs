#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use lineterm::{LineEngine, TermError};

/// Calls observed by a [`ScriptedEngine`]
#[derive(Debug, Default)]
pub struct EngineLog {
    pub prompts: Vec<String>,
    pub history: Vec<String>,
    pub output: Vec<u8>,
    pub reads: usize,
    pub closes: usize,
}

/// Engine that replays a fixed list of read results
pub struct ScriptedEngine {
    script: VecDeque<Result<String, TermError>>,
    log: Arc<Mutex<EngineLog>>,
}

impl ScriptedEngine {
    pub fn new(script: Vec<Result<String, TermError>>) -> (Self, Arc<Mutex<EngineLog>>) {
        let log = Arc::new(Mutex::new(EngineLog::default()));
        let engine = Self {
            script: script.into(),
            log: Arc::clone(&log),
        };
        (engine, log)
    }

    /// Script made only of successful reads, ending in end of input
    pub fn with_lines(lines: &[&str]) -> (Self, Arc<Mutex<EngineLog>>) {
        let script = lines.iter().map(|l| Ok(l.to_string())).collect();
        Self::new(script)
    }
}

impl LineEngine for ScriptedEngine {
    fn set_prompt(&mut self, prompt: &str) {
        self.log.lock().unwrap().prompts.push(prompt.to_string());
    }

    fn read_line(&mut self) -> Result<String, TermError> {
        self.log.lock().unwrap().reads += 1;
        self.script.pop_front().unwrap_or(Err(TermError::EndOfInput))
    }

    fn append_history(&mut self, line: &str) -> Result<(), TermError> {
        self.log.lock().unwrap().history.push(line.to_string());
        Ok(())
    }

    fn output(&mut self) -> Box<dyn Write + Send> {
        Box::new(LogWriter {
            log: Arc::clone(&self.log),
        })
    }

    fn close(&mut self) -> Result<(), TermError> {
        self.log.lock().unwrap().closes += 1;
        Ok(())
    }
}

struct LogWriter {
    log: Arc<Mutex<EngineLog>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.log.lock().unwrap().output.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with `TERM` set to `value`, restoring the previous value after.
/// Callers must be `#[serial]`.
pub fn with_term<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
    let saved = std::env::var("TERM").ok();
    match value {
        Some(v) => std::env::set_var("TERM", v),
        None => std::env::remove_var("TERM"),
    }
    let result = f();
    match saved {
        Some(v) => std::env::set_var("TERM", v),
        None => std::env::remove_var("TERM"),
    }
    result
}
