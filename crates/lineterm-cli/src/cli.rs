use clap::Parser;
use lineterm::{EditMode, TermConfig};
use std::path::PathBuf;

/// CLI arguments for lineterm
#[derive(Parser, Debug)]
#[command(name = "lineterm")]
#[command(about = "Echo lines read through an interactive line editor with history")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// File used to load and persist command history
    #[arg(long, value_name = "PATH", env = "LINETERM_HISTORY")]
    pub history_file: Option<PathBuf>,

    /// Prompt shown before each line
    #[arg(long, value_name = "TEXT", default_value = "> ")]
    pub prompt: String,

    /// Use vi key bindings instead of emacs
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub vi: bool,

    /// Maximum number of history entries kept in memory
    #[arg(long, value_name = "N")]
    pub history_limit: Option<usize>,
}

impl Cli {
    pub fn term_config(&self) -> TermConfig {
        let mut config = TermConfig::new()
            .with_edit_mode(if self.vi { EditMode::Vi } else { EditMode::Emacs });
        if let Some(path) = &self.history_file {
            config = config.with_history_file(path);
        }
        if let Some(limit) = self.history_limit {
            config = config.with_history_limit(limit);
        }
        config
    }
}
