use std::path::{Path, PathBuf};

/// Key binding set used while editing a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Emacs,
    Vi,
}

impl std::str::FromStr for EditMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emacs" => Ok(Self::Emacs),
            "vi" | "vim" => Ok(Self::Vi),
            _ => Err(format!(
                "Invalid edit mode: '{}'. Valid options: 'emacs', 'vi'",
                s
            )),
        }
    }
}

impl std::fmt::Display for EditMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Emacs => write!(f, "emacs"),
            Self::Vi => write!(f, "vi"),
        }
    }
}

/// Settings applied to the line editor when a session is opened.
///
/// Automatic history saving is always off in the editor: the session decides
/// which lines are recorded, so it is not configurable here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermConfig {
    /// File history is loaded from at startup and appended to as lines are
    /// accepted. `None` keeps history in memory only.
    pub history_file: Option<PathBuf>,
    /// Maximum number of entries the editor keeps in memory. `None` keeps
    /// the editor's own default.
    pub history_limit: Option<usize>,
    /// Drop a new entry when it equals the previous one.
    pub history_ignore_dups: bool,
    pub edit_mode: EditMode,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            history_limit: None,
            history_ignore_dups: true,
            edit_mode: EditMode::Emacs,
        }
    }
}

impl TermConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist command history to `path`
    pub fn with_history_file(mut self, path: impl AsRef<Path>) -> Self {
        self.history_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn with_history_ignore_dups(mut self, ignore: bool) -> Self {
        self.history_ignore_dups = ignore;
        self
    }

    pub fn with_edit_mode(mut self, mode: EditMode) -> Self {
        self.edit_mode = mode;
        self
    }
}
