// Scanner-style line input for interactive command-line programs
//
// Wraps an interactive line editor (rustyline) so a program can pull one
// line at a time the way it would from a buffered reader, while the user
// gets in-place editing and a command history browsable with the arrow keys.

pub mod config;
pub mod engine;
pub mod error;
pub mod gate;
mod buffered;
mod scanner;
mod session;
mod unsupported;
#[cfg(not(windows))]
mod rustyline_engine;

// Re-export public API
pub use buffered::BufScanner;
pub use config::{EditMode, TermConfig};
pub use engine::LineEngine;
pub use error::{Result, TermError};
pub use scanner::{Lines, Scanner};
pub use session::Term;
pub use unsupported::UnsupportedTerm;
#[cfg(not(windows))]
pub use rustyline_engine::RustylineEngine;

/// Session type used on this platform
#[cfg(not(windows))]
pub type PlatformTerm = Term<RustylineEngine>;

/// Session type used on this platform
#[cfg(windows)]
pub type PlatformTerm = UnsupportedTerm;

/// Open the platform's interactive session.
///
/// Fails with [`TermError::NotSupported`] when `TERM=dumb`, and always on
/// platforms without a line editor.
pub fn open(config: TermConfig) -> Result<PlatformTerm> {
    PlatformTerm::open(config)
}
