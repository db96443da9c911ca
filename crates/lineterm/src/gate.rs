/// Capability gate run before any line editor is constructed
use crate::error::{Result, TermError};

/// Environment variable holding the terminal type
pub const TERM_ENV_VAR: &str = "TERM";

/// Terminal type that cannot host interactive line editing
pub const DUMB_TERM: &str = "dumb";

/// Check the current process environment.
///
/// Reads `TERM` once. Has no side effects besides that read.
pub fn check_support() -> Result<()> {
    let term = std::env::var(TERM_ENV_VAR).ok();
    check_term(term.as_deref())
}

/// Check a terminal type value. `None` means the variable is unset, which is
/// accepted: the editor itself degrades when stdin is not a tty.
pub fn check_term(term: Option<&str>) -> Result<()> {
    match term {
        Some(DUMB_TERM) => {
            log::debug!("{}={} rejects interactive line editing", TERM_ENV_VAR, DUMB_TERM);
            Err(TermError::NotSupported)
        }
        _ => Ok(()),
    }
}
