//! Crate-level error types.

use std::fmt;

/// Errors produced by the option loader and the viewer host.
///
/// The controller itself never returns these: per-sample failures are
/// reported as [`UnprojectError`](crate::arcball::UnprojectError) and
/// recovered locally.
#[derive(Debug)]
pub enum ArcballError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// An option value outside its valid range.
    InvalidOption(String),
    /// Viewer event-loop or window failure.
    Viewer(String),
}

impl fmt::Display for ArcballError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for ArcballError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArcballError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
