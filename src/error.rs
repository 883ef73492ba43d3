//! Crate-level error types.

use std::fmt;

/// Errors produced by the wormhole crate.
///
/// Navigation itself is total over finite inputs; only option files can
/// fail.
#[derive(Debug)]
pub enum WormholeError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for WormholeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for WormholeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for WormholeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
