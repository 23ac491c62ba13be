// File: crates/pulse-core/src/error.rs
// Summary: Error type shared by the core crate (color parsing, SVG output, session storage).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A color string that is not `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()` or a known name.
    #[error("invalid color '{0}'")]
    InvalidColor(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("session storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
