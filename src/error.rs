//! Error types for the toroidal Life engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    /// A coordinate outside `[0, columns) x [0, rows)` reached the engine.
    #[error("position ({x}, {y}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        columns: u32,
        rows: u32,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;

impl LifeError {
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
