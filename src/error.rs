//! Error types
//!
//! Only startup can fail. Once the loop is running every frame operation is total.

use thiserror::Error;

/// Rejected initial parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f64),
    #[error("ball radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
    #[error("fill color must not be empty")]
    EmptyFillColor,
    #[error("boundary margin must be finite and non-negative, got {0}")]
    InvalidMargin(f64),
    #[error("cull buffer must be finite and non-negative, got {0}")]
    InvalidCullBuffer(f64),
}

/// Fatal startup failure; the loop never starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InitError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingCanvas(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("2d context unavailable: {0}")]
    NoContext(String),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}
