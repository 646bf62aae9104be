//! Error types for the Daybreak engine

use thiserror::Error;

/// Main error type for the engine
#[derive(Debug, Error)]
pub enum Error {
    #[error("texture error: {0}")]
    Texture(String),

    #[error("light error: {0}")]
    Light(String),

    #[error("render surface error: {0}")]
    Surface(String),

    #[error("mesh error: {0}")]
    Mesh(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
