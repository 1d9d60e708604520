//! Crate-wide error type
//!
//! Query generation itself is infallible; errors only arise at the edges
//! (config files, argument parsing, output serialization).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BxError>;

#[derive(Debug, Error)]
pub enum BxError {
    #[error("config error: {0}")]
    Config(String),

    #[error("missing config: {0}")]
    MissingConfig(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("output error: {0}")]
    Output(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
