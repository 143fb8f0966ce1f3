//! Model errors

use meridian_codec::CodecError;
use thiserror::Error;

/// Result alias used throughout the models crate
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building or encoding transaction models
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("invalid transaction JSON: {0}")]
    InvalidJson(String),

    #[error("unknown flag bits: {bits:#010X}")]
    UnknownFlagBits { bits: u32 },
}
