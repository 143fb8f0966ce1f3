//! Codec errors
//!
//! Every failure here is a structural defect in the input — the codec has no
//! transient failure modes and never retries. Variants carry enough context
//! (field name, offset, attempted value) to diagnose the defect at the caller.

use thiserror::Error;

/// Result alias used throughout the codec
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding canonical bytes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Unknown field: {name}")]
    UnknownField { name: String },

    #[error("Unknown field code: type {type_code}, field {field_code}")]
    UnknownFieldCode { type_code: u16, field_code: u16 },

    #[error("Invalid value: expected {expected}, got {actual}")]
    InvalidType {
        expected: &'static str,
        actual: String,
    },

    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Value out of range for {type_name}: {value}")]
    Overflow {
        type_name: &'static str,
        value: String,
    },

    #[error("Value cannot be represented exactly: {value}")]
    PrecisionLoss { value: String },

    #[error("Truncated input at offset {offset}: needed {needed} more bytes, {remaining} remain")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Field too large: {length} bytes exceeds maximum of {max}")]
    FieldTooLarge { length: usize, max: usize },

    #[error("Malformed definitions table: {0}")]
    MalformedDefinitions(String),
}
