//! Sequences of 256-bit hashes
//!
//! Length-prefixed as a whole when serialized as an object field; the byte
//! length must be a multiple of 32.

use serde_json::Value as JsonValue;

use crate::error::{CodecError, CodecResult};
use crate::parser::BinaryParser;
use crate::types::hash::Hash256;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vector256(Vec<Hash256>);

impl Vector256 {
    pub fn new(hashes: Vec<Hash256>) -> Self {
        Self(hashes)
    }

    pub fn hashes(&self) -> &[Hash256] {
        &self.0
    }

    pub fn from_json(json: &JsonValue) -> CodecResult<Self> {
        let entries = json.as_array().ok_or_else(|| CodecError::InvalidType {
            expected: "an array of 256-bit hashes",
            actual: json.to_string(),
        })?;
        entries
            .iter()
            .map(Hash256::from_json)
            .collect::<CodecResult<Vec<_>>>()
            .map(Self)
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.0.iter().map(Hash256::to_json).collect())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.0.len() * Hash256::WIDTH);
        for hash in &self.0 {
            out.extend_from_slice(hash.as_bytes());
        }
        out
    }

    /// Read `length` payload bytes as whole hashes.
    pub fn from_parser(parser: &mut BinaryParser<'_>, length: usize) -> CodecResult<Self> {
        if length % Hash256::WIDTH != 0 {
            return Err(CodecError::InvalidType {
                expected: "a byte length that is a multiple of 32",
                actual: length.to_string(),
            });
        }
        let mut hashes = Vec::with_capacity(length / Hash256::WIDTH);
        for _ in 0..length / Hash256::WIDTH {
            hashes.push(Hash256::from_parser(parser)?);
        }
        Ok(Self(hashes))
    }
}
