//! Variable-length byte strings
//!
//! The payload itself is opaque; when serialized as an object field it is
//! always preceded by the framer's length prefix.

use serde_json::Value as JsonValue;

use crate::error::{CodecError, CodecResult};
use crate::parser::BinaryParser;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob(Vec<u8>);

impl Blob {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn from_hex(s: &str) -> CodecResult<Self> {
        hex::decode(s).map(Self).map_err(|_| CodecError::InvalidType {
            expected: "a hex string",
            actual: s.to_string(),
        })
    }

    pub fn from_json(json: &JsonValue) -> CodecResult<Self> {
        let s = json.as_str().ok_or_else(|| CodecError::InvalidType {
            expected: "a hex string",
            actual: json.to_string(),
        })?;
        Self::from_hex(s)
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::String(hex::encode_upper(&self.0))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read `length` payload bytes; the length prefix has already been
    /// consumed by the field reader.
    pub fn from_parser(parser: &mut BinaryParser<'_>, length: usize) -> CodecResult<Self> {
        Ok(Self(parser.read(length)?.to_vec()))
    }
}
