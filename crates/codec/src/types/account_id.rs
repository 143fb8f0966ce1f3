//! Raw 20-byte account identifiers
//!
//! The checksummed base58 text form is the address codec's concern; this
//! component only sees the raw identifier, expressed externally as a 40
//! character hex string. As an object field the payload is length-prefixed
//! even though the length is always 20; inside amounts and path steps it is
//! written bare.

use serde_json::Value as JsonValue;

use crate::error::{CodecError, CodecResult};
use crate::parser::BinaryParser;

pub const ACCOUNT_ID_LENGTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId([u8; ACCOUNT_ID_LENGTH]);

impl AccountId {
    pub fn new(bytes: [u8; ACCOUNT_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(s: &str) -> CodecResult<Self> {
        let bytes = hex::decode(s).map_err(|_| CodecError::InvalidType {
            expected: "a hex account identifier",
            actual: s.to_string(),
        })?;
        let bytes: [u8; ACCOUNT_ID_LENGTH] =
            bytes
                .try_into()
                .map_err(|rejected: Vec<u8>| CodecError::InvalidLength {
                    expected: ACCOUNT_ID_LENGTH,
                    actual: rejected.len(),
                })?;
        Ok(Self(bytes))
    }

    pub fn from_json(json: &JsonValue) -> CodecResult<Self> {
        let s = json.as_str().ok_or_else(|| CodecError::InvalidType {
            expected: "a hex account identifier",
            actual: json.to_string(),
        })?;
        Self::from_hex(s)
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::String(hex::encode_upper(self.0))
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LENGTH] {
        &self.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Read a bare identifier (amounts, path steps).
    pub fn from_parser(parser: &mut BinaryParser<'_>) -> CodecResult<Self> {
        let mut buf = [0u8; ACCOUNT_ID_LENGTH];
        buf.copy_from_slice(parser.read(ACCOUNT_ID_LENGTH)?);
        Ok(Self(buf))
    }

    /// Read a length-prefixed identifier (object fields); the prefix must
    /// name exactly 20 bytes.
    pub fn from_parser_framed(
        parser: &mut BinaryParser<'_>,
        length: usize,
    ) -> CodecResult<Self> {
        if length != ACCOUNT_ID_LENGTH {
            return Err(CodecError::InvalidLength {
                expected: ACCOUNT_ID_LENGTH,
                actual: length,
            });
        }
        Self::from_parser(parser)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}
