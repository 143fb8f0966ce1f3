//! Fixed-width hashes
//!
//! Byte arrays with no numeric interpretation; encode/decode is a straight
//! copy. The external form is an uppercase hex string of the full width.

use serde_json::Value as JsonValue;

use crate::error::{CodecError, CodecResult};
use crate::parser::BinaryParser;

macro_rules! hash_type {
    ($name:ident, $width:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $width]);

        impl $name {
            pub const WIDTH: usize = $width;

            pub fn new(bytes: [u8; $width]) -> Self {
                Self(bytes)
            }

            pub fn from_hex(s: &str) -> CodecResult<Self> {
                let bytes = hex::decode(s).map_err(|_| CodecError::InvalidType {
                    expected: "a hex string",
                    actual: s.to_string(),
                })?;
                let bytes: [u8; $width] =
                    bytes
                        .try_into()
                        .map_err(|rejected: Vec<u8>| CodecError::InvalidLength {
                            expected: $width,
                            actual: rejected.len(),
                        })?;
                Ok(Self(bytes))
            }

            pub fn from_json(json: &JsonValue) -> CodecResult<Self> {
                let s = json.as_str().ok_or_else(|| CodecError::InvalidType {
                    expected: "a hex string",
                    actual: json.to_string(),
                })?;
                Self::from_hex(s)
            }

            pub fn to_json(&self) -> JsonValue {
                JsonValue::String(hex::encode_upper(self.0))
            }

            pub fn as_bytes(&self) -> &[u8; $width] {
                &self.0
            }

            pub fn to_bytes(&self) -> Vec<u8> {
                self.0.to_vec()
            }

            pub fn from_parser(parser: &mut BinaryParser<'_>) -> CodecResult<Self> {
                let mut buf = [0u8; $width];
                buf.copy_from_slice(parser.read($width)?);
                Ok(Self(buf))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", hex::encode_upper(self.0))
            }
        }
    };
}

hash_type!(Hash128, 16);
hash_type!(Hash160, 20);
hash_type!(Hash256, 32);
