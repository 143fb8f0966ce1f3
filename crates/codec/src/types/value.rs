//! The typed value tree
//!
//! A tagged variant over every primitive and composite wire type, dispatching
//! encode/decode to the matching codec. This is the shape the composite codec
//! recurses over; no field identity lives here.

use serde_json::Value as JsonValue;

use crate::definitions::FieldType;
use crate::error::{CodecError, CodecResult};
use crate::parser::BinaryParser;
use crate::types::account_id::AccountId;
use crate::types::amount::Amount;
use crate::types::array::StArray;
use crate::types::blob::Blob;
use crate::types::currency::Currency;
use crate::types::hash::{Hash128, Hash160, Hash256};
use crate::types::object::{EncodeMode, StObject, OBJECT_END_MARKER_BYTE};
use crate::types::path_set::PathSet;
use crate::types::uint::{UInt16, UInt32, UInt64, UInt8};
use crate::types::vector256::Vector256;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    UInt8(UInt8),
    UInt16(UInt16),
    UInt32(UInt32),
    UInt64(UInt64),
    Hash128(Hash128),
    Hash160(Hash160),
    Hash256(Hash256),
    Blob(Blob),
    AccountId(AccountId),
    Amount(Amount),
    Currency(Currency),
    PathSet(PathSet),
    Vector256(Vector256),
    Object(StObject),
    Array(StArray),
}

impl Value {
    /// Build a typed value from its external JSON form.
    pub fn from_json(field_type: FieldType, json: &JsonValue) -> CodecResult<Self> {
        match field_type {
            FieldType::UInt8 => UInt8::from_json(json).map(Self::UInt8),
            FieldType::UInt16 => UInt16::from_json(json).map(Self::UInt16),
            FieldType::UInt32 => UInt32::from_json(json).map(Self::UInt32),
            FieldType::UInt64 => UInt64::from_json(json).map(Self::UInt64),
            FieldType::Hash128 => Hash128::from_json(json).map(Self::Hash128),
            FieldType::Hash160 => Hash160::from_json(json).map(Self::Hash160),
            FieldType::Hash256 => Hash256::from_json(json).map(Self::Hash256),
            FieldType::Blob => Blob::from_json(json).map(Self::Blob),
            FieldType::AccountID => AccountId::from_json(json).map(Self::AccountId),
            FieldType::Amount => Amount::from_json(json).map(Self::Amount),
            FieldType::Currency => Currency::from_json(json).map(Self::Currency),
            FieldType::PathSet => PathSet::from_json(json).map(Self::PathSet),
            FieldType::Vector256 => Vector256::from_json(json).map(Self::Vector256),
            FieldType::STObject => StObject::from_json(json).map(Self::Object),
            FieldType::STArray => StArray::from_json(json).map(Self::Array),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::UInt8(v) => v.to_json(),
            Self::UInt16(v) => v.to_json(),
            Self::UInt32(v) => v.to_json(),
            Self::UInt64(v) => v.to_json(),
            Self::Hash128(v) => v.to_json(),
            Self::Hash160(v) => v.to_json(),
            Self::Hash256(v) => v.to_json(),
            Self::Blob(v) => v.to_json(),
            Self::AccountId(v) => v.to_json(),
            Self::Amount(v) => v.to_json(),
            Self::Currency(v) => v.to_json(),
            Self::PathSet(v) => v.to_json(),
            Self::Vector256(v) => v.to_json(),
            Self::Object(v) => v.to_json(),
            Self::Array(v) => v.to_json(),
        }
    }

    /// The value's wire payload, without any field header or length prefix.
    ///
    /// A nested object's payload is its fully-serialized body plus the
    /// object-end marker; an array's includes the array-end marker. Both are
    /// self-delimiting, so neither is ever length-prefixed by the caller.
    pub fn to_bytes(&self) -> CodecResult<Vec<u8>> {
        match self {
            Self::UInt8(v) => Ok(v.to_bytes()),
            Self::UInt16(v) => Ok(v.to_bytes()),
            Self::UInt32(v) => Ok(v.to_bytes()),
            Self::UInt64(v) => Ok(v.to_bytes()),
            Self::Hash128(v) => Ok(v.to_bytes()),
            Self::Hash160(v) => Ok(v.to_bytes()),
            Self::Hash256(v) => Ok(v.to_bytes()),
            Self::Blob(v) => Ok(v.to_bytes()),
            Self::AccountId(v) => Ok(v.to_bytes()),
            Self::Amount(v) => Ok(v.to_bytes()),
            Self::Currency(v) => Ok(v.to_bytes()),
            Self::PathSet(v) => Ok(v.to_bytes()),
            Self::Vector256(v) => Ok(v.to_bytes()),
            Self::Object(v) => {
                let mut bytes = v.to_bytes(EncodeMode::Full)?;
                bytes.push(OBJECT_END_MARKER_BYTE);
                Ok(bytes)
            }
            Self::Array(v) => v.to_bytes(),
        }
    }

    /// Decode a value of the given type from the stream.
    ///
    /// `length` is the already-consumed length prefix for variable-length
    /// fields and `None` for fixed-width and self-delimiting types.
    pub fn from_parser(
        field_type: FieldType,
        parser: &mut BinaryParser<'_>,
        length: Option<usize>,
    ) -> CodecResult<Self> {
        let framed = |length: Option<usize>| {
            length.ok_or(CodecError::InvalidType {
                expected: "a length-prefixed field",
                actual: field_type.to_string(),
            })
        };
        match field_type {
            FieldType::UInt8 => UInt8::from_parser(parser).map(Self::UInt8),
            FieldType::UInt16 => UInt16::from_parser(parser).map(Self::UInt16),
            FieldType::UInt32 => UInt32::from_parser(parser).map(Self::UInt32),
            FieldType::UInt64 => UInt64::from_parser(parser).map(Self::UInt64),
            FieldType::Hash128 => Hash128::from_parser(parser).map(Self::Hash128),
            FieldType::Hash160 => Hash160::from_parser(parser).map(Self::Hash160),
            FieldType::Hash256 => Hash256::from_parser(parser).map(Self::Hash256),
            FieldType::Blob => Blob::from_parser(parser, framed(length)?).map(Self::Blob),
            FieldType::AccountID => {
                AccountId::from_parser_framed(parser, framed(length)?).map(Self::AccountId)
            }
            FieldType::Amount => Amount::from_parser(parser).map(Self::Amount),
            FieldType::Currency => Currency::from_parser(parser).map(Self::Currency),
            FieldType::PathSet => PathSet::from_parser(parser).map(Self::PathSet),
            FieldType::Vector256 => {
                Vector256::from_parser(parser, framed(length)?).map(Self::Vector256)
            }
            FieldType::STObject => StObject::from_parser_nested(parser).map(Self::Object),
            FieldType::STArray => StArray::from_parser(parser).map(Self::Array),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_by_type() {
        let value = Value::from_json(FieldType::UInt32, &json!(42)).unwrap();
        assert_eq!(value.to_bytes().unwrap(), vec![0, 0, 0, 42]);
        let value = Value::from_json(FieldType::Blob, &json!("CAFE")).unwrap();
        assert_eq!(value.to_bytes().unwrap(), vec![0xCA, 0xFE]);
    }

    #[test]
    fn test_type_mismatch() {
        assert!(matches!(
            Value::from_json(FieldType::Hash256, &json!(7)),
            Err(CodecError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_nested_object_payload_is_self_delimiting() {
        let value = Value::from_json(FieldType::STObject, &json!({ "MemoData": "CAFE" })).unwrap();
        let bytes = value.to_bytes().unwrap();
        assert_eq!(*bytes.last().unwrap(), OBJECT_END_MARKER_BYTE);
    }
}
