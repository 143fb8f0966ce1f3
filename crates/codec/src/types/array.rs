//! Arrays of wrapped objects
//!
//! An array value is a sequence of single-field objects, each wrapping one
//! nested object under an object-typed field name. Elements carry their own
//! end markers; the array itself is closed by a single array-end byte, so an
//! empty array is just the marker.

use serde_json::Value as JsonValue;

use crate::definitions::{registry, FieldType};
use crate::error::{CodecError, CodecResult};
use crate::parser::BinaryParser;
use crate::serializer::BinarySerializer;
use crate::types::object::{EncodeMode, StObject};
use crate::types::value::Value;

/// Wire byte closing an array: the header of the synthetic `ArrayEndMarker`
/// field.
pub const ARRAY_END_MARKER_BYTE: u8 = 0xF1;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StArray {
    elements: Vec<StObject>,
}

impl StArray {
    pub fn elements(&self) -> &[StObject] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn from_json(json: &JsonValue) -> CodecResult<Self> {
        let entries = json.as_array().ok_or_else(|| CodecError::InvalidType {
            expected: "an array of single-field wrapper objects",
            actual: json.to_string(),
        })?;
        let mut elements = Vec::with_capacity(entries.len());
        for entry in entries {
            let map = entry.as_object().ok_or_else(|| CodecError::InvalidType {
                expected: "a single-field wrapper object",
                actual: entry.to_string(),
            })?;
            let (name, _) = match map.iter().next() {
                Some(field) if map.len() == 1 => field,
                _ => {
                    return Err(CodecError::InvalidType {
                        expected: "a wrapper object with exactly one field",
                        actual: entry.to_string(),
                    })
                }
            };
            let def = registry().resolve_by_name(name)?;
            if def.field_type != FieldType::STObject {
                return Err(CodecError::InvalidType {
                    expected: "an object-typed wrapper field",
                    actual: name.clone(),
                });
            }
            elements.push(StObject::from_json(entry)?);
        }
        Ok(Self { elements })
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.elements.iter().map(StObject::to_json).collect())
    }

    pub fn to_bytes(&self) -> CodecResult<Vec<u8>> {
        let mut serializer = BinarySerializer::new();
        for element in &self.elements {
            serializer.append(&element.to_bytes(EncodeMode::Full)?);
        }
        serializer.push(ARRAY_END_MARKER_BYTE);
        Ok(serializer.into_bytes())
    }

    /// Collect wrapped objects until the array-end marker is consumed.
    pub fn from_parser(parser: &mut BinaryParser<'_>) -> CodecResult<Self> {
        let array_end = registry().array_end_marker().header();
        let mut elements = Vec::new();
        loop {
            let def = parser.read_field()?;
            if def.header() == array_end {
                break;
            }
            if def.field_type != FieldType::STObject {
                return Err(CodecError::InvalidType {
                    expected: "an object-typed array element",
                    actual: def.name.clone(),
                });
            }
            let inner = StObject::from_parser_nested(parser)?;
            elements.push(StObject::single(def, Value::Object(inner)));
        }
        Ok(Self { elements })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn memos_json() -> JsonValue {
        json!([
            { "Memo": { "MemoType": "74657874", "MemoData": "CAFE" } },
            { "Memo": { "MemoData": "F00D" } },
        ])
    }

    #[test]
    fn test_roundtrip() {
        let array = StArray::from_json(&memos_json()).unwrap();
        let bytes = array.to_bytes().unwrap();
        assert_eq!(*bytes.last().unwrap(), ARRAY_END_MARKER_BYTE);
        let mut parser = BinaryParser::new(&bytes);
        let decoded = StArray::from_parser(&mut parser).unwrap();
        assert!(parser.is_end());
        assert_eq!(decoded.to_json(), memos_json());
    }

    #[test]
    fn test_empty_array_is_just_the_marker() {
        let array = StArray::from_json(&json!([])).unwrap();
        assert_eq!(array.to_bytes().unwrap(), vec![ARRAY_END_MARKER_BYTE]);
        let mut parser = BinaryParser::new(&[ARRAY_END_MARKER_BYTE]);
        assert!(StArray::from_parser(&mut parser).unwrap().is_empty());
    }

    #[test]
    fn test_multi_field_wrapper_rejected() {
        let bad = json!([
            { "Memo": { "MemoData": "CAFE" }, "Signer": {} },
        ]);
        assert!(matches!(
            StArray::from_json(&bad),
            Err(CodecError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_non_object_wrapper_field_rejected() {
        // Sequence is a UInt32 field, not an object wrapper
        let bad = json!([{ "Sequence": 7 }]);
        assert!(matches!(
            StArray::from_json(&bad),
            Err(CodecError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_missing_end_marker() {
        let array = StArray::from_json(&memos_json()).unwrap();
        let bytes = array.to_bytes().unwrap();
        let mut parser = BinaryParser::new(&bytes[..bytes.len() - 1]);
        assert!(matches!(
            StArray::from_parser(&mut parser),
            Err(CodecError::TruncatedInput { .. })
        ));
    }
}
