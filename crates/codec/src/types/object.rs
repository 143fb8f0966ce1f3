//! Nested field-value objects
//!
//! The heart of the composite codec: an object owns its fields in insertion
//! order, and canonical wire order is recomputed from the registry at encode
//! time by sorting on `(type_code, field_code)`. Nested objects are closed by
//! a single end-marker byte rather than a length prefix.

use serde_json::{Map, Value as JsonValue};

use crate::definitions::{registry, FieldDefinition, FieldType};
use crate::error::{CodecError, CodecResult};
use crate::parser::BinaryParser;
use crate::serializer::BinarySerializer;
use crate::types::uint::UInt16;
use crate::types::value::Value;

/// Wire byte closing a nested object: the header of the synthetic
/// `ObjectEndMarker` field.
pub const OBJECT_END_MARKER_BYTE: u8 = 0xE1;

/// Which fields a serialization pass keeps.
///
/// `Signing` drops every field that does not contribute to the signature;
/// the filter applies to the object being encoded, not to composites nested
/// inside it, which always serialize in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeMode {
    Full,
    Signing,
}

#[derive(Debug, Clone, PartialEq)]
struct StEntry {
    def: &'static FieldDefinition,
    value: Value,
}

/// An ordered-by-insertion field-value mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StObject {
    entries: Vec<StEntry>,
}

impl StObject {
    /// Resolve and type every field of a JSON object.
    ///
    /// Known fields that are never serialized (lookup pseudo-fields) are
    /// skipped; unknown names fail.
    pub fn from_json(json: &JsonValue) -> CodecResult<Self> {
        let map = json.as_object().ok_or_else(|| CodecError::InvalidType {
            expected: "an object mapping field names to values",
            actual: json.to_string(),
        })?;
        let mut entries = Vec::with_capacity(map.len());
        for (name, field_json) in map {
            let def = registry().resolve_by_name(name)?;
            if !def.is_serialized {
                continue;
            }
            let value = value_from_json(def, field_json)?;
            entries.push(StEntry { def, value });
        }
        Ok(Self { entries })
    }

    pub(crate) fn single(def: &'static FieldDefinition, value: Value) -> Self {
        Self {
            entries: vec![StEntry { def, value }],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a field's value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.def.name == name)
            .map(|entry| &entry.value)
    }

    /// Names of the single-field wrapper, when this object is an array
    /// element.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.def.name.as_str())
    }

    /// Serialize in canonical order under the given mode.
    pub fn to_bytes(&self, mode: EncodeMode) -> CodecResult<Vec<u8>> {
        let mut selected: Vec<&StEntry> = self
            .entries
            .iter()
            .filter(|entry| match mode {
                EncodeMode::Full => true,
                EncodeMode::Signing => entry.def.is_signing_field,
            })
            .collect();
        selected.sort_by_key(|entry| entry.def.header());

        let mut serializer = BinarySerializer::new();
        for entry in selected {
            serializer.write_field(entry.def, &entry.value)?;
        }
        Ok(serializer.into_bytes())
    }

    /// Decode fields until the input is exhausted (a top-level object).
    pub fn from_parser(parser: &mut BinaryParser<'_>) -> CodecResult<Self> {
        Self::decode_fields(parser, false)
    }

    /// Decode the fields of a nested object, consuming its end marker.
    pub fn from_parser_nested(parser: &mut BinaryParser<'_>) -> CodecResult<Self> {
        Self::decode_fields(parser, true)
    }

    fn decode_fields(parser: &mut BinaryParser<'_>, nested: bool) -> CodecResult<Self> {
        let object_end = registry().object_end_marker().header();
        let mut entries = Vec::new();
        loop {
            if parser.is_end() {
                if nested {
                    // ran out of bytes before the end marker
                    return Err(CodecError::TruncatedInput {
                        offset: parser.offset(),
                        needed: 1,
                        remaining: 0,
                    });
                }
                break;
            }
            let def = parser.read_field()?;
            if def.header() == object_end {
                if nested {
                    break;
                }
                return Err(CodecError::InvalidType {
                    expected: "a field header",
                    actual: "object end marker at top level".to_string(),
                });
            }
            let value = parser.read_field_value(def)?;
            entries.push(StEntry { def, value });
        }
        Ok(Self { entries })
    }

    pub fn to_json(&self) -> JsonValue {
        let mut map = Map::with_capacity(self.entries.len());
        for entry in &self.entries {
            let json = enum_name_json(entry.def, &entry.value)
                .unwrap_or_else(|| entry.value.to_json());
            map.insert(entry.def.name.clone(), json);
        }
        JsonValue::Object(map)
    }
}

/// Type a field's JSON, letting the `TransactionType` and `LedgerEntryType`
/// fields spell their UInt16 code as a catalog name.
fn value_from_json(def: &FieldDefinition, json: &JsonValue) -> CodecResult<Value> {
    if def.field_type == FieldType::UInt16 {
        if let JsonValue::String(name) = json {
            let code = match def.name.as_str() {
                "TransactionType" => registry().transaction_type_code(name),
                "LedgerEntryType" => registry().ledger_entry_type_code(name),
                _ => None,
            };
            if let Some(code) = code {
                return Ok(Value::UInt16(UInt16::new(code)));
            }
        }
    }
    Value::from_json(def.field_type, json)
}

/// The catalog name for an enum-valued UInt16 field, when the code has one.
fn enum_name_json(def: &FieldDefinition, value: &Value) -> Option<JsonValue> {
    let Value::UInt16(code) = value else {
        return None;
    };
    let name = match def.name.as_str() {
        "TransactionType" => registry().transaction_type_name(code.value()),
        "LedgerEntryType" => registry().ledger_entry_type_name(code.value()),
        _ => None,
    }?;
    Some(JsonValue::String(name.to_string()))
}
