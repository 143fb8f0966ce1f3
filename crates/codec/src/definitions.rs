//! Type/field registry
//!
//! Process-wide metadata mapping every field name to its serialization type,
//! numeric codes, and flags, and every type name to a numeric type code. The
//! table is protocol data assigned by the network's designers, not derivable,
//! so it is embedded as a versioned JSON document and parsed exactly once.
//! After load the registry is immutable and safe for unsynchronized reads.

use std::collections::HashMap;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::Deserialize;
use strum_macros::{Display, EnumString};

use crate::error::{CodecError, CodecResult};
use crate::field_id::{FieldHeader, HeaderCandidates};

/// The embedded definitions table shipped with this crate.
pub const DEFINITIONS_JSON: &str = include_str!("definitions.json");

/// Reserved bit pattern for an issued-currency amount of exactly zero.
///
/// Pinned protocol constant, kept next to the registry table rather than
/// derived: only the not-native bit is set, sign/exponent/mantissa all zero.
pub const ZERO_ISSUED_AMOUNT_BITS: u64 = 0x8000_0000_0000_0000;

/// Serialization type of a field, as named in the definitions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum FieldType {
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Hash128,
    Hash160,
    Hash256,
    Blob,
    AccountID,
    Amount,
    Currency,
    PathSet,
    Vector256,
    STObject,
    STArray,
}

/// Immutable definition of a single field.
///
/// `(type_code, field_code)` is globally unique and defines canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub field_type: FieldType,
    pub type_code: u16,
    pub field_code: u16,
    pub is_variable_length: bool,
    pub is_serialized: bool,
    pub is_signing_field: bool,
    pub is_versioned_metadata: bool,
}

impl FieldDefinition {
    /// The field's wire header pair.
    pub fn header(&self) -> FieldHeader {
        FieldHeader::new(self.type_code, self.field_code)
    }
}

#[derive(Deserialize)]
struct RawDefinitions {
    version: String,
    types: HashMap<String, u16>,
    fields: Vec<RawField>,
    #[serde(rename = "transactionTypes")]
    transaction_types: HashMap<String, u16>,
    #[serde(rename = "ledgerEntryTypes")]
    ledger_entry_types: HashMap<String, u16>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    nth: u16,
    is_variable_length: bool,
    is_serialized: bool,
    is_signing_field: bool,
    is_versioned_metadata: bool,
}

/// Both lookup directions over the definitions table, built once at load.
#[derive(Debug)]
pub struct Registry {
    version: String,
    fields: Vec<FieldDefinition>,
    by_name: HashMap<String, usize>,
    by_code: HashMap<(u16, u16), usize>,
    type_codes: HashMap<String, u16>,
    transaction_types: HashMap<String, u16>,
    transaction_names: HashMap<u16, String>,
    ledger_entry_types: HashMap<String, u16>,
    ledger_entry_names: HashMap<u16, String>,
    object_end: usize,
    array_end: usize,
}

impl Registry {
    /// Parse a definitions document and build both lookup directions.
    pub fn from_json(data: &str) -> CodecResult<Self> {
        let raw: RawDefinitions = serde_json::from_str(data)
            .map_err(|e| CodecError::MalformedDefinitions(e.to_string()))?;

        let mut fields = Vec::with_capacity(raw.fields.len());
        let mut by_name = HashMap::new();
        let mut by_code = HashMap::new();

        for raw_field in raw.fields {
            let field_type = FieldType::from_str(&raw_field.type_name).map_err(|_| {
                CodecError::MalformedDefinitions(format!(
                    "field {} has unknown type {}",
                    raw_field.name, raw_field.type_name
                ))
            })?;
            let type_code = *raw.types.get(&raw_field.type_name).ok_or_else(|| {
                CodecError::MalformedDefinitions(format!(
                    "type {} has no assigned code",
                    raw_field.type_name
                ))
            })?;

            let def = FieldDefinition {
                name: raw_field.name,
                field_type,
                type_code,
                field_code: raw_field.nth,
                is_variable_length: raw_field.is_variable_length,
                is_serialized: raw_field.is_serialized,
                is_signing_field: raw_field.is_signing_field,
                is_versioned_metadata: raw_field.is_versioned_metadata,
            };

            let index = fields.len();
            if by_name.insert(def.name.clone(), index).is_some() {
                return Err(CodecError::MalformedDefinitions(format!(
                    "duplicate field name {}",
                    def.name
                )));
            }
            if by_code
                .insert((def.type_code, def.field_code), index)
                .is_some()
            {
                return Err(CodecError::MalformedDefinitions(format!(
                    "duplicate field code pair ({}, {})",
                    def.type_code, def.field_code
                )));
            }
            fields.push(def);
        }

        let object_end = *by_name.get("ObjectEndMarker").ok_or_else(|| {
            CodecError::MalformedDefinitions("missing ObjectEndMarker".to_string())
        })?;
        let array_end = *by_name.get("ArrayEndMarker").ok_or_else(|| {
            CodecError::MalformedDefinitions("missing ArrayEndMarker".to_string())
        })?;

        let transaction_names = raw
            .transaction_types
            .iter()
            .map(|(name, code)| (*code, name.clone()))
            .collect();
        let ledger_entry_names = raw
            .ledger_entry_types
            .iter()
            .map(|(name, code)| (*code, name.clone()))
            .collect();

        tracing::debug!(
            version = %raw.version,
            fields = fields.len(),
            types = raw.types.len(),
            "loaded definitions table"
        );

        Ok(Self {
            version: raw.version,
            fields,
            by_name,
            by_code,
            type_codes: raw.types,
            transaction_types: raw.transaction_types,
            transaction_names,
            ledger_entry_types: raw.ledger_entry_types,
            ledger_entry_names,
            object_end,
            array_end,
        })
    }

    /// Version tag of the loaded table.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Look up a field definition by name (the encode path).
    pub fn resolve_by_name(&self, name: &str) -> CodecResult<&FieldDefinition> {
        self.by_name
            .get(name)
            .map(|&index| &self.fields[index])
            .ok_or_else(|| CodecError::UnknownField {
                name: name.to_string(),
            })
    }

    /// Look up a field definition by code pair (the decode path).
    pub fn resolve_by_code(&self, type_code: u16, field_code: u16) -> CodecResult<&FieldDefinition> {
        self.by_code
            .get(&(type_code, field_code))
            .map(|&index| &self.fields[index])
            .ok_or(CodecError::UnknownFieldCode {
                type_code,
                field_code,
            })
    }

    /// Arbitrate a decoded header against the table.
    ///
    /// The 2-byte wire forms admit two structurally valid readings; the table
    /// is constructed so that at most one of them resolves.
    pub fn resolve_header(&self, candidates: HeaderCandidates) -> CodecResult<&FieldDefinition> {
        match candidates {
            HeaderCandidates::One(h) => self.resolve_by_code(h.type_code, h.field_code),
            HeaderCandidates::Two(first, second) => self
                .resolve_by_code(first.type_code, first.field_code)
                .or_else(|_| self.resolve_by_code(second.type_code, second.field_code))
                .map_err(|_| CodecError::UnknownFieldCode {
                    type_code: first.type_code,
                    field_code: first.field_code,
                }),
        }
    }

    /// Numeric code assigned to a serialization type name.
    pub fn type_code_for(&self, type_name: &str) -> CodecResult<u16> {
        self.type_codes
            .get(type_name)
            .copied()
            .ok_or_else(|| CodecError::UnknownField {
                name: type_name.to_string(),
            })
    }

    pub fn transaction_type_code(&self, name: &str) -> Option<u16> {
        self.transaction_types.get(name).copied()
    }

    pub fn transaction_type_name(&self, code: u16) -> Option<&str> {
        self.transaction_names.get(&code).map(String::as_str)
    }

    pub fn ledger_entry_type_code(&self, name: &str) -> Option<u16> {
        self.ledger_entry_types.get(name).copied()
    }

    pub fn ledger_entry_type_name(&self, code: u16) -> Option<&str> {
        self.ledger_entry_names.get(&code).map(String::as_str)
    }

    /// Synthetic field closing a nested object.
    pub fn object_end_marker(&self) -> &FieldDefinition {
        &self.fields[self.object_end]
    }

    /// Synthetic field closing an array.
    pub fn array_end_marker(&self) -> &FieldDefinition {
        &self.fields[self.array_end]
    }

    /// All field definitions, in table order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter()
    }
}

lazy_static! {
    static ref REGISTRY: Registry =
        Registry::from_json(DEFINITIONS_JSON).expect("embedded definitions table parses");
}

/// The process-wide registry, built from the embedded table on first use.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_id::{decode_header, encode_header};

    #[test]
    fn test_table_version() {
        assert_eq!(registry().version(), "2026.2");
    }

    #[test]
    fn test_resolve_by_name() {
        let def = registry().resolve_by_name("TransactionType").unwrap();
        assert_eq!(def.field_type, FieldType::UInt16);
        assert_eq!(def.field_code, 2);
        assert!(def.is_signing_field);
    }

    #[test]
    fn test_resolve_by_code() {
        let def = registry().resolve_by_code(8, 1).unwrap();
        assert_eq!(def.name, "Account");
        assert!(def.is_variable_length);
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(
            registry().resolve_by_name("NoSuchField"),
            Err(CodecError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_unknown_code() {
        assert!(matches!(
            registry().resolve_by_code(200, 200),
            Err(CodecError::UnknownFieldCode { .. })
        ));
    }

    #[test]
    fn test_type_code_for() {
        assert_eq!(registry().type_code_for("AccountID").unwrap(), 8);
        assert_eq!(registry().type_code_for("UInt8").unwrap(), 16);
    }

    #[test]
    fn test_transaction_type_catalog() {
        assert_eq!(registry().transaction_type_code("Payment"), Some(0));
        assert_eq!(registry().transaction_type_name(20), Some("TrustSet"));
        assert_eq!(registry().transaction_type_code("NoSuchTransaction"), None);
    }

    #[test]
    fn test_ledger_entry_type_catalog() {
        assert_eq!(registry().ledger_entry_type_code("AccountRoot"), Some(97));
        assert_eq!(registry().ledger_entry_type_name(111), Some("Offer"));
    }

    #[test]
    fn test_end_markers() {
        assert_eq!(
            encode_header(registry().object_end_marker().header()).unwrap(),
            vec![0xE1]
        );
        assert_eq!(
            encode_header(registry().array_end_marker().header()).unwrap(),
            vec![0xF1]
        );
    }

    // Every serialized field's header must decode back to that field and no
    // other; this is what lets the 2-byte forms share a wire shape.
    #[test]
    fn test_headers_resolve_uniquely() {
        for def in registry().fields() {
            if !def.is_serialized || def.field_code > 255 {
                continue;
            }
            let bytes = encode_header(def.header()).unwrap();
            let (candidates, consumed) = decode_header(&bytes).unwrap();
            assert_eq!(consumed, bytes.len());
            let resolved = registry().resolve_header(candidates).unwrap();
            assert_eq!(resolved.name, def.name, "ambiguous header for {}", def.name);
        }
    }

    #[test]
    fn test_signing_fields_are_serialized() {
        for def in registry().fields() {
            if def.is_signing_field {
                assert!(def.is_serialized, "{} signs but never serializes", def.name);
            }
        }
    }
}
