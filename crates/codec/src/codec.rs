//! Codec facade
//!
//! The only entry point external collaborators use: a nested field-name to
//! value mapping in, canonical bytes out, and the inverse. No business-rule
//! validation happens here; the model layer owns field semantics.

use serde_json::Value as JsonValue;

use crate::error::CodecResult;
use crate::parser::BinaryParser;
use crate::types::{AccountId, EncodeMode, StObject};

/// Encode every serialized field in canonical order.
pub fn encode(value: &JsonValue) -> CodecResult<Vec<u8>> {
    StObject::from_json(value)?.to_bytes(EncodeMode::Full)
}

/// Encode only the fields that contribute to a signature.
pub fn encode_for_signing(value: &JsonValue) -> CodecResult<Vec<u8>> {
    StObject::from_json(value)?.to_bytes(EncodeMode::Signing)
}

/// Encode for one signer of a multi-signed transaction: the signing-mode
/// bytes followed by the signer's raw account identifier, given here in its
/// 40-character hex form.
pub fn encode_for_multisigning(value: &JsonValue, signer_account: &str) -> CodecResult<Vec<u8>> {
    let mut bytes = StObject::from_json(value)?.to_bytes(EncodeMode::Signing)?;
    bytes.extend_from_slice(&AccountId::from_hex(signer_account)?.to_bytes());
    Ok(bytes)
}

/// Decode canonical bytes back into the field-name to value mapping.
pub fn decode(bytes: &[u8]) -> CodecResult<JsonValue> {
    let mut parser = BinaryParser::new(bytes);
    let object = StObject::from_parser(&mut parser)?;
    Ok(object.to_json())
}
