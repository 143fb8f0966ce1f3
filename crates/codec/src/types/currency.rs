//! 160-bit currency codes
//!
//! The standard layout is all zero except bytes 12-14, which carry a three
//! character ASCII code. The all-zero code is the ledger's native unit and
//! renders as "MRD"; anything that fits neither shape is expressed as the raw
//! 40-character hex form.

use serde_json::Value as JsonValue;

use crate::error::{CodecError, CodecResult};
use crate::parser::BinaryParser;

pub const CURRENCY_CODE_LENGTH: usize = 20;

/// Name of the ledger's native unit.
pub const NATIVE_CODE: &str = "MRD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency([u8; CURRENCY_CODE_LENGTH]);

impl Currency {
    /// The native unit's reserved all-zero code.
    pub fn native() -> Self {
        Self([0; CURRENCY_CODE_LENGTH])
    }

    pub fn is_native(&self) -> bool {
        self.0 == [0; CURRENCY_CODE_LENGTH]
    }

    /// Parse "MRD", a three-character ASCII code, or a 40-character hex form.
    pub fn from_code(code: &str) -> CodecResult<Self> {
        if code == NATIVE_CODE {
            return Ok(Self::native());
        }
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            let mut bytes = [0; CURRENCY_CODE_LENGTH];
            bytes[12..15].copy_from_slice(code.as_bytes());
            return Ok(Self(bytes));
        }
        if code.len() == CURRENCY_CODE_LENGTH * 2 {
            if let Ok(decoded) = hex::decode(code) {
                let mut bytes = [0; CURRENCY_CODE_LENGTH];
                bytes.copy_from_slice(&decoded);
                return Ok(Self(bytes));
            }
        }
        Err(CodecError::InvalidType {
            expected: "a three-character or 40-character hex currency code",
            actual: code.to_string(),
        })
    }

    pub fn from_json(json: &JsonValue) -> CodecResult<Self> {
        let s = json.as_str().ok_or_else(|| CodecError::InvalidType {
            expected: "a currency code string",
            actual: json.to_string(),
        })?;
        Self::from_code(s)
    }

    /// The three-character code, when the bytes follow the standard layout.
    fn standard_code(&self) -> Option<String> {
        if self.0[..12].iter().any(|&b| b != 0) || self.0[15..].iter().any(|&b| b != 0) {
            return None;
        }
        let code = &self.0[12..15];
        if !code.iter().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        Some(String::from_utf8_lossy(code).into_owned())
    }

    /// The external string form: "MRD", a standard three-character code, or
    /// raw hex.
    pub fn code(&self) -> String {
        if self.is_native() {
            return NATIVE_CODE.to_string();
        }
        match self.standard_code() {
            // a standard-layout "MRD" would not round-trip through the
            // reserved all-zero form, so it stays hex
            Some(code) if code != NATIVE_CODE => code,
            _ => hex::encode_upper(self.0),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::String(self.code())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn from_parser(parser: &mut BinaryParser<'_>) -> CodecResult<Self> {
        let mut buf = [0u8; CURRENCY_CODE_LENGTH];
        buf.copy_from_slice(parser.read(CURRENCY_CODE_LENGTH)?);
        Ok(Self(buf))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
