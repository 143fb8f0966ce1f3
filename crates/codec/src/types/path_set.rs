//! Payment path sets
//!
//! A path set is self-delimiting and carries no length prefix: each step
//! starts with a type-flag byte naming which fixed-width fields follow, 0xFF
//! separates consecutive paths, and 0x00 terminates the whole set. The flag
//! values never collide with the separators, so the next step's flag byte is
//! itself the step boundary.

use serde_json::{Map, Value as JsonValue};

use crate::error::{CodecError, CodecResult};
use crate::parser::BinaryParser;
use crate::types::account_id::AccountId;
use crate::types::currency::Currency;

pub const STEP_ACCOUNT_FLAG: u8 = 0x01;
pub const STEP_CURRENCY_FLAG: u8 = 0x10;
pub const STEP_ISSUER_FLAG: u8 = 0x20;
pub const PATH_SEPARATOR_BYTE: u8 = 0xFF;
pub const PATH_SET_END_BYTE: u8 = 0x00;

const KNOWN_FLAGS: u8 = STEP_ACCOUNT_FLAG | STEP_CURRENCY_FLAG | STEP_ISSUER_FLAG;

/// One hop in a payment path. At least one field is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathStep {
    account: Option<AccountId>,
    currency: Option<Currency>,
    issuer: Option<AccountId>,
}

impl PathStep {
    pub fn type_flag(&self) -> u8 {
        let mut flag = 0;
        if self.account.is_some() {
            flag |= STEP_ACCOUNT_FLAG;
        }
        if self.currency.is_some() {
            flag |= STEP_CURRENCY_FLAG;
        }
        if self.issuer.is_some() {
            flag |= STEP_ISSUER_FLAG;
        }
        flag
    }

    fn from_json(json: &JsonValue) -> CodecResult<Self> {
        let map = json.as_object().ok_or_else(|| CodecError::InvalidType {
            expected: "a path step object",
            actual: json.to_string(),
        })?;
        let mut step = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "account" => step.account = Some(AccountId::from_json(value)?),
                "currency" => step.currency = Some(Currency::from_json(value)?),
                "issuer" => step.issuer = Some(AccountId::from_json(value)?),
                other => {
                    return Err(CodecError::InvalidType {
                        expected: "a path step with account, currency, or issuer",
                        actual: other.to_string(),
                    })
                }
            }
        }
        if step.type_flag() == 0 {
            return Err(CodecError::InvalidType {
                expected: "a path step with at least one field",
                actual: json.to_string(),
            });
        }
        Ok(step)
    }

    fn to_json(&self) -> JsonValue {
        let mut map = Map::new();
        if let Some(account) = &self.account {
            map.insert("account".to_string(), account.to_json());
        }
        if let Some(currency) = &self.currency {
            map.insert("currency".to_string(), currency.to_json());
        }
        if let Some(issuer) = &self.issuer {
            map.insert("issuer".to_string(), issuer.to_json());
        }
        JsonValue::Object(map)
    }
}

/// A sequence of payment paths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathSet(Vec<Vec<PathStep>>);

impl PathSet {
    pub fn paths(&self) -> &[Vec<PathStep>] {
        &self.0
    }

    pub fn from_json(json: &JsonValue) -> CodecResult<Self> {
        let paths_json = json.as_array().ok_or_else(|| CodecError::InvalidType {
            expected: "an array of payment paths",
            actual: json.to_string(),
        })?;
        let mut paths = Vec::with_capacity(paths_json.len());
        for path_json in paths_json {
            let steps_json = path_json.as_array().ok_or_else(|| CodecError::InvalidType {
                expected: "an array of path steps",
                actual: path_json.to_string(),
            })?;
            if steps_json.is_empty() {
                return Err(CodecError::InvalidType {
                    expected: "a path with at least one step",
                    actual: path_json.to_string(),
                });
            }
            let steps = steps_json
                .iter()
                .map(PathStep::from_json)
                .collect::<CodecResult<Vec<_>>>()?;
            paths.push(steps);
        }
        Ok(Self(paths))
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(
            self.0
                .iter()
                .map(|path| JsonValue::Array(path.iter().map(PathStep::to_json).collect()))
                .collect(),
        )
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (index, path) in self.0.iter().enumerate() {
            if index > 0 {
                out.push(PATH_SEPARATOR_BYTE);
            }
            for step in path {
                out.push(step.type_flag());
                if let Some(account) = &step.account {
                    out.extend_from_slice(&account.to_bytes());
                }
                if let Some(currency) = &step.currency {
                    out.extend_from_slice(&currency.to_bytes());
                }
                if let Some(issuer) = &step.issuer {
                    out.extend_from_slice(&issuer.to_bytes());
                }
            }
        }
        out.push(PATH_SET_END_BYTE);
        out
    }

    pub fn from_parser(parser: &mut BinaryParser<'_>) -> CodecResult<Self> {
        let mut paths = Vec::new();
        let mut current: Vec<PathStep> = Vec::new();
        loop {
            let type_byte = parser.read_u8()?;
            if type_byte == PATH_SET_END_BYTE {
                if !current.is_empty() {
                    paths.push(current);
                } else if !paths.is_empty() {
                    return Err(CodecError::InvalidType {
                        expected: "a path step before the set terminator",
                        actual: "empty path".to_string(),
                    });
                }
                break;
            }
            if type_byte == PATH_SEPARATOR_BYTE {
                if current.is_empty() {
                    return Err(CodecError::InvalidType {
                        expected: "a path step before the path separator",
                        actual: "empty path".to_string(),
                    });
                }
                paths.push(std::mem::take(&mut current));
                continue;
            }
            if type_byte & !KNOWN_FLAGS != 0 {
                return Err(CodecError::InvalidType {
                    expected: "a path step type flag",
                    actual: format!("{:#04X}", type_byte),
                });
            }
            let mut step = PathStep::default();
            if type_byte & STEP_ACCOUNT_FLAG != 0 {
                step.account = Some(AccountId::from_parser(parser)?);
            }
            if type_byte & STEP_CURRENCY_FLAG != 0 {
                step.currency = Some(Currency::from_parser(parser)?);
            }
            if type_byte & STEP_ISSUER_FLAG != 0 {
                step.issuer = Some(AccountId::from_parser(parser)?);
            }
            current.push(step);
        }
        Ok(Self(paths))
    }
}
