//! Fixed-width unsigned integers
//!
//! Big-endian, zero-padded to the declared width. The external form of the
//! 64-bit type is an uppercase base-16 string because not every runtime can
//! carry a full unsigned 64-bit value as a numeric literal; narrower types
//! stay base-10 numbers. Comparisons across widths are by numeric value.

use serde_json::Value as JsonValue;

use crate::error::{CodecError, CodecResult};
use crate::parser::BinaryParser;

macro_rules! uint_type {
    ($name:ident, $inner:ty, $width:expr, $type_name:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($inner);

        impl $name {
            pub const WIDTH: usize = $width;

            pub fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Construct from an arbitrary magnitude, rejecting values over
            /// the declared range.
            pub fn from_u64(value: u64) -> CodecResult<Self> {
                <$inner>::try_from(value)
                    .map(Self)
                    .map_err(|_| CodecError::Overflow {
                        type_name: $type_name,
                        value: value.to_string(),
                    })
            }

            pub fn value(&self) -> $inner {
                self.0
            }

            pub fn to_bytes(&self) -> Vec<u8> {
                self.0.to_be_bytes().to_vec()
            }

            pub fn from_parser(parser: &mut BinaryParser<'_>) -> CodecResult<Self> {
                let mut buf = [0u8; $width];
                buf.copy_from_slice(parser.read($width)?);
                Ok(Self(<$inner>::from_be_bytes(buf)))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uint_type!(UInt8, u8, 1, "UInt8");
uint_type!(UInt16, u16, 2, "UInt16");
uint_type!(UInt32, u32, 4, "UInt32");
uint_type!(UInt64, u64, 8, "UInt64");

macro_rules! uint_json_number {
    ($name:ident, $type_name:expr) => {
        impl $name {
            /// Accepts a number or a base-10 string.
            pub fn from_json(json: &JsonValue) -> CodecResult<Self> {
                let magnitude = match json {
                    JsonValue::Number(n) => n.as_u64().ok_or_else(|| CodecError::InvalidType {
                        expected: "an unsigned integer",
                        actual: json.to_string(),
                    })?,
                    JsonValue::String(s) => {
                        s.parse::<u64>().map_err(|_| CodecError::InvalidType {
                            expected: "a base-10 integer string",
                            actual: s.clone(),
                        })?
                    }
                    other => {
                        return Err(CodecError::InvalidType {
                            expected: concat!("a number for ", $type_name),
                            actual: other.to_string(),
                        })
                    }
                };
                Self::from_u64(magnitude)
            }

            pub fn to_json(&self) -> JsonValue {
                JsonValue::from(self.0)
            }
        }
    };
}

uint_json_number!(UInt8, "UInt8");
uint_json_number!(UInt16, "UInt16");
uint_json_number!(UInt32, "UInt32");

impl UInt64 {
    /// Accepts a number or an exactly-16-character base-16 string.
    pub fn from_json(json: &JsonValue) -> CodecResult<Self> {
        match json {
            JsonValue::Number(n) => {
                let magnitude = n.as_u64().ok_or_else(|| CodecError::InvalidType {
                    expected: "an unsigned integer",
                    actual: json.to_string(),
                })?;
                Ok(Self(magnitude))
            }
            JsonValue::String(s) => Self::from_hex(s),
            other => Err(CodecError::InvalidType {
                expected: "a number or base-16 string for UInt64",
                actual: other.to_string(),
            }),
        }
    }

    pub fn from_hex(s: &str) -> CodecResult<Self> {
        if s.len() != 16 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CodecError::InvalidType {
                expected: "a 16-character base-16 string",
                actual: s.to_string(),
            });
        }
        // length and digits are checked above
        let magnitude = u64::from_str_radix(s, 16).map_err(|_| CodecError::InvalidType {
            expected: "a 16-character base-16 string",
            actual: s.to_string(),
        })?;
        Ok(Self(magnitude))
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::String(format!("{:016X}", self.0))
    }
}

// Cross-width comparisons are by numeric value, not declared width.
macro_rules! uint_cross_cmp {
    ($a:ident, $b:ident) => {
        impl PartialEq<$b> for $a {
            fn eq(&self, other: &$b) -> bool {
                u64::from(self.0) == u64::from(other.0)
            }
        }

        impl PartialOrd<$b> for $a {
            fn partial_cmp(&self, other: &$b) -> Option<std::cmp::Ordering> {
                u64::from(self.0).partial_cmp(&u64::from(other.0))
            }
        }
    };
}

uint_cross_cmp!(UInt8, UInt16);
uint_cross_cmp!(UInt8, UInt32);
uint_cross_cmp!(UInt8, UInt64);
uint_cross_cmp!(UInt16, UInt8);
uint_cross_cmp!(UInt16, UInt32);
uint_cross_cmp!(UInt16, UInt64);
uint_cross_cmp!(UInt32, UInt8);
uint_cross_cmp!(UInt32, UInt16);
uint_cross_cmp!(UInt32, UInt64);
uint_cross_cmp!(UInt64, UInt8);
uint_cross_cmp!(UInt64, UInt16);
uint_cross_cmp!(UInt64, UInt32);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_u64_in_range() {
        assert_eq!(UInt8::from_u64(255).unwrap().value(), 255);
        assert_eq!(UInt16::from_u64(65_535).unwrap().value(), 65_535);
        assert_eq!(UInt32::from_u64(4_294_967_295).unwrap().value(), 4_294_967_295);
        assert_eq!(UInt64::from_u64(u64::MAX).unwrap().value(), u64::MAX);
    }

    #[test]
    fn test_from_u64_overflow() {
        assert!(matches!(
            UInt8::from_u64(256),
            Err(CodecError::Overflow { type_name: "UInt8", .. })
        ));
        assert!(matches!(
            UInt16::from_u64(65_536),
            Err(CodecError::Overflow { .. })
        ));
        assert!(matches!(
            UInt32::from_u64(1 << 32),
            Err(CodecError::Overflow { .. })
        ));
    }

    #[test]
    fn test_uint64_hex_string() {
        let from_hex = UInt64::from_json(&json!("FFFFFFFFFFFFFFFF")).unwrap();
        assert_eq!(from_hex, UInt64::from_u64(u64::MAX).unwrap());
    }

    #[test]
    fn test_uint64_hex_string_wrong_length() {
        assert!(matches!(
            UInt64::from_json(&json!("FFFF")),
            Err(CodecError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_uint32_base10_string() {
        assert_eq!(
            UInt32::from_json(&json!("4294967295")).unwrap().value(),
            4_294_967_295
        );
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(matches!(
            UInt8::from_json(&json!([1, 2, 3])),
            Err(CodecError::InvalidType { .. })
        ));
        assert!(matches!(
            UInt64::from_json(&json!({"a": 1})),
            Err(CodecError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_cross_width_equality() {
        let narrow = UInt8::new(124);
        let wide = UInt64::new(124);
        assert_eq!(narrow, wide);
        assert_eq!(wide, narrow);
        assert!(UInt16::new(2) > UInt8::new(1));
        assert!(UInt8::new(1) < UInt32::new(300));
    }

    #[test]
    fn test_external_representation() {
        assert_eq!(UInt32::new(4_294_967_295).to_json(), json!(4_294_967_295u32));
        assert_eq!(
            UInt64::new(18_446_744_073_709_551_615).to_json(),
            json!("FFFFFFFFFFFFFFFF")
        );
    }

    #[test]
    fn test_big_endian_bytes() {
        assert_eq!(UInt16::new(0x1234).to_bytes(), vec![0x12, 0x34]);
        assert_eq!(UInt32::new(1).to_bytes(), vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_parser_roundtrip() {
        let bytes = UInt32::new(7_654_321).to_bytes();
        let mut parser = BinaryParser::new(&bytes);
        assert_eq!(UInt32::from_parser(&mut parser).unwrap().value(), 7_654_321);
    }
}
