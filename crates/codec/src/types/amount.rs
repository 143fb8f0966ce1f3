//! Currency amounts
//!
//! A native amount is 8 bytes: bit 63 clear, bit 62 set for the non-negative
//! magnitude convention, bits 0-61 the magnitude. An issued amount is 48
//! bytes: 8 bytes of sign/exponent/mantissa followed by the bare 20-byte
//! currency code and 20-byte issuer. The leading two bits disambiguate the
//! two shapes losslessly.
//!
//! Issued values carry at most 15 significant digits; the mantissa is
//! normalized into `[10^15, 10^16)` with a biased exponent, and a value of
//! exactly zero uses the reserved encoding pinned in the definitions module.

use serde_json::{json, Value as JsonValue};

use crate::definitions::ZERO_ISSUED_AMOUNT_BITS;
use crate::error::{CodecError, CodecResult};
use crate::parser::BinaryParser;
use crate::types::account_id::AccountId;
use crate::types::currency::Currency;

/// Largest native magnitude: 62 bits.
pub const MAX_NATIVE_MAGNITUDE: u64 = (1 << 62) - 1;

const NOT_NATIVE_BIT: u64 = 0x8000_0000_0000_0000;
const POSITIVE_BIT: u64 = 0x4000_0000_0000_0000;
const MANTISSA_MASK: u64 = (1 << 54) - 1;

const MIN_MANTISSA: u64 = 1_000_000_000_000_000;
const MAX_MANTISSA: u64 = 9_999_999_999_999_999;
const MIN_EXPONENT: i32 = -96;
const MAX_EXPONENT: i32 = 80;
const EXPONENT_BIAS: i32 = 97;

/// Most significant digits an issued value may carry.
pub const MAX_PRECISION: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    /// Magnitude of the native unit, in drops.
    Native(u64),
    Issued(IssuedAmount),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuedAmount {
    positive: bool,
    /// Normalized exponent; 0 when the value is exactly zero.
    exponent: i32,
    /// Normalized mantissa in `[10^15, 10^16)`; 0 when the value is zero.
    mantissa: u64,
    currency: Currency,
    issuer: AccountId,
}

impl Amount {
    /// Native amount from a drops magnitude.
    pub fn native(magnitude: u64) -> CodecResult<Self> {
        if magnitude > MAX_NATIVE_MAGNITUDE {
            return Err(CodecError::Overflow {
                type_name: "Amount",
                value: magnitude.to_string(),
            });
        }
        Ok(Self::Native(magnitude))
    }

    /// Issued amount from a decimal value string.
    pub fn issued(value: &str, currency: Currency, issuer: AccountId) -> CodecResult<Self> {
        if currency.is_native() {
            return Err(CodecError::InvalidType {
                expected: "an issued-currency code",
                actual: crate::types::currency::NATIVE_CODE.to_string(),
            });
        }
        let (positive, mantissa, exponent) = parse_decimal(value)?;
        Ok(Self::Issued(IssuedAmount {
            positive,
            exponent,
            mantissa,
            currency,
            issuer,
        }))
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    /// A native amount is a bare string; an issued amount is the
    /// `{currency, issuer, value}` triple. Other shapes are rejected.
    pub fn from_json(json: &JsonValue) -> CodecResult<Self> {
        match json {
            JsonValue::String(s) => Self::native_from_str(s),
            JsonValue::Object(map) => {
                let field = |key: &str| {
                    map.get(key).ok_or_else(|| CodecError::InvalidType {
                        expected: "an issued amount with currency, issuer, and value",
                        actual: JsonValue::Object(map.clone()).to_string(),
                    })
                };
                let currency = Currency::from_json(field("currency")?)?;
                let issuer = AccountId::from_json(field("issuer")?)?;
                let value = field("value")?;
                let value = value.as_str().ok_or_else(|| CodecError::InvalidType {
                    expected: "a decimal value string",
                    actual: value.to_string(),
                })?;
                if map.len() != 3 {
                    return Err(CodecError::InvalidType {
                        expected: "an issued amount with exactly currency, issuer, and value",
                        actual: JsonValue::Object(map.clone()).to_string(),
                    });
                }
                Self::issued(value, currency, issuer)
            }
            other => Err(CodecError::InvalidType {
                expected: "a native magnitude string or an issued amount object",
                actual: other.to_string(),
            }),
        }
    }

    fn native_from_str(s: &str) -> CodecResult<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::InvalidType {
                expected: "a non-negative base-10 magnitude",
                actual: s.to_string(),
            });
        }
        let magnitude = s.parse::<u64>().map_err(|_| CodecError::Overflow {
            type_name: "Amount",
            value: s.to_string(),
        })?;
        Self::native(magnitude)
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Native(magnitude) => JsonValue::String(magnitude.to_string()),
            Self::Issued(amount) => json!({
                "currency": amount.currency.to_json(),
                "issuer": amount.issuer.to_json(),
                "value": amount.decimal_string(),
            }),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Native(magnitude) => (POSITIVE_BIT | magnitude).to_be_bytes().to_vec(),
            Self::Issued(amount) => {
                let bits = if amount.mantissa == 0 {
                    ZERO_ISSUED_AMOUNT_BITS
                } else {
                    let sign = if amount.positive { POSITIVE_BIT } else { 0 };
                    let exponent = (amount.exponent + EXPONENT_BIAS) as u64;
                    NOT_NATIVE_BIT | sign | (exponent << 54) | amount.mantissa
                };
                let mut out = Vec::with_capacity(48);
                out.extend_from_slice(&bits.to_be_bytes());
                out.extend_from_slice(&amount.currency.to_bytes());
                out.extend_from_slice(&amount.issuer.to_bytes());
                out
            }
        }
    }

    pub fn from_parser(parser: &mut BinaryParser<'_>) -> CodecResult<Self> {
        let mut leading = [0u8; 8];
        leading.copy_from_slice(parser.read(8)?);
        let bits = u64::from_be_bytes(leading);

        if bits & NOT_NATIVE_BIT == 0 {
            if bits & POSITIVE_BIT == 0 {
                return Err(CodecError::InvalidType {
                    expected: "a non-negative native amount",
                    actual: format!("{:#018X}", bits),
                });
            }
            return Ok(Self::Native(bits & MAX_NATIVE_MAGNITUDE));
        }

        let currency = Currency::from_parser(parser)?;
        let issuer = AccountId::from_parser(parser)?;

        if bits == ZERO_ISSUED_AMOUNT_BITS {
            return Ok(Self::Issued(IssuedAmount {
                positive: true,
                exponent: 0,
                mantissa: 0,
                currency,
                issuer,
            }));
        }

        let positive = bits & POSITIVE_BIT != 0;
        let exponent = ((bits >> 54) & 0xFF) as i32 - EXPONENT_BIAS;
        let mantissa = bits & MANTISSA_MASK;
        if !(MIN_MANTISSA..=MAX_MANTISSA).contains(&mantissa) {
            return Err(CodecError::PrecisionLoss {
                value: format!("mantissa {} outside the normalized range", mantissa),
            });
        }
        if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
            return Err(CodecError::PrecisionLoss {
                value: format!("exponent {} outside the representable range", exponent),
            });
        }
        Ok(Self::Issued(IssuedAmount {
            positive,
            exponent,
            mantissa,
            currency,
            issuer,
        }))
    }
}

impl IssuedAmount {
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn issuer(&self) -> &AccountId {
        &self.issuer
    }

    /// Render the value as a plain decimal string.
    pub fn decimal_string(&self) -> String {
        if self.mantissa == 0 {
            return "0".to_string();
        }
        let mut mantissa = self.mantissa;
        let mut exponent = self.exponent;
        while mantissa % 10 == 0 {
            mantissa /= 10;
            exponent += 1;
        }
        let digits = mantissa.to_string();
        let rendered = if exponent >= 0 {
            format!("{}{}", digits, "0".repeat(exponent as usize))
        } else {
            let point = digits.len() as i32 + exponent;
            if point > 0 {
                format!("{}.{}", &digits[..point as usize], &digits[point as usize..])
            } else {
                format!("0.{}{}", "0".repeat((-point) as usize), digits)
            }
        };
        if self.positive {
            rendered
        } else {
            format!("-{}", rendered)
        }
    }
}

/// Parse a decimal string into sign, normalized mantissa, and exponent.
///
/// Zero comes back as `(sign, 0, 0)`. More than 15 significant digits is a
/// precision failure rather than a rounding; an exponent normalizing above
/// the representable range overflows, one below it would silently underflow
/// to zero and is a precision failure too.
fn parse_decimal(text: &str) -> CodecResult<(bool, u64, i32)> {
    let invalid = || CodecError::InvalidType {
        expected: "a decimal value string",
        actual: text.to_string(),
    };

    let (positive, rest) = match text.strip_prefix('-') {
        Some(rest) => (false, rest),
        None => (true, text.strip_prefix('+').unwrap_or(text)),
    };

    let (mantissa_part, exponent_part) = match rest.find(['e', 'E']) {
        Some(index) => (&rest[..index], Some(&rest[index + 1..])),
        None => (rest, None),
    };
    let mut exponent: i32 = match exponent_part {
        Some(part) => part.parse().map_err(|_| invalid())?,
        None => 0,
    };

    let (int_part, frac_part) = match mantissa_part.find('.') {
        Some(index) => (&mantissa_part[..index], &mantissa_part[index + 1..]),
        None => (mantissa_part, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    exponent -= frac_part.len() as i32;

    let digits = format!("{}{}", int_part, frac_part);
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok((positive, 0, 0));
    }
    let stripped = significant.trim_end_matches('0');
    exponent += (significant.len() - stripped.len()) as i32;

    if stripped.len() > MAX_PRECISION {
        return Err(CodecError::PrecisionLoss {
            value: text.to_string(),
        });
    }
    let mut mantissa: u64 = stripped.parse().map_err(|_| invalid())?;

    let scale = 16 - stripped.len() as i32;
    mantissa *= 10u64.pow(scale as u32);
    exponent -= scale;

    if exponent > MAX_EXPONENT {
        return Err(CodecError::Overflow {
            type_name: "Amount",
            value: text.to_string(),
        });
    }
    if exponent < MIN_EXPONENT {
        return Err(CodecError::PrecisionLoss {
            value: text.to_string(),
        });
    }
    Ok((positive, mantissa, exponent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ISSUER: &str = "5E7B112523F68D2F5E879DB4EAC51C6698A69304";

    fn issued_json(value: &str) -> JsonValue {
        json!({ "currency": "BTC", "issuer": ISSUER, "value": value })
    }

    fn roundtrip(amount: &Amount) -> Amount {
        let bytes = amount.to_bytes();
        let mut parser = BinaryParser::new(&bytes);
        Amount::from_parser(&mut parser).unwrap()
    }

    #[test]
    fn test_native_roundtrip() {
        let amount = Amount::from_json(&json!("10000")).unwrap();
        assert_eq!(amount, Amount::Native(10_000));
        assert_eq!(roundtrip(&amount).to_json(), json!("10000"));
    }

    #[test]
    fn test_native_zero() {
        let amount = Amount::from_json(&json!("0")).unwrap();
        assert_eq!(amount.to_bytes(), 0x4000_0000_0000_0000u64.to_be_bytes());
        assert_eq!(roundtrip(&amount).to_json(), json!("0"));
    }

    #[test]
    fn test_native_positive_bit() {
        let amount = Amount::native(1).unwrap();
        assert_eq!(amount.to_bytes()[0], 0x40);
    }

    #[test]
    fn test_native_overflow() {
        assert_eq!(
            Amount::from_json(&json!("4611686018427387904")),
            Err(CodecError::Overflow {
                type_name: "Amount",
                value: "4611686018427387904".to_string(),
            })
        );
        assert!(Amount::native(MAX_NATIVE_MAGNITUDE).is_ok());
    }

    #[test]
    fn test_native_rejects_sign_and_garbage() {
        assert!(matches!(
            Amount::from_json(&json!("-5")),
            Err(CodecError::InvalidType { .. })
        ));
        assert!(matches!(
            Amount::from_json(&json!("12x4")),
            Err(CodecError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_issued_roundtrip() {
        let amount = Amount::from_json(&issued_json("1.002")).unwrap();
        let decoded = roundtrip(&amount);
        assert_eq!(decoded.to_json(), issued_json("1.002"));
    }

    #[test]
    fn test_issued_payload_is_48_bytes() {
        let amount = Amount::from_json(&issued_json("1.002")).unwrap();
        let bytes = amount.to_bytes();
        assert_eq!(bytes.len(), 48);
        // not-native and sign bits
        assert_eq!(bytes[0] & 0xC0, 0xC0);
    }

    #[test]
    fn test_issued_negative() {
        let amount = Amount::from_json(&issued_json("-42.5")).unwrap();
        let bytes = amount.to_bytes();
        assert_eq!(bytes[0] & 0xC0, 0x80);
        assert_eq!(roundtrip(&amount).to_json(), issued_json("-42.5"));
    }

    #[test]
    fn test_issued_zero_reserved_encoding() {
        let amount = Amount::from_json(&issued_json("0")).unwrap();
        let bytes = amount.to_bytes();
        assert_eq!(&bytes[..8], &ZERO_ISSUED_AMOUNT_BITS.to_be_bytes());
        assert_eq!(roundtrip(&amount).to_json(), issued_json("0"));
        // "-0" and "0.000" collapse into the same encoding
        let negative_zero = Amount::from_json(&issued_json("-0.000")).unwrap();
        assert_eq!(negative_zero.to_bytes(), bytes);
    }

    #[test]
    fn test_precision_limit() {
        // 15 significant digits survive
        let amount = Amount::from_json(&issued_json("1.00000000000001")).unwrap();
        assert_eq!(roundtrip(&amount).to_json(), issued_json("1.00000000000001"));
        // 16 do not
        assert!(matches!(
            Amount::from_json(&issued_json("1.000000000000001")),
            Err(CodecError::PrecisionLoss { .. })
        ));
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        let amount = Amount::from_json(&issued_json("123456789.0000000")).unwrap();
        assert_eq!(roundtrip(&amount).to_json(), issued_json("123456789"));
    }

    #[test]
    fn test_scientific_notation_input() {
        let amount = Amount::from_json(&issued_json("1e2")).unwrap();
        assert_eq!(roundtrip(&amount).to_json(), issued_json("100"));
        let small = Amount::from_json(&issued_json("2.5E-3")).unwrap();
        assert_eq!(roundtrip(&small).to_json(), issued_json("0.0025"));
    }

    #[test]
    fn test_exponent_bounds() {
        // 10^80 has normalized exponent 80 - 15 = 65; push past 80
        let huge = format!("1{}", "0".repeat(96));
        assert!(matches!(
            Amount::from_json(&issued_json(&huge)),
            Err(CodecError::Overflow { .. })
        ));
        let tiny = format!("0.{}1", "0".repeat(111));
        assert!(matches!(
            Amount::from_json(&issued_json(&tiny)),
            Err(CodecError::PrecisionLoss { .. })
        ));
    }

    #[test]
    fn test_issued_requires_exact_triple() {
        let missing = json!({ "currency": "BTC", "value": "1" });
        assert!(matches!(
            Amount::from_json(&missing),
            Err(CodecError::InvalidType { .. })
        ));
        let extra = json!({
            "currency": "BTC",
            "issuer": ISSUER,
            "value": "1",
            "note": "x",
        });
        assert!(matches!(
            Amount::from_json(&extra),
            Err(CodecError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_issued_rejects_native_code() {
        let confused = json!({ "currency": "MRD", "issuer": ISSUER, "value": "1" });
        assert!(matches!(
            Amount::from_json(&confused),
            Err(CodecError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_negative_native() {
        // bit 63 and bit 62 both clear, nonzero magnitude
        let bytes = 5u64.to_be_bytes();
        let mut parser = BinaryParser::new(&bytes);
        assert!(matches!(
            Amount::from_parser(&mut parser),
            Err(CodecError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_denormal_mantissa() {
        let mut bytes = Vec::new();
        // issued, positive, biased exponent 82, mantissa 1 (below 10^15)
        let bits = NOT_NATIVE_BIT | POSITIVE_BIT | (82u64 << 54) | 1;
        bytes.extend_from_slice(&bits.to_be_bytes());
        bytes.extend_from_slice(&Currency::from_code("BTC").unwrap().to_bytes());
        bytes.extend_from_slice(&AccountId::from_hex(ISSUER).unwrap().to_bytes());
        let mut parser = BinaryParser::new(&bytes);
        assert!(matches!(
            Amount::from_parser(&mut parser),
            Err(CodecError::PrecisionLoss { .. })
        ));
    }

    #[test]
    fn test_decode_truncated_issued() {
        let amount = Amount::from_json(&issued_json("7")).unwrap();
        let bytes = amount.to_bytes();
        let mut parser = BinaryParser::new(&bytes[..30]);
        assert!(matches!(
            Amount::from_parser(&mut parser),
            Err(CodecError::TruncatedInput { .. })
        ));
    }
}
