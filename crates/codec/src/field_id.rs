//! Field header codec
//!
//! Every encoded field begins with a 1-3 byte header packing the
//! `(type_code, field_code)` pair, shortest for small codes:
//!
//! - both codes < 16: `(type << 4) | field`
//! - type < 16, field >= 16: `type << 4`, then the field byte
//! - type >= 16, field < 16: `field << 4`, then the type byte
//! - both >= 16: `0x00`, then the type byte, then the field byte
//!
//! The two 2-byte layouts share the zero-low-nibble shape on the wire, so a
//! header alone can name two candidate pairs; the registry arbitrates which
//! one actually exists (see `BinaryParser::read_field`).

use crate::error::{CodecError, CodecResult};

/// A `(type_code, field_code)` pair. Globally unique per field definition
/// and the sort key for canonical field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldHeader {
    pub type_code: u16,
    pub field_code: u16,
}

impl FieldHeader {
    pub const fn new(type_code: u16, field_code: u16) -> Self {
        Self {
            type_code,
            field_code,
        }
    }
}

/// Candidate readings of a decoded header.
///
/// The 1- and 3-byte forms decode to exactly one pair; the 2-byte forms
/// decode to two structurally valid pairs, listed in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCandidates {
    One(FieldHeader),
    Two(FieldHeader, FieldHeader),
}

/// Encode a field header to its 1-3 byte wire form.
///
/// Codes must fit a single byte and be non-zero; the registry's pseudo-fields
/// (codes above 255) are filtered out before any header is written.
pub fn encode_header(header: FieldHeader) -> CodecResult<Vec<u8>> {
    let FieldHeader {
        type_code,
        field_code,
    } = header;

    if type_code == 0 || type_code > 255 || field_code == 0 || field_code > 255 {
        return Err(CodecError::UnknownFieldCode {
            type_code,
            field_code,
        });
    }

    let bytes = match (type_code < 16, field_code < 16) {
        (true, true) => vec![((type_code << 4) | field_code) as u8],
        (true, false) => vec![(type_code << 4) as u8, field_code as u8],
        (false, true) => vec![(field_code << 4) as u8, type_code as u8],
        (false, false) => vec![0x00, type_code as u8, field_code as u8],
    };
    Ok(bytes)
}

/// Decode a header from the start of `bytes`, returning the candidate pairs
/// and the number of bytes consumed.
pub fn decode_header(bytes: &[u8]) -> CodecResult<(HeaderCandidates, usize)> {
    let first = *bytes.first().ok_or(CodecError::TruncatedInput {
        offset: 0,
        needed: 1,
        remaining: 0,
    })?;
    let high = u16::from(first >> 4);
    let low = u16::from(first & 0x0F);

    match (high, low) {
        (0, 0) => {
            // 3-byte form: both codes follow
            let rest = bytes.get(1..3).ok_or(CodecError::TruncatedInput {
                offset: 1,
                needed: 2,
                remaining: bytes.len() - 1,
            })?;
            let header = FieldHeader::new(u16::from(rest[0]), u16::from(rest[1]));
            if header.type_code < 16 || header.field_code < 16 {
                return Err(CodecError::UnknownFieldCode {
                    type_code: header.type_code,
                    field_code: header.field_code,
                });
            }
            Ok((HeaderCandidates::One(header), 3))
        }
        (0, _) => Err(CodecError::UnknownFieldCode {
            type_code: 0,
            field_code: low,
        }),
        (_, 0) => {
            // 2-byte form: the nibble is one small code, the next byte the
            // other; which is the type is arbitrated by the registry
            let second = u16::from(*bytes.get(1).ok_or(CodecError::TruncatedInput {
                offset: 1,
                needed: 1,
                remaining: 0,
            })?);
            if second < 16 {
                return Err(CodecError::UnknownFieldCode {
                    type_code: high,
                    field_code: second,
                });
            }
            Ok((
                HeaderCandidates::Two(
                    FieldHeader::new(high, second),
                    FieldHeader::new(second, high),
                ),
                2,
            ))
        }
        (_, _) => Ok((HeaderCandidates::One(FieldHeader::new(high, low)), 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_byte_form() {
        assert_eq!(encode_header(FieldHeader::new(1, 2)).unwrap(), vec![0x12]);
    }

    #[test]
    fn test_two_byte_form_large_field() {
        assert_eq!(
            encode_header(FieldHeader::new(8, 20)).unwrap(),
            vec![0x80, 0x14]
        );
    }

    #[test]
    fn test_two_byte_form_large_type() {
        assert_eq!(
            encode_header(FieldHeader::new(20, 3)).unwrap(),
            vec![0x30, 0x14]
        );
    }

    #[test]
    fn test_three_byte_form() {
        assert_eq!(
            encode_header(FieldHeader::new(25, 25)).unwrap(),
            vec![0x00, 0x19, 0x19]
        );
    }

    #[test]
    fn test_zero_codes_rejected() {
        assert!(matches!(
            encode_header(FieldHeader::new(0, 1)),
            Err(CodecError::UnknownFieldCode { .. })
        ));
        assert!(matches!(
            encode_header(FieldHeader::new(1, 0)),
            Err(CodecError::UnknownFieldCode { .. })
        ));
    }

    #[test]
    fn test_oversized_codes_rejected() {
        assert!(matches!(
            encode_header(FieldHeader::new(5, 257)),
            Err(CodecError::UnknownFieldCode { .. })
        ));
    }

    #[test]
    fn test_decode_one_byte() {
        let (candidates, consumed) = decode_header(&[0x12]).unwrap();
        assert_eq!(candidates, HeaderCandidates::One(FieldHeader::new(1, 2)));
        assert_eq!(consumed, 1);
    }

    #[test]
    fn test_decode_two_byte_candidates() {
        let (candidates, consumed) = decode_header(&[0x80, 0x14]).unwrap();
        assert_eq!(
            candidates,
            HeaderCandidates::Two(FieldHeader::new(8, 20), FieldHeader::new(20, 8))
        );
        assert_eq!(consumed, 2);
    }

    #[test]
    fn test_decode_three_byte() {
        let (candidates, consumed) = decode_header(&[0x00, 0x19, 0x19]).unwrap();
        assert_eq!(candidates, HeaderCandidates::One(FieldHeader::new(25, 25)));
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_decode_truncated() {
        assert!(matches!(
            decode_header(&[0x80]),
            Err(CodecError::TruncatedInput { .. })
        ));
        assert!(matches!(
            decode_header(&[0x00, 0x19]),
            Err(CodecError::TruncatedInput { .. })
        ));
        assert!(matches!(
            decode_header(&[]),
            Err(CodecError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_decode_reserved_shapes() {
        // high nibble zero with a non-zero low nibble is not a valid header
        assert!(matches!(
            decode_header(&[0x05, 0x10]),
            Err(CodecError::UnknownFieldCode { .. })
        ));
        // 3-byte form must carry codes >= 16
        assert!(matches!(
            decode_header(&[0x00, 0x02, 0x19]),
            Err(CodecError::UnknownFieldCode { .. })
        ));
    }
}
