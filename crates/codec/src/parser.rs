//! Left-to-right cursor over a canonical byte sequence
//!
//! Decoding never backtracks: every type is fixed-width, length-prefixed, or
//! self-delimiting via boundary markers, so the cursor only moves forward.
//! Running past the end of the input is a `TruncatedInput` error carrying the
//! offset at which bytes ran out.

use crate::definitions::{registry, FieldDefinition};
use crate::error::{CodecError, CodecResult};
use crate::field_id::decode_header;
use crate::serializer::{MAX_DOUBLE_BYTE_LENGTH, MAX_LENGTH_VALUE, MAX_SINGLE_BYTE_LENGTH};
use crate::types::Value;

/// Consuming reader over an encoded byte sequence.
#[derive(Debug)]
pub struct BinaryParser<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> BinaryParser<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Current read position, for error context.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True once every byte has been consumed.
    pub fn is_end(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&self) -> CodecResult<u8> {
        self.bytes
            .get(self.offset)
            .copied()
            .ok_or(CodecError::TruncatedInput {
                offset: self.offset,
                needed: 1,
                remaining: 0,
            })
    }

    /// Consume exactly `n` bytes.
    pub fn read(&mut self, n: usize) -> CodecResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(CodecError::TruncatedInput {
                offset: self.offset,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.bytes[self.offset..self.offset + n];
        self.offset += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> CodecResult<u8> {
        Ok(self.read(1)?[0])
    }

    /// Read the framer's length prefix, inverting the encode arithmetic.
    pub fn read_length_prefix(&mut self) -> CodecResult<usize> {
        let first = usize::from(self.read_u8()?);
        let length = if first <= MAX_SINGLE_BYTE_LENGTH {
            first
        } else if first <= 240 {
            let second = usize::from(self.read_u8()?);
            (MAX_SINGLE_BYTE_LENGTH + 1) + ((first - 193) << 8) + second
        } else if first <= 254 {
            let second = usize::from(self.read_u8()?);
            let third = usize::from(self.read_u8()?);
            (MAX_DOUBLE_BYTE_LENGTH + 1) + ((first - 241) << 16) + (second << 8) + third
        } else {
            return Err(CodecError::FieldTooLarge {
                length: first,
                max: MAX_LENGTH_VALUE,
            });
        };
        if length > MAX_LENGTH_VALUE {
            return Err(CodecError::FieldTooLarge {
                length,
                max: MAX_LENGTH_VALUE,
            });
        }
        Ok(length)
    }

    /// Read a field header and resolve it against the registry.
    pub fn read_field(&mut self) -> CodecResult<&'static FieldDefinition> {
        let (candidates, consumed) = decode_header(&self.bytes[self.offset..]).map_err(
            |error| match error {
                // rebase the header codec's local offsets onto the stream
                CodecError::TruncatedInput {
                    offset,
                    needed,
                    remaining,
                } => CodecError::TruncatedInput {
                    offset: self.offset + offset,
                    needed,
                    remaining,
                },
                other => other,
            },
        )?;
        self.offset += consumed;
        registry().resolve_header(candidates)
    }

    /// Read the value payload for a resolved field.
    ///
    /// Variable-length fields consume their length prefix here; composites
    /// consume fields up to their boundary marker.
    pub fn read_field_value(&mut self, def: &FieldDefinition) -> CodecResult<Value> {
        let length = if def.is_variable_length {
            Some(self.read_length_prefix()?)
        } else {
            None
        };
        Value::from_parser(def.field_type, self, length)
    }
}
