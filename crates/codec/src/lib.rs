//! Meridian Codec - canonical binary codec for the Meridian Ledger
//!
//! Converts a typed, nested field-value structure (a transaction or ledger
//! object) into the network's canonical binary format and back. Signatures
//! and identifiers are computed over this encoding, so it is deterministic
//! and bit-exact: canonical field order is recomputed from the registry on
//! every encode, and `decode(encode(v))` reproduces `v` field for field.
//!
//! The library is pure computation over in-memory bytes: no I/O, no hidden
//! state beyond the load-once registry, safe for unsynchronized concurrent
//! use.

pub mod codec;
pub mod definitions;
pub mod error;
pub mod field_id;
pub mod parser;
pub mod serializer;
pub mod types;

pub use codec::{decode, encode, encode_for_multisigning, encode_for_signing};
pub use definitions::{registry, FieldDefinition, FieldType, Registry};
pub use error::{CodecError, CodecResult};
