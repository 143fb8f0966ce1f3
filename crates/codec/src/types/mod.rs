//! Primitive codecs and the typed value tree
//!
//! One module per wire type, each knowing how to move between its native
//! value, its external JSON form, and its byte payload independent of field
//! identity; plus the composite object/array codec and the tagged `Value`
//! union they recurse over.

pub mod account_id;
pub mod amount;
pub mod array;
pub mod blob;
pub mod currency;
pub mod hash;
pub mod object;
pub mod path_set;
pub mod uint;
pub mod value;
pub mod vector256;

pub use account_id::AccountId;
pub use amount::{Amount, IssuedAmount};
pub use array::{StArray, ARRAY_END_MARKER_BYTE};
pub use blob::Blob;
pub use currency::Currency;
pub use hash::{Hash128, Hash160, Hash256};
pub use object::{EncodeMode, StObject, OBJECT_END_MARKER_BYTE};
pub use path_set::{PathSet, PathStep};
pub use uint::{UInt16, UInt32, UInt64, UInt8};
pub use value::Value;
pub use vector256::Vector256;
