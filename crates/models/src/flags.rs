//! Transaction flag records
//!
//! Fixed-shape records of named booleans per transaction type, converting
//! to and from the packed `Flags` UInt32 by bit-test over the declared flag
//! constants. The JSON form is the packed integer; unknown bits are rejected
//! when unpacking.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

pub const TF_NO_DIRECT_PATHS: u32 = 0x0001_0000;
pub const TF_PARTIAL_PAYMENT: u32 = 0x0002_0000;
pub const TF_LIMIT_QUALITY: u32 = 0x0004_0000;

pub const TF_SET_AUTH: u32 = 0x0001_0000;
pub const TF_SET_NO_RELAY: u32 = 0x0002_0000;
pub const TF_CLEAR_NO_RELAY: u32 = 0x0004_0000;
pub const TF_SET_FREEZE: u32 = 0x0010_0000;
pub const TF_CLEAR_FREEZE: u32 = 0x0020_0000;

pub const TF_PASSIVE: u32 = 0x0001_0000;
pub const TF_IMMEDIATE_OR_CANCEL: u32 = 0x0002_0000;
pub const TF_FILL_OR_KILL: u32 = 0x0004_0000;
pub const TF_SELL: u32 = 0x0008_0000;

macro_rules! flag_record {
    ($name:ident { $($field:ident => $bit:expr),+ $(,)? }) => {
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
        )]
        #[serde(try_from = "u32", into = "u32")]
        pub struct $name {
            $(pub $field: bool,)+
        }

        impl $name {
            const MASK: u32 = $($bit)|+;

            /// The packed `Flags` word.
            pub fn bits(&self) -> u32 {
                let mut bits = 0;
                $(if self.$field { bits |= $bit; })+
                bits
            }
        }

        impl TryFrom<u32> for $name {
            type Error = ModelError;

            fn try_from(bits: u32) -> Result<Self, Self::Error> {
                if bits & !Self::MASK != 0 {
                    return Err(ModelError::UnknownFlagBits { bits });
                }
                Ok(Self {
                    $($field: bits & $bit != 0,)+
                })
            }
        }

        impl From<$name> for u32 {
            fn from(flags: $name) -> Self {
                flags.bits()
            }
        }
    };
}

flag_record!(PaymentFlags {
    no_direct_paths => TF_NO_DIRECT_PATHS,
    partial_payment => TF_PARTIAL_PAYMENT,
    limit_quality => TF_LIMIT_QUALITY,
});

flag_record!(TrustSetFlags {
    set_auth => TF_SET_AUTH,
    set_no_relay => TF_SET_NO_RELAY,
    clear_no_relay => TF_CLEAR_NO_RELAY,
    set_freeze => TF_SET_FREEZE,
    clear_freeze => TF_CLEAR_FREEZE,
});

flag_record!(OfferCreateFlags {
    passive => TF_PASSIVE,
    immediate_or_cancel => TF_IMMEDIATE_OR_CANCEL,
    fill_or_kill => TF_FILL_OR_KILL,
    sell => TF_SELL,
});
