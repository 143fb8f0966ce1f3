//! Meridian Models - transaction models for the Meridian Ledger
//!
//! Typed transaction records that serialize to the flat wire-keyed mapping
//! the canonical codec consumes, plus signing-payload and transaction-id
//! helpers. Structural only: business-rule validation of field semantics
//! (who may pay whom, limit sanity) is out of scope here.

pub mod amounts;
pub mod common;
pub mod error;
pub mod flags;
pub mod offer_create;
pub mod payment;
pub mod signer_list_set;
pub mod signing;
pub mod transaction_type;
pub mod trust_set;

pub use amounts::{Amount, IssuedCurrencyAmount};
pub use common::{
    Memo, MemoWrapper, PathStep, Signer, SignerEntry, SignerEntryWrapper, SignerWrapper,
    TransactionCommon,
};
pub use error::{ModelError, ModelResult};
pub use flags::{OfferCreateFlags, PaymentFlags, TrustSetFlags};
pub use offer_create::OfferCreate;
pub use payment::Payment;
pub use signer_list_set::SignerListSet;
pub use signing::{
    multisign_payload, signing_payload, transaction_id, MULTISIGN_PREFIX, SINGLE_SIGN_PREFIX,
    TRANSACTION_ID_PREFIX,
};
pub use transaction_type::TransactionType;
pub use trust_set::TrustSet;
