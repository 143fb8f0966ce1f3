//! Fields shared by every transaction
//!
//! `TransactionCommon` is flattened into each concrete transaction, so the
//! serialized JSON is the flat wire-keyed mapping the codec consumes.
//! Array-valued fields hold single-key wrapper entries, matching the
//! codec's array element contract.

use serde::{Deserialize, Serialize};

use crate::amounts::Amount;
use crate::transaction_type::TransactionType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionCommon {
    /// Raw 20-byte account identifier, hex form.
    pub account: String,
    pub transaction_type: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_ledger_sequence: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_tag: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memos: Option<Vec<MemoWrapper>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signers: Option<Vec<SignerWrapper>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_pub_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_signature: Option<String>,
}

impl TransactionCommon {
    pub fn new(account: impl Into<String>, transaction_type: TransactionType) -> Self {
        Self {
            account: account.into(),
            transaction_type,
            fee: None,
            sequence: None,
            flags: None,
            last_ledger_sequence: None,
            source_tag: None,
            memos: None,
            signers: None,
            signing_pub_key: None,
            txn_signature: None,
        }
    }
}

/// Arbitrary annotation attached to a transaction; all fields are hex.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Memo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoWrapper {
    #[serde(rename = "Memo")]
    pub memo: Memo,
}

/// One signature contributed to a multi-signed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Signer {
    pub account: String,
    pub signing_pub_key: String,
    pub txn_signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerWrapper {
    #[serde(rename = "Signer")]
    pub signer: Signer,
}

/// One entry of an account's signer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignerEntry {
    pub account: String,
    pub signer_weight: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerEntryWrapper {
    #[serde(rename = "SignerEntry")]
    pub signer_entry: SignerEntry,
}

/// One hop of a payment path, lowercase-keyed per the codec's path contract.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathStep {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}
