//! SignerListSet transaction

use serde::{Deserialize, Serialize};

use crate::common::{SignerEntryWrapper, TransactionCommon};
use crate::transaction_type::TransactionType;

/// Replaces an account's signer list, or deletes it when the quorum is zero
/// and no entries are given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignerListSet {
    #[serde(flatten)]
    pub common: TransactionCommon,
    pub signer_quorum: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_entries: Option<Vec<SignerEntryWrapper>>,
}

impl SignerListSet {
    pub fn new(account: impl Into<String>, signer_quorum: u32) -> Self {
        Self {
            common: TransactionCommon::new(account, TransactionType::SignerListSet),
            signer_quorum,
            signer_entries: None,
        }
    }
}
