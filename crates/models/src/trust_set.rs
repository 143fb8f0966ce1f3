//! TrustSet transaction

use serde::{Deserialize, Serialize};

use crate::amounts::Amount;
use crate::common::TransactionCommon;
use crate::transaction_type::TransactionType;

/// Creates or modifies a trust line to an issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrustSet {
    #[serde(flatten)]
    pub common: TransactionCommon,
    /// Limit of the trust line; always an issued amount.
    pub limit_amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_in: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_out: Option<u32>,
}

impl TrustSet {
    pub fn new(account: impl Into<String>, limit_amount: Amount) -> Self {
        Self {
            common: TransactionCommon::new(account, TransactionType::TrustSet),
            limit_amount,
            quality_in: None,
            quality_out: None,
        }
    }
}
