//! Payment transaction

use serde::{Deserialize, Serialize};

use crate::amounts::Amount;
use crate::common::{PathStep, TransactionCommon};
use crate::transaction_type::TransactionType;

/// Moves value from one account to another, directly or along paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Payment {
    #[serde(flatten)]
    pub common: TransactionCommon,
    pub amount: Amount,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<u32>,
    #[serde(rename = "InvoiceID", skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<Vec<PathStep>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_max: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliver_min: Option<Amount>,
}

impl Payment {
    pub fn new(
        account: impl Into<String>,
        destination: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            common: TransactionCommon::new(account, TransactionType::Payment),
            amount,
            destination: destination.into(),
            destination_tag: None,
            invoice_id: None,
            paths: None,
            send_max: None,
            deliver_min: None,
        }
    }
}
