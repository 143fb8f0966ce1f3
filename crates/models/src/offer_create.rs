//! OfferCreate transaction

use serde::{Deserialize, Serialize};

use crate::amounts::Amount;
use crate::common::TransactionCommon;
use crate::transaction_type::TransactionType;

/// Places an exchange offer on the ledger's order book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferCreate {
    #[serde(flatten)]
    pub common: TransactionCommon,
    pub taker_gets: Amount,
    pub taker_pays: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_sequence: Option<u32>,
}

impl OfferCreate {
    pub fn new(account: impl Into<String>, taker_gets: Amount, taker_pays: Amount) -> Self {
        Self {
            common: TransactionCommon::new(account, TransactionType::OfferCreate),
            taker_gets,
            taker_pays,
            expiration: None,
            offer_sequence: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape() {
        let offer = OfferCreate::new(
            "5E7B112523F68D2F5E879DB4EAC51C6698A69304",
            Amount::native(6_000_000),
            Amount::issued("GKO", "0A20B3C85F482532A9578DBB3950B85CA06594D1", "2"),
        );
        assert_eq!(
            serde_json::to_value(&offer).unwrap(),
            json!({
                "Account": "5E7B112523F68D2F5E879DB4EAC51C6698A69304",
                "TransactionType": "OfferCreate",
                "TakerGets": "6000000",
                "TakerPays": {
                    "currency": "GKO",
                    "issuer": "0A20B3C85F482532A9578DBB3950B85CA06594D1",
                    "value": "2",
                },
            })
        );
    }
}
