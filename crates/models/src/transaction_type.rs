//! Transaction type catalog
//!
//! Mirrors the `transactionTypes` table in the codec's definitions document;
//! the wire name is the enum variant name.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum TransactionType {
    Payment,
    EscrowCreate,
    EscrowFinish,
    AccountSet,
    EscrowCancel,
    SetRegularKey,
    OfferCreate,
    OfferCancel,
    TicketCreate,
    SignerListSet,
    PaymentChannelCreate,
    PaymentChannelFund,
    PaymentChannelClaim,
    CheckCreate,
    CheckCash,
    CheckCancel,
    DepositPreauth,
    TrustSet,
    AccountDelete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name() {
        assert_eq!(TransactionType::Payment.to_string(), "Payment");
        assert_eq!(
            "SignerListSet".parse::<TransactionType>().unwrap(),
            TransactionType::SignerListSet
        );
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert!("NotATransaction".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&TransactionType::TrustSet).unwrap();
        assert_eq!(json, "\"TrustSet\"");
    }

    #[test]
    fn test_every_name_is_in_the_codec_catalog() {
        for name in [
            "Payment",
            "EscrowCreate",
            "EscrowFinish",
            "AccountSet",
            "EscrowCancel",
            "SetRegularKey",
            "OfferCreate",
            "OfferCancel",
            "TicketCreate",
            "SignerListSet",
            "PaymentChannelCreate",
            "PaymentChannelFund",
            "PaymentChannelClaim",
            "CheckCreate",
            "CheckCash",
            "CheckCancel",
            "DepositPreauth",
            "TrustSet",
            "AccountDelete",
        ] {
            assert!(
                meridian_codec::registry().transaction_type_code(name).is_some(),
                "{name} missing from the definitions table"
            );
            assert!(name.parse::<TransactionType>().is_ok());
        }
    }
}
