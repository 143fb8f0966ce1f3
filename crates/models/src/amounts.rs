//! Amount models
//!
//! The two-case union the codec's Amount type expects: a native magnitude as
//! a decimal string, or an issued-currency triple. The shapes are disjoint
//! (string vs object), so an untagged serde union resolves them without
//! ambiguity; unknown keys on the triple are rejected at the boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Issued(IssuedCurrencyAmount),
    Native(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssuedCurrencyAmount {
    pub currency: String,
    pub issuer: String,
    pub value: String,
}

impl Amount {
    /// Native amount from a drops magnitude.
    pub fn native(drops: u64) -> Self {
        Self::Native(drops.to_string())
    }

    /// Issued amount from its triple.
    pub fn issued(
        currency: impl Into<String>,
        issuer: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Issued(IssuedCurrencyAmount {
            currency: currency.into(),
            issuer: issuer.into(),
            value: value.into(),
        })
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_native_is_a_bare_string() {
        let amount = Amount::native(25_000_000);
        assert_eq!(serde_json::to_value(&amount).unwrap(), json!("25000000"));
    }

    #[test]
    fn test_issued_is_the_triple() {
        let amount = Amount::issued("USD", "0A20B3C85F482532A9578DBB3950B85CA06594D1", "1.5");
        assert_eq!(
            serde_json::to_value(&amount).unwrap(),
            json!({
                "currency": "USD",
                "issuer": "0A20B3C85F482532A9578DBB3950B85CA06594D1",
                "value": "1.5",
            })
        );
    }

    #[test]
    fn test_deserialize_disambiguates() {
        let native: Amount = serde_json::from_value(json!("42")).unwrap();
        assert!(native.is_native());
        let issued: Amount = serde_json::from_value(json!({
            "currency": "EUR",
            "issuer": "0A20B3C85F482532A9578DBB3950B85CA06594D1",
            "value": "9",
        }))
        .unwrap();
        assert!(!issued.is_native());
    }

    #[test]
    fn test_ambiguous_shape_rejected() {
        let result: Result<Amount, _> = serde_json::from_value(json!({
            "currency": "EUR",
            "issuer": "0A20B3C85F482532A9578DBB3950B85CA06594D1",
            "value": "9",
            "drops": "42",
        }));
        assert!(result.is_err());
    }
}
