//! Signing payloads and transaction identifiers
//!
//! The byte sequences handed to the external signing collaborator, and the
//! identifier derived from a fully-signed transaction. Each payload starts
//! with a pinned 4-byte domain prefix so signatures and hashes over
//! different artifact kinds can never collide.

use serde::Serialize;
use sha2::{Digest, Sha512};

use crate::error::{ModelError, ModelResult};

/// Prefix of a single-signature signing payload ("MTX\0").
pub const SINGLE_SIGN_PREFIX: [u8; 4] = [0x4D, 0x54, 0x58, 0x00];
/// Prefix of a multi-signature signing payload ("MMT\0").
pub const MULTISIGN_PREFIX: [u8; 4] = [0x4D, 0x4D, 0x54, 0x00];
/// Prefix hashed into a signed transaction's identifier ("MXN\0").
pub const TRANSACTION_ID_PREFIX: [u8; 4] = [0x4D, 0x58, 0x4E, 0x00];

fn to_wire_json<T: Serialize>(transaction: &T) -> ModelResult<serde_json::Value> {
    serde_json::to_value(transaction).map_err(|e| ModelError::InvalidJson(e.to_string()))
}

/// The bytes a single signer signs: domain prefix followed by the
/// signing-mode encoding.
pub fn signing_payload<T: Serialize>(transaction: &T) -> ModelResult<Vec<u8>> {
    let encoded = meridian_codec::encode_for_signing(&to_wire_json(transaction)?)?;
    let mut payload = Vec::with_capacity(4 + encoded.len());
    payload.extend_from_slice(&SINGLE_SIGN_PREFIX);
    payload.extend_from_slice(&encoded);
    Ok(payload)
}

/// The bytes one participant of a multi-signature signs; `signer_account`
/// is the signer's raw identifier in hex form and lands at the end of the
/// payload.
pub fn multisign_payload<T: Serialize>(
    transaction: &T,
    signer_account: &str,
) -> ModelResult<Vec<u8>> {
    let encoded =
        meridian_codec::encode_for_multisigning(&to_wire_json(transaction)?, signer_account)?;
    let mut payload = Vec::with_capacity(4 + encoded.len());
    payload.extend_from_slice(&MULTISIGN_PREFIX);
    payload.extend_from_slice(&encoded);
    Ok(payload)
}

/// Identifier of a signed transaction: the first half of SHA-512 over the
/// id prefix and the full canonical encoding, as uppercase hex.
pub fn transaction_id<T: Serialize>(transaction: &T) -> ModelResult<String> {
    let encoded = meridian_codec::encode(&to_wire_json(transaction)?)?;
    let mut hasher = Sha512::new();
    hasher.update(TRANSACTION_ID_PREFIX);
    hasher.update(&encoded);
    let digest = hasher.finalize();
    Ok(hex::encode_upper(&digest[..32]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amounts::Amount;
    use crate::payment::Payment;

    fn sample() -> Payment {
        let mut payment = Payment::new(
            "5E7B112523F68D2F5E879DB4EAC51C6698A69304",
            "B5F762798A53D543A014CAF8B297CFF8F2F937E8",
            Amount::native(1_000),
        );
        payment.common.fee = Some(Amount::native(10));
        payment.common.sequence = Some(1);
        payment
    }

    #[test]
    fn test_signing_payload_prefix() {
        let payload = signing_payload(&sample()).unwrap();
        assert_eq!(&payload[..4], &SINGLE_SIGN_PREFIX);
    }

    #[test]
    fn test_multisign_payload_ends_with_signer() {
        let signer = "0A20B3C85F482532A9578DBB3950B85CA06594D1";
        let payload = multisign_payload(&sample(), signer).unwrap();
        assert_eq!(&payload[..4], &MULTISIGN_PREFIX);
        assert_eq!(&payload[payload.len() - 20..], &hex::decode(signer).unwrap()[..]);
    }

    #[test]
    fn test_transaction_id_is_stable_uppercase_hex() {
        let first = transaction_id(&sample()).unwrap();
        let second = transaction_id(&sample()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_lowercase()));
    }

    #[test]
    fn test_payloads_differ_by_domain() {
        let signing = signing_payload(&sample()).unwrap();
        let id = transaction_id(&sample()).unwrap();
        // same transaction, different artifacts
        assert_ne!(hex::encode_upper(&signing), id);
    }
}
