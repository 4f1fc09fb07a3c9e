//! Payment signature verification.
//!
//! The gateway signs each completed payment with
//! `HMAC-SHA256(secret, "<orderId>|<paymentId>")`, hex encoded. This is the
//! sole authenticity guarantee in the whole payment path: an order is never
//! persisted unless this check passes for the exact id pair it carries.
//! Whoever controls the secret can forge orders, so the secret never
//! leaves the server.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verify a gateway payment signature.
///
/// Recomputes the expected HMAC over `order_id|payment_id` and compares it
/// against the candidate in constant time (`Mac::verify_slice`).
///
/// Returns `false` on ANY mismatch — wrong bytes, wrong length, malformed
/// hex — and never panics. A blank secret yields a mac no real gateway
/// could have produced, so it also verifies nothing.
pub fn verify_signature(order_id: &str, payment_id: &str, secret: &str, candidate: &str) -> bool {
    let Ok(candidate_bytes) = hex::decode(candidate) else {
        return false;
    };

    // HMAC accepts keys of any length; new_from_slice cannot actually fail
    // for SHA-256, but there is no reason to panic if it ever does.
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());

    mac.verify_slice(&candidate_bytes).is_ok()
}

#[cfg(test)]
pub fn sign(order_id: &str, payment_id: &str, secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(format!("{order_id}|{payment_id}").as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret";

    #[test]
    fn accepts_authentic_signature() {
        let signature = sign("order_abc", "pay_xyz", SECRET);
        assert!(verify_signature("order_abc", "pay_xyz", SECRET, &signature));
    }

    #[test]
    fn rejects_single_bit_mutation() {
        let signature = sign("order_abc", "pay_xyz", SECRET);
        // Flip one bit in the first hex digit.
        let mut bytes = hex::decode(&signature).unwrap();
        bytes[0] ^= 0x01;
        let mutated = hex::encode(bytes);
        assert!(!verify_signature("order_abc", "pay_xyz", SECRET, &mutated));
    }

    #[test]
    fn rejects_signature_for_different_ids() {
        let signature = sign("order_abc", "pay_xyz", SECRET);
        assert!(!verify_signature("order_abc", "pay_other", SECRET, &signature));
        assert!(!verify_signature("order_other", "pay_xyz", SECRET, &signature));
    }

    #[test]
    fn rejects_wrong_secret() {
        let signature = sign("order_abc", "pay_xyz", SECRET);
        assert!(!verify_signature("order_abc", "pay_xyz", "other_secret", &signature));
    }

    #[test]
    fn rejects_truncated_signature() {
        let signature = sign("order_abc", "pay_xyz", SECRET);
        assert!(!verify_signature("order_abc", "pay_xyz", SECRET, &signature[..32]));
    }

    #[test]
    fn rejects_garbage_without_panicking() {
        assert!(!verify_signature("order_abc", "pay_xyz", SECRET, "deadbeef"));
        assert!(!verify_signature("order_abc", "pay_xyz", SECRET, "not-hex-at-all"));
        assert!(!verify_signature("order_abc", "pay_xyz", SECRET, ""));
    }

    #[test]
    fn blank_secret_verifies_nothing() {
        // A missing secret must never be mistaken for a successful check.
        let signature = sign("order_abc", "pay_xyz", SECRET);
        assert!(!verify_signature("order_abc", "pay_xyz", "", &signature));
    }
}
