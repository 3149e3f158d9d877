//! Payment signature verification.
//!
//! The gateway signs `order_id + "|" + payment_id` with HMAC-SHA256 over
//! the shared key secret and sends the hex digest alongside the payment.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verifies gateway payment signatures.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    secret: String,
}

impl SignatureVerifier {
    /// Create a verifier over the shared gateway secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Check a signature against the expected HMAC.
    ///
    /// Returns `false` on any mismatch (malformed hex, wrong digest,
    /// wrong secret) and never errors; a mismatch is a normal outcome.
    /// Comparison is constant-time via `Mac::verify_slice`.
    pub fn verify(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        let Ok(mut mac) = HmacSha256::new_from_slice(self.secret.as_bytes()) else {
            return false;
        };
        mac.update(signed_payload(order_id, payment_id).as_bytes());

        let Ok(sig_bytes) = hex::decode(signature) else {
            return false;
        };
        mac.verify_slice(&sig_bytes).is_ok()
    }

    /// Compute the hex signature for a payload. Used by tests and
    /// local tooling; the production signer is the gateway itself.
    pub fn sign(&self, order_id: &str, payment_id: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signed_payload(order_id, payment_id).as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

fn signed_payload(order_id: &str, payment_id: &str) -> String {
    format!("{order_id}|{payment_id}")
}
