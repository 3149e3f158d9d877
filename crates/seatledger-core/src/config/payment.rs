//! Payment gateway configuration.

use serde::{Deserialize, Serialize};

/// Payment gateway credentials and endpoint.
///
/// The key id/secret pair is issued by the payment processor and is
/// opaque to this subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Gateway key id (order-creation auth username).
    #[serde(default)]
    pub key_id: String,
    /// Shared secret used for order-creation auth and signature HMAC.
    #[serde(default)]
    pub key_secret: String,
    /// Gateway REST base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Order currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            key_secret: String::new(),
            base_url: default_base_url(),
            currency: default_currency(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.razorpay.com/v1".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}
