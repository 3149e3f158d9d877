//! Payment gateway REST adapter (order creation).
//!
//! Talks to the processor's REST API directly, no SDK dependency.

use serde::{Deserialize, Serialize};

use seatledger_core::config::payment::PaymentConfig;
use seatledger_core::error::AppError;
use seatledger_core::result::AppResult;

/// A gateway order, created before the client-side checkout runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Gateway order id.
    pub id: String,
    /// Amount in minor units (paise).
    pub amount: i64,
    /// Currency code.
    pub currency: String,
}

/// REST client for the payment gateway.
#[derive(Debug, Clone)]
pub struct PaymentGatewayClient {
    http: reqwest::Client,
    config: PaymentConfig,
}

impl PaymentGatewayClient {
    /// Create a client from gateway configuration.
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create an order for `amount_minor_units`.
    pub async fn create_order(&self, amount_minor_units: i64) -> AppResult<Order> {
        let url = format!("{}/orders", self.config.base_url.trim_end_matches('/'));
        let resp: serde_json::Value = self
            .http
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&serde_json::json!({
                "amount": amount_minor_units,
                "currency": self.config.currency,
            }))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    seatledger_core::error::ErrorKind::ExternalService,
                    format!("Gateway order creation failed: {e}"),
                    e,
                )
            })?
            .json()
            .await
            .map_err(|e| {
                AppError::with_source(
                    seatledger_core::error::ErrorKind::ExternalService,
                    format!("Gateway order response unreadable: {e}"),
                    e,
                )
            })?;

        let id = resp["id"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| AppError::external_service(format!("Gateway order missing id: {resp}")))?;
        let amount = resp["amount"].as_i64().unwrap_or(amount_minor_units);
        let currency = resp["currency"]
            .as_str()
            .unwrap_or(&self.config.currency)
            .to_string();

        Ok(Order {
            id,
            amount,
            currency,
        })
    }
}
