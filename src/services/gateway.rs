//! Payment gateway client.
//!
//! Thin wrapper over the Razorpay orders API: it mints a gateway order for
//! a given amount and hands back the gateway's identifiers. The client-side
//! checkout modal is opened against that order id; money movement happens
//! entirely on the gateway's side.
//!
//! Order creation is NOT retried automatically. The gateway offers no
//! idempotency guarantee here, so a blind retry of a network-failed call
//! could mint (and charge) a second order.

use serde::{Deserialize, Serialize};

use crate::{config::Config, error::AppError};

/// A gateway order, as returned by the orders API.
///
/// Ephemeral: referenced by id during checkout, never persisted directly.
/// Only its id (and the resulting payment id) end up on the application's
/// order records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayOrder {
    /// Gateway-assigned order id (e.g. `order_abc123`)
    pub id: String,

    /// Charge amount in minor units, echoing the request
    pub amount: i64,

    /// Currency code, echoing the request
    pub currency: String,

    /// Receipt label, echoing the request
    pub receipt: Option<String>,

    /// Gateway-side order status (e.g. `created`)
    pub status: Option<String>,
}

/// Request body for the gateway's order-creation endpoint.
#[derive(Debug, Serialize)]
struct CreateGatewayOrderBody<'a> {
    /// Amount in minor units (paise)
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
}

/// HTTP client for the payment gateway.
///
/// Credentials are validated at startup by [`Config::from_env`]; by the
/// time this client exists, both keys are known to be non-blank.
#[derive(Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
    key_id: String,
    key_secret: String,
}

impl GatewayClient {
    /// Build a gateway client from the application configuration.
    ///
    /// The underlying HTTP client carries a 10 second timeout so a hung
    /// gateway surfaces as a `Gateway` error instead of a stuck request.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to build gateway HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.gateway_base_url.trim_end_matches('/').to_string(),
            key_id: config.razorpay_key_id.clone(),
            key_secret: config.razorpay_key_secret.clone(),
        })
    }

    /// Create a gateway order for `amount_cents` minor units.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Gateway` (HTTP 502 to the client) if the remote
    /// call fails, times out, or returns a non-success status. The caller
    /// decides whether to surface or abort; nothing is retried here.
    pub async fn create_order(
        &self,
        amount_cents: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, AppError> {
        let response = self
            .http
            .post(format!("{}/v1/orders", self.base_url))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&CreateGatewayOrderBody { amount: amount_cents, currency, receipt })
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("order creation request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Gateway(format!(
                "order creation returned {status}: {body}"
            )));
        }

        response
            .json::<GatewayOrder>()
            .await
            .map_err(|e| AppError::Gateway(format!("malformed order creation response: {e}")))
    }

    /// The publishable key id.
    ///
    /// Safe to hand to browsers; it identifies the merchant to the
    /// checkout modal. The secret key has no accessor that crosses an
    /// HTTP boundary.
    pub fn publishable_key(&self) -> &str {
        &self.key_id
    }

    /// The shared secret, for signature verification only.
    pub(crate) fn secret(&self) -> &str {
        &self.key_secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        // Deserializing from a map mirrors how envy builds the struct.
        envy::from_iter::<_, Config>(vec![
            ("DATABASE_URL".to_string(), "postgres://localhost/test".to_string()),
            ("RAZORPAY_KEY_ID".to_string(), "rzp_test_key".to_string()),
            ("RAZORPAY_KEY_SECRET".to_string(), "rzp_test_secret".to_string()),
            ("GATEWAY_BASE_URL".to_string(), "https://gateway.example.com/".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = GatewayClient::new(&test_config()).unwrap();
        assert_eq!(client.base_url, "https://gateway.example.com");
    }

    #[test]
    fn publishable_key_is_the_key_id_only() {
        let client = GatewayClient::new(&test_config()).unwrap();
        assert_eq!(client.publishable_key(), "rzp_test_key");
    }

    #[test]
    fn order_body_serializes_gateway_field_names() {
        let body = CreateGatewayOrderBody { amount: 50000, currency: "INR", receipt: "rcpt_1" };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["amount"], 50000);
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["receipt"], "rcpt_1");
    }

    #[test]
    fn gateway_order_parses_api_response() {
        let order: GatewayOrder = serde_json::from_str(
            r#"{"id":"order_abc","entity":"order","amount":50000,"currency":"INR",
                "receipt":"rcpt_1","status":"created","attempts":0}"#,
        )
        .unwrap();
        assert_eq!(order.id, "order_abc");
        assert_eq!(order.amount, 50000);
        assert_eq!(order.status.as_deref(), Some("created"));
    }
}
