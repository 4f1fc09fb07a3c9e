//! Checkout modal configuration.
//!
//! The browser opens the gateway's checkout modal itself; this module
//! assembles everything it needs in one place so the client can go from an
//! order-creation response straight to `new Razorpay(options).open()`
//! without further round trips.
//!
//! Responsibilities that necessarily stay in the browser:
//! - loading `script_url` (the URL never changes, so the loaded state can
//!   be cached process-wide instead of re-injecting per attempt)
//! - handling the gateway's own `payment.failed` callback, which is a
//!   distinct path from verification failure and must surface the
//!   gateway-provided error description
//! - on a network/backend failure AFTER the gateway reports success, the
//!   user has already paid: show a "contact support" message. Retrying
//!   verification with the same ids is safe (the check is idempotent);
//!   retrying order CREATION is not — it risks a double charge.

use serde::Serialize;

use crate::{models::product::Product, services::gateway::GatewayOrder};

/// Static URL of the gateway's browser checkout script.
pub const CHECKOUT_SCRIPT_URL: &str = "https://checkout.razorpay.com/v1/checkout.js";

/// Storefront name shown in the checkout modal.
const STOREFRONT_NAME: &str = "ArchiCanvas";

/// Everything the browser needs to open the gateway checkout modal and
/// relay the result back to this service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOptions {
    /// Publishable gateway key id (never the secret)
    pub key: String,

    /// Charge amount in minor units, from the gateway order
    pub amount: i64,

    /// Currency code, from the gateway order
    pub currency: String,

    /// Gateway order id the modal charges against
    pub order_id: String,

    /// Storefront display name
    pub name: String,

    /// Line shown under the storefront name in the modal
    pub description: String,

    /// Checkout script to load (once) before opening the modal
    pub script_url: String,

    /// Backend path the modal's success handler must POST the payment
    /// identifiers and signature to
    pub callback_path: String,
}

impl CheckoutOptions {
    /// Options for a single-item checkout. The success handler posts to
    /// `/payment/order` together with the product id.
    pub fn for_product(publishable_key: &str, order: &GatewayOrder, product: &Product) -> Self {
        Self {
            key: publishable_key.to_string(),
            amount: order.amount,
            currency: order.currency.clone(),
            order_id: order.id.clone(),
            name: STOREFRONT_NAME.to_string(),
            description: product.title.clone(),
            script_url: CHECKOUT_SCRIPT_URL.to_string(),
            callback_path: "/payment/order".to_string(),
        }
    }

    /// Options for a cart checkout. The success handler posts to
    /// `/payment/verify-cart` together with the original item list.
    pub fn for_cart(publishable_key: &str, order: &GatewayOrder, item_count: usize) -> Self {
        Self {
            key: publishable_key.to_string(),
            amount: order.amount,
            currency: order.currency.clone(),
            order_id: order.id.clone(),
            name: STOREFRONT_NAME.to_string(),
            description: format!("Cart of {item_count} artworks"),
            script_url: CHECKOUT_SCRIPT_URL.to_string(),
            callback_path: "/payment/verify-cart".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn gateway_order() -> GatewayOrder {
        GatewayOrder {
            id: "order_abc".to_string(),
            amount: 50000,
            currency: "INR".to_string(),
            receipt: Some("rcpt_1".to_string()),
            status: Some("created".to_string()),
        }
    }

    fn product() -> Product {
        Product {
            id: Uuid::new_v4(),
            title: "Sunset over Howrah".to_string(),
            photo: None,
            price_cents: 50000,
            seller_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn single_item_options_point_at_order_endpoint() {
        let options = CheckoutOptions::for_product("rzp_test_key", &gateway_order(), &product());
        assert_eq!(options.callback_path, "/payment/order");
        assert_eq!(options.order_id, "order_abc");
        assert_eq!(options.amount, 50000);
        assert_eq!(options.key, "rzp_test_key");
        assert_eq!(options.description, "Sunset over Howrah");
    }

    #[test]
    fn cart_options_point_at_cart_verification_endpoint() {
        let options = CheckoutOptions::for_cart("rzp_test_key", &gateway_order(), 3);
        assert_eq!(options.callback_path, "/payment/verify-cart");
        assert_eq!(options.description, "Cart of 3 artworks");
    }

    #[test]
    fn wire_format_is_camel_case() {
        let options = CheckoutOptions::for_cart("rzp_test_key", &gateway_order(), 1);
        let json = serde_json::to_value(&options).unwrap();
        assert!(json.get("orderId").is_some());
        assert!(json.get("scriptUrl").is_some());
        assert!(json.get("callbackPath").is_some());
    }
}
