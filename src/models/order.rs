//! Order data models and payment API request/response types.
//!
//! This module defines:
//! - `Order`: Database entity recording a verified purchase
//! - Request types for the single-item and cart checkout endpoints
//! - Response envelopes returned to clients
//!
//! Wire JSON is camelCase (the browser frontend expects `razorpayOrderId`
//! and friends); database rows are snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::product::Product;
use crate::services::checkout::CheckoutOptions;
use crate::services::gateway::GatewayOrder;

/// Represents an order record from the database.
///
/// # Lifecycle
///
/// An order is created exactly once, at successful signature verification,
/// and is immutable thereafter. It is never persisted with an unverified
/// signature, and its `amount_cents` always equals the product's stored
/// price at verification time — never a client-supplied value.
///
/// # Database Table
///
/// Maps to the `orders` table. `(gateway_payment_id, product_id)` is
/// unique: re-verifying the same payment cannot create a duplicate row,
/// while a cart checkout may legally fan out N rows sharing one payment id.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier for this order
    pub id: Uuid,

    /// The product purchased
    pub product_id: Uuid,

    /// The authenticated user who paid
    pub buyer_id: Uuid,

    /// The product's owner, captured at verification time
    ///
    /// Denormalized so later product changes do not retroactively alter
    /// historical attribution.
    pub seller_id: Uuid,

    /// Charge amount in minor units (paise), equal to the product's
    /// stored price at verification time
    pub amount_cents: i64,

    /// Currency code (ISO 4217); fixed to INR system-wide
    pub currency: String,

    /// Payment status
    ///
    /// - "succeeded": the only state this service ever writes
    /// - "pending" / "failed": allowed by the schema for future partial-order support
    pub payment_status: String,

    /// Gateway order id, kept for audit/dispute resolution
    pub gateway_order_id: String,

    /// Gateway payment id, kept for audit/dispute resolution
    pub gateway_payment_id: String,

    /// Gateway signature that authenticated this purchase
    pub gateway_signature: String,

    /// When the order was recorded
    pub created_at: DateTime<Utc>,
}

/// Request to start a single-item checkout.
///
/// # JSON Example
///
/// ```json
/// {
///   "productId": "550e8400-e29b-41d4-a716-446655440000",
///   "idempotencyKey": "attempt-2025-001"
/// }
/// ```
///
/// The charge amount is NOT part of the request: it is derived from the
/// product's stored price.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentRequest {
    /// Product to purchase
    pub product_id: Uuid,

    /// Optional client-generated key, threaded into the gateway receipt so
    /// retries of a network-failed creation call are traceable
    pub idempotency_key: Option<String>,
}

/// Request to verify a completed single-item payment and record the order.
///
/// # JSON Example
///
/// ```json
/// {
///   "productId": "550e8400-e29b-41d4-a716-446655440000",
///   "razorpayOrderId": "order_abc",
///   "razorpayPaymentId": "pay_xyz",
///   "razorpaySignature": "3f1a..."
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_id: Uuid,
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// One line item in a cart request.
///
/// Carries only the product reference. Earlier clients sent a `price`
/// field here; it is deliberately ignored — the aggregate charge is
/// recomputed from stored prices server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product referenced by this line item (`_id` accepted for older clients)
    #[serde(alias = "_id")]
    pub product_id: Uuid,
}

/// Request to start a cart checkout (one aggregate charge for N items).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessCartRequest {
    pub items: Vec<CartItem>,

    /// Optional client-generated key, threaded into the gateway receipt
    pub idempotency_key: Option<String>,
}

/// Request to verify a completed cart payment and record one order per item.
///
/// A single signature authenticates the aggregate charge: one payment, one
/// signature, N persisted orders.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCartRequest {
    pub items: Vec<CartItem>,
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// How much of a cart was actually persisted at verification time.
///
/// Products can disappear between checkout creation and verification.
/// The charge has already happened by then, so surviving items are
/// persisted best-effort and the dropped ones are reported instead of
/// being silently swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CartOutcome {
    /// Every line item produced an order
    Complete,
    /// Some line items were skipped (their ids are in `skippedProducts`)
    Partial,
    /// No line item could be resolved; nothing was persisted
    None,
}

/// Response for `POST /payment/process`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentResponse {
    pub success: bool,
    /// The freshly minted gateway order (not yet an application order)
    pub order: GatewayOrder,
    /// Product snapshot so the client can render price/title without a
    /// second round trip
    pub product: Product,
    /// Everything the browser controller needs to open the gateway modal
    pub checkout: CheckoutOptions,
}

/// Response for `POST /payment/order`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order: Order,
}

/// Response for `POST /payment/process-cart`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessCartResponse {
    pub success: bool,
    pub order: GatewayOrder,
    pub checkout: CheckoutOptions,
}

/// Response for `POST /payment/verify-cart`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCartResponse {
    pub success: bool,
    pub orders: Vec<Order>,
    /// Line items whose product vanished before verification
    pub skipped_products: Vec<Uuid>,
    pub outcome: CartOutcome,
}

/// Response for `GET /payment/stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatsResponse {
    pub success: bool,
    /// Orders where the authenticated user is the buyer
    pub buyer_count: i64,
    /// Orders where the authenticated user is the seller
    pub seller_count: i64,
}

/// Response for `GET /payment/my-artworks`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedArtworksResponse {
    pub success: bool,
    pub artworks: Vec<Product>,
}

/// One row of a user's purchase history: the order joined with product
/// and seller display info, so the profile page needs no extra lookups.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryEntry {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_title: String,
    pub product_photo: Option<String>,
    pub amount_cents: i64,
    pub currency: String,
    pub payment_status: String,
    pub seller_name: String,
    pub seller_email: String,
    pub created_at: DateTime<Utc>,
}

/// Response for `GET /payment/my-orders`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyOrdersResponse {
    pub success: bool,
    pub orders: Vec<OrderHistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verify_request_uses_camel_case_wire_names() {
        let body = json!({
            "productId": "550e8400-e29b-41d4-a716-446655440000",
            "razorpayOrderId": "order_abc",
            "razorpayPaymentId": "pay_xyz",
            "razorpaySignature": "deadbeef"
        });
        let request: CreateOrderRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.razorpay_order_id, "order_abc");
        assert_eq!(request.razorpay_payment_id, "pay_xyz");
    }

    #[test]
    fn cart_item_accepts_legacy_underscore_id() {
        let body = json!({ "_id": "550e8400-e29b-41d4-a716-446655440000" });
        let item: CartItem = serde_json::from_value(body).unwrap();
        assert_eq!(
            item.product_id.to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn cart_item_ignores_client_supplied_price() {
        // Older clients send a price; it must not be part of the contract.
        let body = json!({
            "productId": "550e8400-e29b-41d4-a716-446655440000",
            "price": 999999
        });
        let item: CartItem = serde_json::from_value(body).unwrap();
        assert_eq!(
            item.product_id.to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn cart_outcome_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CartOutcome::Partial).unwrap(),
            "\"partial\""
        );
        assert_eq!(serde_json::to_string(&CartOutcome::None).unwrap(), "\"none\"");
    }
}
