//! Checkout and verification HTTP handlers.
//!
//! This module implements the payment API endpoints:
//! - GET  /payment/razorpaykey  - Publishable gateway key for the browser
//! - POST /payment/process      - Start a single-item checkout
//! - POST /payment/order        - Verify a single-item payment and record the order
//! - POST /payment/process-cart - Start a cart checkout (one aggregate charge)
//! - POST /payment/verify-cart  - Verify a cart payment and record one order per item
//!
//! All routes sit behind the bearer-token auth middleware; the buyer is
//! always the authenticated user.

use crate::{
    AppState,
    error::AppError,
    middleware::auth::AuthContext,
    models::order::{
        CreateOrderRequest, CreateOrderResponse, ProcessCartRequest, ProcessCartResponse,
        ProcessPaymentRequest, ProcessPaymentResponse, VerifyCartRequest, VerifyCartResponse,
    },
    services::{checkout::CheckoutOptions, payment_service},
};
use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::Serialize;

/// Response for `GET /payment/razorpaykey`.
#[derive(Debug, Serialize)]
pub struct GatewayKeyResponse {
    pub success: bool,
    /// Publishable key id only — the secret never crosses this boundary
    pub key: String,
}

/// Send the publishable gateway key id to the client.
///
/// The checkout modal needs it to identify the merchant. It is not a
/// secret, but the endpoint stays behind auth to mirror the rest of the
/// payment surface.
pub async fn send_gateway_key(State(state): State<AppState>) -> Json<GatewayKeyResponse> {
    Json(GatewayKeyResponse {
        success: true,
        key: state.gateway.publishable_key().to_string(),
    })
}

/// Start a single-item checkout.
///
/// # Request Body
///
/// ```json
/// { "productId": "550e8400-...", "idempotencyKey": "attempt-001" }
/// ```
///
/// # Response (200)
///
/// The gateway order, a product snapshot (so the client can render
/// price/title without another round trip), and ready-made checkout
/// options for the browser modal. No application order exists yet.
///
/// # Errors
///
/// - 404 if the product does not exist (no gateway call is made)
/// - 502 if the gateway call fails
pub async fn process_payment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<ProcessPaymentRequest>,
) -> Result<Json<ProcessPaymentResponse>, AppError> {
    tracing::debug!(user = %auth.user_id, product = %request.product_id, "starting checkout");

    let (order, product) = payment_service::create_order_for_product(
        &state.pool,
        &state.gateway,
        request.product_id,
        request.idempotency_key.as_deref(),
    )
    .await?;

    let checkout = CheckoutOptions::for_product(state.gateway.publishable_key(), &order, &product);

    Ok(Json(ProcessPaymentResponse { success: true, order, product, checkout }))
}

/// Verify a completed single-item payment and record the order.
///
/// # Response (201)
///
/// The persisted order, in `succeeded` state. Repeating the call with the
/// same identifiers returns the same order rather than creating a second
/// one, so the browser may safely retry verification after a network
/// failure (unlike checkout creation, which must not be retried after a
/// successful charge).
///
/// # Errors
///
/// - 400 `payment_verification_failed` on a signature mismatch — terminal
/// - 404 if the product vanished between creation and verification
pub async fn create_order(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), AppError> {
    let order = payment_service::verify_and_persist(
        &state.pool,
        state.gateway.secret(),
        auth.user_id,
        &request,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(CreateOrderResponse { success: true, order })))
}

/// Start a cart checkout: one aggregate gateway order for N items.
///
/// The aggregate amount is recomputed from stored product prices; any
/// client-supplied price is ignored. A cart referencing an unknown
/// product is rejected whole, with the missing ids reported.
///
/// # Errors
///
/// - 400 for an empty cart or non-positive total (before any gateway call)
/// - 404 listing the unknown product ids
/// - 502 if the gateway call fails
pub async fn process_cart_payment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<ProcessCartRequest>,
) -> Result<Json<ProcessCartResponse>, AppError> {
    tracing::debug!(user = %auth.user_id, items = request.items.len(), "starting cart checkout");

    let order = payment_service::create_order_for_cart(
        &state.pool,
        &state.gateway,
        &request.items,
        request.idempotency_key.as_deref(),
    )
    .await?;

    let checkout =
        CheckoutOptions::for_cart(state.gateway.publishable_key(), &order, request.items.len());

    Ok(Json(ProcessCartResponse { success: true, order, checkout }))
}

/// Verify a completed cart payment and record one order per item.
///
/// # Response (201)
///
/// ```json
/// {
///   "success": true,
///   "orders": [ ... ],
///   "skippedProducts": ["660e8400-..."],
///   "outcome": "partial"
/// }
/// ```
///
/// Items whose product vanished between creation and verification are
/// skipped but reported; `outcome` distinguishes `complete`, `partial`
/// and `none` so the caller decides whether partial counts as success.
pub async fn verify_cart_payment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<VerifyCartRequest>,
) -> Result<(StatusCode, Json<VerifyCartResponse>), AppError> {
    let persistence = payment_service::verify_and_persist_cart(
        &state.pool,
        state.gateway.secret(),
        auth.user_id,
        &request,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(VerifyCartResponse {
            success: true,
            orders: persistence.orders,
            skipped_products: persistence.skipped,
            outcome: persistence.outcome,
        }),
    ))
}
