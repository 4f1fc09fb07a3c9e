//! Order history and statistics HTTP handlers.
//!
//! This module implements the read-side endpoints:
//! - GET /payment/stats       - Purchase/sale counts for the profile page
//! - GET /payment/my-artworks - Products the user has purchased
//! - GET /payment/my-orders   - Purchase history with product + seller info

use crate::{
    AppState,
    error::AppError,
    middleware::auth::AuthContext,
    models::order::{MyOrdersResponse, OrderStatsResponse, PurchasedArtworksResponse},
    services::payment_service,
};
use axum::{Extension, Json, extract::State};

/// Purchase/sale counts for the authenticated user.
///
/// # Response (200)
///
/// ```json
/// { "success": true, "buyerCount": 4, "sellerCount": 12 }
/// ```
pub async fn get_order_stats(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<OrderStatsResponse>, AppError> {
    let (buyer_count, seller_count) = payment_service::order_stats(&state.pool, auth.user_id).await?;

    Ok(Json(OrderStatsResponse { success: true, buyer_count, seller_count }))
}

/// Products the authenticated user has purchased.
///
/// Backs the "my artworks" collection view: the artwork records
/// themselves, not the orders.
pub async fn get_my_artworks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<PurchasedArtworksResponse>, AppError> {
    let artworks = payment_service::list_purchased_products(&state.pool, auth.user_id).await?;

    Ok(Json(PurchasedArtworksResponse { success: true, artworks }))
}

/// The authenticated user's purchase history, newest first.
///
/// Each entry is the order joined with product title/photo and the
/// seller's name and email, so the profile page needs no extra lookups.
pub async fn get_my_orders(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<MyOrdersResponse>, AppError> {
    let orders = payment_service::list_orders_for_buyer(&state.pool, auth.user_id).await?;

    Ok(Json(MyOrdersResponse { success: true, orders }))
}
