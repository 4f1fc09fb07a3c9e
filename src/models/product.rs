//! Catalog product model.
//!
//! Products are owned by the catalog subsystem; the payment core only reads
//! `price_cents` (the authoritative charge amount) and `seller_id`. It never
//! mutates a product.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Represents a product record from the database.
///
/// # Amounts
///
/// `price_cents` is the price in minor units (paise). This is the ONLY
/// source of truth for how much a checkout charges: client-supplied
/// prices are never trusted.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier for this product
    pub id: Uuid,

    /// Artwork title
    pub title: String,

    /// URL of the (watermarked) artwork image, if any
    pub photo: Option<String>,

    /// Price in minor units (paise)
    pub price_cents: i64,

    /// The artist selling this product
    pub seller_id: Uuid,

    /// When the product was listed
    pub created_at: DateTime<Utc>,
}
