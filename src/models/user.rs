//! User model for authentication.
//!
//! Users authenticate with bearer tokens, stored in the database as SHA-256
//! hashes. The payment core never accepts a buyer id from a request body;
//! the buyer is always the authenticated user.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table with columns:
/// - `id`: Unique identifier (UUID)
/// - `name`: Display name
/// - `email`: Contact email (unique)
/// - `token_hash`: SHA-256 hash of the bearer token
/// - `is_active`: Whether the token is currently valid
/// - `created_at`: When the user was created
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique identifier for this user
    pub id: Uuid,

    /// Display name, shown on order history entries
    pub name: String,

    /// Contact email, shown to counterparties on order history
    pub email: String,

    /// SHA-256 hash of the bearer token (64 hex characters)
    ///
    /// When a request comes in with "Bearer abc123", we:
    /// 1. Hash "abc123" with SHA-256
    /// 2. Look up this hash in the database
    /// 3. If found and active, authenticate the request
    pub token_hash: String,

    /// Whether this user can currently authenticate
    ///
    /// Inactive users are rejected during authentication. This provides a
    /// way to revoke access without deleting the record.
    pub is_active: bool,

    /// Timestamp when this user was created
    pub created_at: DateTime<Utc>,
}
