//! Bearer-token authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the bearer token from the Authorization header
//! 2. Hash it and verify it exists in the database
//! 3. Inject authentication context into the request
//! 4. Reject unauthorized requests with HTTP 401
//!
//! The payment core trusts the authenticated user id as the buyer identity
//! and never accepts a buyer id from a request body.

use crate::{db::DbPool, error::AppError, models::user::User};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Authentication context attached to authenticated requests.
///
/// This struct is inserted into the request's extension map and can be
/// extracted by route handlers to know who made the request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// ID of the authenticated user
    ///
    /// The buyer on every order this request creates, and the filter for
    /// every history/stats query.
    pub user_id: Uuid,

    /// Display name of the authenticated user
    pub name: String,
}

/// Bearer-token authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <token>` header from request
/// 2. Hash the `<token>` using SHA-256
/// 3. Query database for matching hash where `is_active = true`
/// 4. If found: inject `AuthContext` into request, call next handler
/// 5. If not found: return 401 Unauthorized error
///
/// # Headers
///
/// Expected header format:
/// ```text
/// Authorization: Bearer abc123xyz
/// ```
pub async fn auth_middleware(
    State(pool): State<DbPool>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidToken)?;

    // Expected format: "Bearer <token>"
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::InvalidToken)?;

    // Hash the token using SHA-256
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let token_hash = hex::encode(hasher.finalize());

    // Lookup hashed token in database
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, token_hash, is_active, created_at
         FROM users
         WHERE token_hash = $1 AND is_active = true",
    )
    .bind(&token_hash)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::InvalidToken)?;

    // Inject context into request extensions so handlers can extract it
    // with Extension<AuthContext>
    let auth_context = AuthContext { user_id: user.id, name: user.name };
    request.extensions_mut().insert(auth_context);

    Ok(next.run(request).await)
}
