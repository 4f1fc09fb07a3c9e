//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the request/response types exchanged with clients.

/// Order entity and payment request/response types
pub mod order;
/// Catalog product model (read-only for this service)
pub mod product;
/// Authenticated user model
pub mod user;
