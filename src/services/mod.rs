//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle gateway calls, signature verification, and order persistence.

pub mod checkout;
pub mod gateway;
pub mod payment_service;
pub mod signature;
