//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.
//!
//! Gateway credentials are validated here, at startup, rather than deep in
//! the request path: a blank secret would make the signature verifier
//! reject everything, which must never be confused with a working setup.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `RAZORPAY_KEY_ID` (required): publishable gateway key id (safe to send to clients)
/// - `RAZORPAY_KEY_SECRET` (required): gateway secret, used for order creation
///   and signature verification. Never leaves the server.
/// - `GATEWAY_BASE_URL` (optional): gateway API base, defaults to the
///   Razorpay production endpoint. Overridable for staging.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    pub razorpay_key_id: String,

    pub razorpay_key_secret: String,

    #[serde(default = "default_gateway_base_url")]
    pub gateway_base_url: String,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_gateway_base_url() -> String {
    "https://api.razorpay.com".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config
    /// struct, then validates the gateway settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    /// - Gateway credentials are blank or the gateway base URL is malformed
    pub fn from_env() -> anyhow::Result<Self> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: database_url -> DATABASE_URL
        let config = envy::from_env::<Config>()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would pass envy but break at runtime.
    ///
    /// envy accepts empty strings for required fields, and an empty
    /// RAZORPAY_KEY_SECRET would silently turn every verification into a
    /// rejection rather than an error.
    fn validate(&self) -> anyhow::Result<()> {
        if self.razorpay_key_id.trim().is_empty() {
            anyhow::bail!("RAZORPAY_KEY_ID is set but blank");
        }
        if self.razorpay_key_secret.trim().is_empty() {
            anyhow::bail!("RAZORPAY_KEY_SECRET is set but blank");
        }
        url::Url::parse(&self.gateway_base_url)
            .map_err(|e| anyhow::anyhow!("GATEWAY_BASE_URL is not a valid URL: {e}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            database_url: "postgres://localhost/archicanvas".to_string(),
            server_port: 3000,
            razorpay_key_id: "rzp_test_abc123".to_string(),
            razorpay_key_secret: "shhh".to_string(),
            gateway_base_url: default_gateway_base_url(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn blank_secret_is_rejected() {
        let mut config = base_config();
        config.razorpay_key_secret = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_key_id_is_rejected() {
        let mut config = base_config();
        config.razorpay_key_id = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_gateway_url_is_rejected() {
        let mut config = base_config();
        config.gateway_base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
