//! Service configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use checkout_bridge_core::{DEFAULT_BUYER_NAME_LABEL, DEFAULT_LOCALE};

use crate::stripe::StripeClient;

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Stripe secret API key (optional; checkout fails without it).
    pub stripe_api_key: Option<String>,

    /// Stripe API base URL (default: `https://api.stripe.com/v1`).
    pub stripe_api_base: String,

    /// Base URL for default success/cancel redirects when the request has no
    /// usable `Origin` header.
    pub default_origin: String,

    /// Checkout page locale (default: "es").
    pub locale: String,

    /// Label of the buyer name custom field.
    pub buyer_name_label: String,

    /// Timeout for each outbound processor call, in seconds.
    pub processor_timeout_seconds: u64,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Maximum concurrent requests on the checkout endpoints.
    pub max_concurrent_requests: usize,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("listen_addr", &self.listen_addr)
            .field(
                "stripe_api_key",
                &self.stripe_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("stripe_api_base", &self.stripe_api_base)
            .field("default_origin", &self.default_origin)
            .field("locale", &self.locale)
            .field("buyer_name_label", &self.buyer_name_label)
            .field("processor_timeout_seconds", &self.processor_timeout_seconds)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .field("max_body_bytes", &self.max_body_bytes)
            .field("max_concurrent_requests", &self.max_concurrent_requests)
            .finish()
    }
}

/// Stripe secrets file structure.
#[derive(Debug, Deserialize)]
struct StripeSecrets {
    api_key: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables and secrets files.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: env_or("LISTEN_ADDR", defaults.listen_addr),
            stripe_api_key: load_stripe_secret(),
            stripe_api_base: env_or("STRIPE_API_BASE", defaults.stripe_api_base),
            default_origin: env_or("DEFAULT_ORIGIN", defaults.default_origin),
            locale: env_or("CHECKOUT_LOCALE", defaults.locale),
            buyer_name_label: env_or("BUYER_NAME_LABEL", defaults.buyer_name_label),
            processor_timeout_seconds: env_parse(
                "PROCESSOR_TIMEOUT_SECONDS",
                defaults.processor_timeout_seconds,
            ),
            request_timeout_seconds: env_parse(
                "REQUEST_TIMEOUT_SECONDS",
                defaults.request_timeout_seconds,
            ),
            max_body_bytes: env_parse("MAX_BODY_BYTES", defaults.max_body_bytes),
            max_concurrent_requests: env_parse(
                "MAX_CONCURRENT_REQUESTS",
                defaults.max_concurrent_requests,
            ),
        }
    }

    /// Timeout applied to each processor call.
    #[must_use]
    pub fn processor_timeout(&self) -> Duration {
        Duration::from_secs(self.processor_timeout_seconds)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            stripe_api_key: None,
            stripe_api_base: StripeClient::BASE_URL.into(),
            default_origin: "https://tuapp.com".into(),
            locale: DEFAULT_LOCALE.into(),
            buyer_name_label: DEFAULT_BUYER_NAME_LABEL.into(),
            processor_timeout_seconds: 10,
            request_timeout_seconds: 30,
            max_body_bytes: 64 * 1024,
            max_concurrent_requests: 64,
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Load the Stripe secret key from file or environment.
fn load_stripe_secret() -> Option<String> {
    let secret_paths = [".secrets/stripe.json", "../.secrets/stripe.json"];

    for path in &secret_paths {
        if let Ok(secrets) = load_secrets_file::<StripeSecrets>(path) {
            tracing::info!(path = %path, "Loaded Stripe secrets from file");
            return Some(secrets.api_key);
        }
    }

    // Fall back to environment variables
    tracing::debug!("Stripe secrets file not found, using environment variables");
    std::env::var("STRIPE_SECRET_KEY")
        .or_else(|_| std::env::var("STRIPE_API_KEY"))
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// Load secrets from a JSON file.
fn load_secrets_file<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, std::io::Error> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Secrets file not found",
        ));
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
