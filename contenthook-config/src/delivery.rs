//! Webhook delivery settings

use crate::{ConfigError, EnvLoader, Result};
use std::fmt;
use url::Url;

/// Variable holding the webhook endpoint URL
pub const ENDPOINT_URL_VAR: &str = "CMS_AI_WEBHOOK_URL";

/// Variable holding the bearer secret
pub const SHARED_SECRET_VAR: &str = "CMS_AI_WEBHOOK_SECRET";

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:3000/api/webhooks/strapi";

/// Secret used when none is configured
pub const DEFAULT_SHARED_SECRET: &str = "cms-ai-webhook-secret";

/// Where notifications go and how they authenticate.
///
/// Built once during bootstrap and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    endpoint_url: Url,
    shared_secret: String,
}

impl DeliveryConfig {
    /// Create a configuration from explicit values
    pub fn new(endpoint_url: &str, shared_secret: impl Into<String>) -> Result<Self> {
        Ok(Self {
            endpoint_url: parse_endpoint(endpoint_url)?,
            shared_secret: shared_secret.into(),
        })
    }

    /// Load from the process environment (and `.env`, if present)
    pub fn from_env() -> Result<Self> {
        let loader = EnvLoader::new();
        loader.load_dotenv();
        Self::from_loader(&loader)
    }

    /// Load using the given loader, falling back to the defaults
    pub fn from_loader(loader: &EnvLoader) -> Result<Self> {
        let endpoint = loader.load_var_or(ENDPOINT_URL_VAR, DEFAULT_ENDPOINT_URL);
        let secret = loader.load_var_or(SHARED_SECRET_VAR, DEFAULT_SHARED_SECRET);

        if secret == DEFAULT_SHARED_SECRET {
            tracing::debug!("{} not set, using placeholder secret", SHARED_SECRET_VAR);
        }

        Self::new(&endpoint, secret)
    }

    /// The webhook endpoint
    pub fn endpoint_url(&self) -> &Url {
        &self.endpoint_url
    }

    /// The bearer token value
    pub fn shared_secret(&self) -> &str {
        &self.shared_secret
    }

    /// Value for the `Authorization` header
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.shared_secret)
    }
}

impl fmt::Debug for DeliveryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryConfig")
            .field("endpoint_url", &self.endpoint_url.as_str())
            .field("shared_secret", &"[redacted]")
            .finish()
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}
