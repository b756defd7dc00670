//! Delivery configuration for contenthook
//!
//! Resolves the webhook endpoint and shared secret once at process start
//! and hands them out as an immutable [`DeliveryConfig`] value.
//!
//! # Environment Variables
//!
//! - `CMS_AI_WEBHOOK_URL` - Destination for webhook POSTs
//!   (default: `http://localhost:3000/api/webhooks/strapi`)
//! - `CMS_AI_WEBHOOK_SECRET` - Bearer token sent with every POST
//!   (default: `cms-ai-webhook-secret`)
//!
//! A `.env` file in the working directory is honored when present.
//!
//! # Example
//!
//! ```rust,no_run
//! use contenthook_config::DeliveryConfig;
//!
//! let config = DeliveryConfig::from_env()?;
//! println!("posting to {}", config.endpoint_url());
//! # Ok::<(), contenthook_config::ConfigError>(())
//! ```

mod delivery;
mod env;
mod error;

pub use delivery::{
    DEFAULT_ENDPOINT_URL, DEFAULT_SHARED_SECRET, DeliveryConfig, ENDPOINT_URL_VAR,
    SHARED_SECRET_VAR,
};
pub use env::EnvLoader;
pub use error::ConfigError;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
