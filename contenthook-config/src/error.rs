// Error types for delivery configuration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid webhook endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),
}
