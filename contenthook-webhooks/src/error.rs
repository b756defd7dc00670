//! Error types for webhook delivery

use thiserror::Error;

/// Errors that can occur while delivering a notification.
///
/// None of these ever reach the write path that triggered the notification:
/// [`Notifier::notify`](crate::Notifier::notify) logs and discards them.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The endpoint answered with a non-2xx status
    #[error("Webhook endpoint rejected delivery with HTTP {status}")]
    Rejected { status: u16 },

    /// Network, DNS, connection or timeout failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The entry could not be serialized into an envelope
    #[error("Payload error: {0}")]
    Serialization(String),

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
}

impl DeliveryError {
    /// HTTP status of a rejected delivery
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The error and every underlying cause, joined with `": "`.
    ///
    /// reqwest's own message omits the cause (connection refused, DNS,
    /// timeout), so log this rather than `Display`.
    pub fn describe(&self) -> String {
        let mut description = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !description.contains(&cause_text) {
                description.push_str(": ");
                description.push_str(&cause_text);
            }
            source = cause.source();
        }
        description
    }

    /// Whether the endpoint was reached and refused the notification
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl From<serde_json::Error> for DeliveryError {
    fn from(err: serde_json::Error) -> Self {
        DeliveryError::Serialization(err.to_string())
    }
}
