//! Transport options for the notifier

use std::time::Duration;

/// HTTP transport settings.
///
/// Every notification gets exactly one attempt; there is no retry policy.
#[derive(Debug, Clone)]
pub struct NotifierOptions {
    /// User-Agent header for outgoing requests
    pub user_agent: String,

    /// Request timeout; `None` leaves it to the transport default
    pub timeout: Option<Duration>,
}

impl Default for NotifierOptions {
    fn default() -> Self {
        Self {
            user_agent: format!("contenthook/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

impl NotifierOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom options
    pub fn builder() -> NotifierOptionsBuilder {
        NotifierOptionsBuilder::new()
    }
}

/// Builder for NotifierOptions
#[derive(Debug, Clone, Default)]
pub struct NotifierOptionsBuilder {
    options: NotifierOptions,
}

impl NotifierOptionsBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            options: NotifierOptions::default(),
        }
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.options.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    /// Set the timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.options.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Build the options
    pub fn build(self) -> NotifierOptions {
        self.options
    }
}
