//! Bootstrap entry point for host applications

use contenthook_config::{ConfigError, DeliveryConfig};
use contenthook_lifecycle::{LifecycleSource, WatchedKinds, bind};
use contenthook_webhooks::{DeliveryError, Notifier, NotifierOptions};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while starting up. Delivery-time failures never show up here.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Notifier setup failed: {0}")]
    Notifier(#[from] DeliveryError),
}

/// Everything needed to wire lifecycle events to the webhook endpoint.
///
/// ```rust,no_run
/// use contenthook::WebhookPlugin;
/// use contenthook::contenthook_lifecycle::LifecycleRegistry;
///
/// # fn main() -> Result<(), contenthook::BootstrapError> {
/// let registry = LifecycleRegistry::new();
/// WebhookPlugin::from_env()?.bootstrap(&registry)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebhookPlugin {
    config: DeliveryConfig,
    kinds: WatchedKinds,
    options: NotifierOptions,
}

impl WebhookPlugin {
    /// Create a plugin from explicit configuration
    pub fn new(config: DeliveryConfig, kinds: WatchedKinds) -> Self {
        Self {
            config,
            kinds,
            options: NotifierOptions::default(),
        }
    }

    /// Load configuration from the environment and watch the default kinds
    pub fn from_env() -> Result<Self, BootstrapError> {
        Ok(Self::new(DeliveryConfig::from_env()?, WatchedKinds::default()))
    }

    /// Override the HTTP transport options
    pub fn with_options(mut self, options: NotifierOptions) -> Self {
        self.options = options;
        self
    }

    /// Delivery configuration
    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    /// Watched content types
    pub fn kinds(&self) -> &WatchedKinds {
        &self.kinds
    }

    /// Build the notifier and subscribe it for every watched kind.
    ///
    /// Returns the number of kinds registered. Call once per source.
    pub fn bootstrap<S>(&self, source: &S) -> Result<usize, BootstrapError>
    where
        S: LifecycleSource + ?Sized,
    {
        let notifier = Notifier::with_options(self.config.clone(), self.options.clone())?;
        Ok(bind(source, &self.kinds, Arc::new(notifier)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contenthook_lifecycle::{DEFAULT_WATCHED_KINDS, LifecycleRegistry};

    #[test]
    fn test_bootstrap_default_kinds() {
        let config = DeliveryConfig::new("http://localhost:3000/hook", "secret").unwrap();
        let plugin = WebhookPlugin::new(config, WatchedKinds::default());
        let registry = LifecycleRegistry::new();

        let count = plugin.bootstrap(&registry).unwrap();

        assert_eq!(count, DEFAULT_WATCHED_KINDS.len());
        for uid in DEFAULT_WATCHED_KINDS {
            assert_eq!(registry.handler_count(uid), 1);
        }
    }

    #[test]
    fn test_bootstrap_through_trait_object() {
        let config = DeliveryConfig::new("http://localhost:3000/hook", "secret").unwrap();
        let kinds = WatchedKinds::new(["homepage"]).unwrap();
        let registry = LifecycleRegistry::new();
        let source: &dyn LifecycleSource = &registry;

        let count = WebhookPlugin::new(config, kinds).bootstrap(source).unwrap();

        assert_eq!(count, 1);
        assert_eq!(registry.handler_count("homepage"), 1);
    }
}
