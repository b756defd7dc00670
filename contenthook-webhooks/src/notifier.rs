//! Webhook notifier for content lifecycle events

use crate::{DeliveryError, EntryEvent, NotificationEnvelope, NotifierOptions, Result};
use contenthook_config::DeliveryConfig;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

/// Outcome of a successful delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// HTTP status returned by the endpoint (always 2xx)
    pub status: u16,

    /// Time from request start to response headers
    pub elapsed: Duration,
}

/// Something that accepts lifecycle notifications without blocking the caller.
///
/// Implementations must never surface a failure to the caller.
pub trait Dispatcher: Send + Sync {
    /// Hand off a notification for `model`'s `event`
    fn dispatch(&self, event: EntryEvent, model: &str, entry: serde_json::Value);
}

/// Sends one authenticated JSON POST per notification.
///
/// Cloning is cheap; clones share the HTTP connection pool and configuration.
#[derive(Debug, Clone)]
pub struct Notifier {
    config: Arc<DeliveryConfig>,
    options: NotifierOptions,
    http_client: Client,
}

impl Notifier {
    /// Create a notifier with default transport options
    pub fn new(config: DeliveryConfig) -> Result<Self> {
        Self::with_options(config, NotifierOptions::default())
    }

    /// Create a notifier with custom transport options
    pub fn with_options(config: DeliveryConfig, options: NotifierOptions) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(DeliveryError::ClientBuild)?;

        Ok(Self {
            config: Arc::new(config),
            options,
            http_client,
        })
    }

    /// Notify the endpoint about a write, swallowing any failure.
    ///
    /// Makes at most one delivery attempt. Rejections and transport faults
    /// are logged at `warn` and otherwise discarded.
    pub async fn notify<T>(&self, event: EntryEvent, model: &str, entry: &T)
    where
        T: Serialize + ?Sized,
    {
        let delivery_id = Uuid::new_v4();

        match self.deliver(event, model, entry).await {
            Ok(receipt) => {
                debug!(
                    %delivery_id,
                    %event,
                    model,
                    status = receipt.status,
                    elapsed_ms = receipt.elapsed.as_millis() as u64,
                    "CMS webhook delivered"
                );
            }
            Err(DeliveryError::Rejected { status }) => {
                warn!(%delivery_id, %event, model, status, "CMS webhook rejected");
            }
            Err(e) => {
                warn!(
                    %delivery_id,
                    %event,
                    model,
                    error = %e.describe(),
                    "CMS webhook delivery failed"
                );
            }
        }
    }

    /// Build an envelope for the write and attempt delivery once
    pub async fn deliver<T>(&self, event: EntryEvent, model: &str, entry: &T) -> Result<DeliveryReceipt>
    where
        T: Serialize + ?Sized,
    {
        let envelope = NotificationEnvelope::new(event, model, entry)?;
        self.send(&envelope).await
    }

    /// POST a prepared envelope to the configured endpoint
    pub async fn send(&self, envelope: &NotificationEnvelope) -> Result<DeliveryReceipt> {
        let body = envelope.to_bytes()?;
        let started = Instant::now();

        let response = self
            .http_client
            .post(self.config.endpoint_url().clone())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.config.authorization())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(DeliveryReceipt {
            status: status.as_u16(),
            elapsed: started.elapsed(),
        })
    }

    /// Run [`notify`](Self::notify) on a detached task.
    ///
    /// Returns `None` when called outside a tokio runtime, in which case the
    /// notification is dropped with a warning.
    pub fn spawn(
        &self,
        event: EntryEvent,
        model: &str,
        entry: serde_json::Value,
    ) -> Option<JoinHandle<()>> {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!(%event, model, error = %e, "No async runtime, dropping CMS webhook");
                return None;
            }
        };

        let notifier = self.clone();
        let model = model.to_string();
        Some(handle.spawn(async move {
            notifier.notify(event, &model, &entry).await;
        }))
    }

    /// Get the delivery configuration
    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    /// Get the transport options
    pub fn options(&self) -> &NotifierOptions {
        &self.options
    }
}

impl Dispatcher for Notifier {
    fn dispatch(&self, event: EntryEvent, model: &str, entry: serde_json::Value) {
        // Detached: the write path never waits on delivery.
        let _ = self.spawn(event, model, entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::TcpListener;

    fn closed_port_config() -> DeliveryConfig {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        DeliveryConfig::new(&format!("http://{}/hook", addr), "secret").unwrap()
    }

    #[test]
    fn test_notifier_creation() {
        let config = DeliveryConfig::new("http://localhost:3000/hook", "secret").unwrap();
        let notifier = Notifier::new(config).unwrap();

        assert_eq!(notifier.config().shared_secret(), "secret");
        assert!(notifier.options().timeout.is_none());
    }

    #[test]
    fn test_spawn_without_runtime_drops() {
        let notifier = Notifier::new(closed_port_config()).unwrap();

        assert!(notifier.spawn(EntryEvent::Create, "product", json!({})).is_none());
    }

    #[tokio::test]
    async fn test_deliver_connection_refused() {
        let notifier = Notifier::new(closed_port_config()).unwrap();

        let err = notifier
            .deliver(EntryEvent::Delete, "order", &json!({"id": 7}))
            .await
            .unwrap_err();

        assert!(matches!(err, DeliveryError::Transport(_)));
        assert!(!err.is_rejected());
    }

    #[tokio::test]
    async fn test_notify_swallows_transport_failure() {
        let notifier = Notifier::new(closed_port_config()).unwrap();

        notifier
            .notify(EntryEvent::Delete, "order", &json!({"id": 7}))
            .await;
    }

    #[tokio::test]
    async fn test_spawned_notify_completes() {
        let notifier = Notifier::new(closed_port_config()).unwrap();

        let handle = notifier
            .spawn(EntryEvent::Update, "article", json!({"id": 3}))
            .unwrap();

        assert!(handle.await.is_ok());
    }
}
