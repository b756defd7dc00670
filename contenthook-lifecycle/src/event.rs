//! Lifecycle events and handlers

use async_trait::async_trait;
use contenthook_webhooks::EntryEvent;
use serde_json::Value;
use std::sync::Arc;

/// A completed write, carrying the record as it stands afterwards
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleEvent {
    /// An entry was created
    Create { result: Value },

    /// An entry was updated
    Update { result: Value },

    /// An entry was deleted
    Delete { result: Value },
}

impl LifecycleEvent {
    /// The post-write record snapshot
    pub fn result(&self) -> &Value {
        match self {
            Self::Create { result } | Self::Update { result } | Self::Delete { result } => result,
        }
    }

    /// Notification event this write maps to
    pub fn entry_event(&self) -> EntryEvent {
        match self {
            Self::Create { .. } => EntryEvent::Create,
            Self::Update { .. } => EntryEvent::Update,
            Self::Delete { .. } => EntryEvent::Delete,
        }
    }
}

/// Callbacks invoked after a write completes.
///
/// Every method defaults to doing nothing.
#[async_trait]
pub trait LifecycleHandler: Send + Sync {
    /// Called after an entry is created
    async fn after_create(&self, _result: &Value) {}

    /// Called after an entry is updated
    async fn after_update(&self, _result: &Value) {}

    /// Called after an entry is deleted
    async fn after_delete(&self, _result: &Value) {}

    /// Route an event to the matching callback
    async fn handle(&self, event: &LifecycleEvent) {
        match event {
            LifecycleEvent::Create { result } => self.after_create(result).await,
            LifecycleEvent::Update { result } => self.after_update(result).await,
            LifecycleEvent::Delete { result } => self.after_delete(result).await,
        }
    }
}

/// A handler scoped to a set of content types
#[derive(Clone)]
pub struct Subscription {
    /// Content type identifiers this subscription covers
    pub models: Vec<String>,

    /// Callbacks to run
    pub handler: Arc<dyn LifecycleHandler>,
}

impl Subscription {
    /// Create a subscription
    pub fn new<I, S>(models: I, handler: Arc<dyn LifecycleHandler>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            models: models.into_iter().map(Into::into).collect(),
            handler,
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("models", &self.models)
            .finish_non_exhaustive()
    }
}
