//! In-memory lifecycle registry

use crate::event::{LifecycleEvent, LifecycleHandler, Subscription};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Host-side source of lifecycle events
pub trait LifecycleSource: Send + Sync {
    /// Register a subscription for the content types it names
    fn subscribe(&self, subscription: Subscription);
}

/// Lifecycle registry keyed by content type identifier
#[derive(Clone, Default)]
pub struct LifecycleRegistry {
    handlers: Arc<DashMap<String, Vec<Arc<dyn LifecycleHandler>>>>,
}

impl LifecycleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the matching callback of every handler subscribed to `model`.
    ///
    /// Returns how many handlers ran.
    pub async fn emit(&self, model: &str, event: LifecycleEvent) -> usize {
        let handlers = match self.handlers.get(model) {
            Some(handlers) => handlers.clone(),
            None => {
                trace!(model, "No lifecycle handlers registered");
                return 0;
            }
        };

        for handler in &handlers {
            handler.handle(&event).await;
        }

        handlers.len()
    }

    /// Get handler count for a content type
    pub fn handler_count(&self, model: &str) -> usize {
        self.handlers.get(model).map(|h| h.len()).unwrap_or(0)
    }

    /// Content types with at least one handler
    pub fn models(&self) -> Vec<String> {
        self.handlers.iter().map(|e| e.key().clone()).collect()
    }

    /// Clear all handlers
    pub fn clear(&self) {
        self.handlers.clear();
    }
}

impl LifecycleSource for LifecycleRegistry {
    fn subscribe(&self, subscription: Subscription) {
        for model in subscription.models {
            debug!(model = %model, "Subscribed lifecycle handler");
            self.handlers
                .entry(model)
                .or_default()
                .push(subscription.handler.clone());
        }
    }
}

impl std::fmt::Debug for LifecycleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleRegistry")
            .field("models", &self.models())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct CountingHandler {
        creates: AtomicU32,
        deletes: AtomicU32,
    }

    #[async_trait]
    impl LifecycleHandler for CountingHandler {
        async fn after_create(&self, _result: &Value) {
            self.creates.fetch_add(1, Ordering::SeqCst);
        }

        async fn after_delete(&self, _result: &Value) {
            self.deletes.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_emit_routes_to_callback() {
        let registry = LifecycleRegistry::new();
        let handler = Arc::new(CountingHandler::default());
        registry.subscribe(Subscription::new(["api::tag.tag"], handler.clone()));

        let ran = registry
            .emit("api::tag.tag", LifecycleEvent::Create { result: json!({}) })
            .await;
        registry
            .emit("api::tag.tag", LifecycleEvent::Update { result: json!({}) })
            .await;

        assert_eq!(ran, 1);
        assert_eq!(handler.creates.load(Ordering::SeqCst), 1);
        assert_eq!(handler.deletes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_emit_for_unwatched_model() {
        let registry = LifecycleRegistry::new();

        let ran = registry
            .emit("api::page.page", LifecycleEvent::Delete { result: json!(null) })
            .await;

        assert_eq!(ran, 0);
    }

    #[test]
    fn test_handler_count() {
        let registry = LifecycleRegistry::new();
        assert_eq!(registry.handler_count("api::tag.tag"), 0);

        let handler: Arc<dyn LifecycleHandler> = Arc::new(CountingHandler::default());
        registry.subscribe(Subscription::new(
            ["api::tag.tag", "api::order.order"],
            handler.clone(),
        ));
        registry.subscribe(Subscription::new(["api::tag.tag"], handler));

        assert_eq!(registry.handler_count("api::tag.tag"), 2);
        assert_eq!(registry.handler_count("api::order.order"), 1);

        registry.clear();
        assert!(registry.models().is_empty());
    }
}
