//! Binds watched content types to the notifier

use crate::event::{LifecycleHandler, Subscription};
use crate::kind::WatchedKinds;
use crate::registry::LifecycleSource;
use async_trait::async_trait;
use contenthook_webhooks::{Dispatcher, EntryEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Forwards one content type's writes to a [`Dispatcher`]
pub struct WebhookHandler {
    model_name: String,
    dispatcher: Arc<dyn Dispatcher>,
}

impl WebhookHandler {
    /// Create a handler reporting writes under `model_name`
    pub fn new(model_name: impl Into<String>, dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            model_name: model_name.into(),
            dispatcher,
        }
    }

    /// Model name sent with every notification
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn forward(&self, event: EntryEvent, result: &Value) {
        self.dispatcher
            .dispatch(event, &self.model_name, result.clone());
    }
}

#[async_trait]
impl LifecycleHandler for WebhookHandler {
    async fn after_create(&self, result: &Value) {
        self.forward(EntryEvent::Create, result);
    }

    async fn after_update(&self, result: &Value) {
        self.forward(EntryEvent::Update, result);
    }

    async fn after_delete(&self, result: &Value) {
        self.forward(EntryEvent::Delete, result);
    }
}

/// Subscribe a [`WebhookHandler`] for every watched kind.
///
/// Call once during bootstrap; binding the same kind twice doubles its
/// notifications. Returns the number of kinds registered.
pub fn bind<S>(source: &S, kinds: &WatchedKinds, dispatcher: Arc<dyn Dispatcher>) -> usize
where
    S: LifecycleSource + ?Sized,
{
    for kind in kinds {
        let handler = WebhookHandler::new(kind.model_name(), dispatcher.clone());
        source.subscribe(Subscription::new([kind.uid()], Arc::new(handler)));
    }

    info!(
        count = kinds.len(),
        "CMS AI webhook hooks registered for {} content types",
        kinds.len()
    );
    kinds.len()
}
