// contenthook - best-effort webhook notifications for CMS content writes
//
// This library forwards create/update/delete lifecycle events for a fixed set
// of content types to a single webhook endpoint, one attempt per event.

pub mod logging;
mod plugin;

pub use plugin::{BootstrapError, WebhookPlugin};

// Re-export member crates
pub use contenthook_config;
pub use contenthook_lifecycle;
pub use contenthook_webhooks;

// Prelude for common imports
pub mod prelude {
    pub use crate::{BootstrapError, WebhookPlugin};
    pub use contenthook_config::{ConfigError, DeliveryConfig};
    pub use contenthook_lifecycle::{
        LifecycleEvent, LifecycleHandler, LifecycleRegistry, LifecycleSource, Subscription,
        WatchedKind, WatchedKinds, bind, model_name,
    };
    pub use contenthook_webhooks::{
        DeliveryError, Dispatcher, EntryEvent, NotificationEnvelope, Notifier, NotifierOptions,
    };
}
