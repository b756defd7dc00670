//! Content lifecycle subscriptions for contenthook
//!
//! Wires a fixed set of content types to a [`Dispatcher`] so that every
//! completed create, update or delete produces one webhook notification.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use contenthook_lifecycle::*;
//! use std::sync::Arc;
//!
//! let registry = LifecycleRegistry::new();
//! let notifier = Notifier::new(DeliveryConfig::from_env()?)?;
//!
//! bind(&registry, &WatchedKinds::default(), Arc::new(notifier));
//!
//! // The host reports a finished write
//! registry
//!     .emit("api::product.product", LifecycleEvent::Create { result: record })
//!     .await;
//! ```
//!
//! ## Model Names
//!
//! Notifications carry the short model name: the segment after the last
//! `.` of the content type identifier (`api::product.product` becomes
//! `product`). Identifiers without a `.` are used as-is.
//!
//! ## Custom Hosts
//!
//! Hosts with their own event plumbing implement [`LifecycleSource`] and
//! call [`LifecycleHandler::handle`] on each subscription after a write.

pub mod binder;
pub mod error;
pub mod event;
pub mod kind;
pub mod registry;

pub use binder::{WebhookHandler, bind};
pub use contenthook_webhooks::Dispatcher;
pub use error::LifecycleError;
pub use event::{LifecycleEvent, LifecycleHandler, Subscription};
pub use kind::{DEFAULT_WATCHED_KINDS, WatchedKind, WatchedKinds, model_name};
pub use registry::{LifecycleRegistry, LifecycleSource};

/// Result type for lifecycle operations
pub type Result<T> = std::result::Result<T, LifecycleError>;
