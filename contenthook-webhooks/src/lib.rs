//! Best-effort webhook notifications for contenthook
//!
//! Posts a small JSON envelope to a single configured endpoint whenever a
//! watched content entry is created, updated or deleted.
//!
//! # Delivery Guarantees
//!
//! - **At most once**: one HTTP attempt per notification, no retries, no queue
//! - **Contained failures**: non-2xx responses and transport faults are
//!   logged at `warn` and never returned to the caller of [`Notifier::notify`]
//! - **Bearer auth**: every request carries `Authorization: Bearer <secret>`
//!
//! # Wire Format
//!
//! ```json
//! {
//!   "event": "entry.create",
//!   "model": "product",
//!   "entry": { "id": 1, "title": "Mug" },
//!   "createdAt": "2026-10-19T08:15:30.123Z"
//! }
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use contenthook_config::DeliveryConfig;
//! use contenthook_webhooks::{EntryEvent, Notifier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let notifier = Notifier::new(DeliveryConfig::from_env()?)?;
//!
//!     notifier
//!         .notify(EntryEvent::Create, "product", &serde_json::json!({"id": 1}))
//!         .await;
//!     Ok(())
//! }
//! ```

mod envelope;
mod error;
mod notifier;
mod options;

pub use envelope::{EntryEvent, NotificationEnvelope};
pub use error::DeliveryError;
pub use notifier::{DeliveryReceipt, Dispatcher, Notifier};
pub use options::{NotifierOptions, NotifierOptionsBuilder};

/// Result type for webhook operations
pub type Result<T> = std::result::Result<T, DeliveryError>;
