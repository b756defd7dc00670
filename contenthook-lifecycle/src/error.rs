//! Error types for lifecycle binding

use thiserror::Error;

/// Errors raised while building the watched-kind set
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LifecycleError {
    /// A content type identifier was empty
    #[error("Watched content type identifier must not be empty")]
    EmptyKind,
}
