//! Tracing subscriber setup
//!
//! Hosts that already install a subscriber can skip this entirely; every
//! diagnostic in contenthook goes through `tracing`.
//!
//! - `CONTENTHOOK_LOG=debug` - Filter directives (default: `info`)

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives
pub const LOG_FILTER_VAR: &str = "CONTENTHOOK_LOG";

/// Install a fmt subscriber filtered by [`LOG_FILTER_VAR`].
///
/// Returns `false` if a global subscriber was already set.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        assert!(!init());
    }
}
