//! Core of the captain election demo.
//! Owns the single-instance guarantee for `Captain` and the logging bootstrap.

pub mod logging;
pub mod model;
pub mod singleton;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::captain::{
    get_captain, status_message, Captain, ELECTED_MESSAGE, REUSED_MESSAGE,
};
pub use singleton::{Acquisition, HolderState, Singleton};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
