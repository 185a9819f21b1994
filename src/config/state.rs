// Runtime state module
// Holds the state shared by every connection task

use crate::config::Config;

/// Shared application state
///
/// Configuration is static for the lifetime of the process; the gateway has
/// no runtime reconfiguration surface.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}
