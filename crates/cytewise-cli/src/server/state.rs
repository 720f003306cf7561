//! Application state for the web server.

use std::sync::Arc;

use cytewise::Formatter;

/// Shared application state.
///
/// The formatter is immutable, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Rules used to format incoming records.
    pub formatter: Arc<Formatter>,
}

impl AppState {
    /// Create state with the built-in formatter.
    pub fn new() -> Self {
        Self::with_formatter(Formatter::new())
    }

    /// Create state around a custom formatter.
    pub fn with_formatter(formatter: Formatter) -> Self {
        Self {
            formatter: Arc::new(formatter),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
