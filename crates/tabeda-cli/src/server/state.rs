//! Application state for the HTTP server.

use std::sync::Arc;

use tabeda::Analyzer;

/// Shared application state: a single stateless analyzer, injected at
/// construction. No ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    /// Create state around an analyzer.
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}
