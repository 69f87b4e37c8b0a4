use std::sync::Arc;

use agenda::engine::EvidenceEngine;
use agenda::evidence::PageFetcher;
use agenda::store::AgendaStore;

/// Shared handler state. Cloned per request; everything inside is `Arc`.
pub struct HandlerState<F: PageFetcher + 'static> {
    pub engine: Arc<EvidenceEngine<F>>,

    pub store: Arc<dyn AgendaStore>,
}

impl<F: PageFetcher + 'static> Clone for HandlerState<F> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            store: Arc::clone(&self.store),
        }
    }
}

impl<F: PageFetcher + 'static> HandlerState<F> {
    pub fn new(engine: Arc<EvidenceEngine<F>>, store: Arc<dyn AgendaStore>) -> Self {
        Self { engine, store }
    }

    /// `external` when an analyzer is configured, `heuristic` otherwise.
    pub fn analyzer_mode(&self) -> &'static str {
        if self.engine.has_analyzer() {
            "external"
        } else {
            "heuristic"
        }
    }
}
