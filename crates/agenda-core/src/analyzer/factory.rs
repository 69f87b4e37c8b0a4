use std::sync::Arc;

use tracing::{info, warn};

use super::client::{Analyzer, OpenAiAnalyzer};
use super::config::AnalyzerConfig;

/// Builds the analyzer for `config`, or `None` when no credential is configured.
pub fn build_analyzer(config: &AnalyzerConfig) -> Option<Arc<dyn Analyzer>> {
    if !config.is_enabled() {
        info!("No analyzer credential configured; scoring with the heuristic only");
        return None;
    }

    match OpenAiAnalyzer::new(config.clone()) {
        Ok(analyzer) => {
            info!(endpoint = %config.endpoint, model = %config.model, "External analyzer enabled");
            Some(Arc::new(analyzer))
        }
        Err(e) => {
            warn!(error = %e, "Failed to build analyzer client; scoring with the heuristic only");
            None
        }
    }
}
