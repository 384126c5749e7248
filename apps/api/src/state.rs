use std::sync::Arc;

use crate::extract::ExtractorRegistry;
use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Per-request pipelines hold no state of their own; everything here is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// The model boundary. `dyn ModelClient` so tests can swap in a stub.
    pub llm: Arc<dyn ModelClient>,
    /// Extractors keyed by document kind / file extension.
    pub extractors: Arc<ExtractorRegistry>,
}
