use crate::analysis::analyzer::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup; the lexicon and LLM client inside are shared by every request.
    pub analyzer: ResumeAnalyzer,
    pub config: Config,
}
