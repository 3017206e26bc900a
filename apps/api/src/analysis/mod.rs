// Resume analysis: text heuristics, scoring and profile matching, plus the
// orchestrator that adds AI enrichment. All LLM calls go through the assistant.

pub mod analyzer;
pub mod handlers;
pub mod heuristics;
pub mod lexicon;
pub mod models;
