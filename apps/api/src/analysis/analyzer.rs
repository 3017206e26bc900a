//! Resume Analyzer: runs one document through extraction, the heuristic gate, scoring and
//! AI enrichment, and assembles the report.
//!
//! Flow: extract → is_resume → skills/score/profile match → job comparison → feedback →
//!       bullet rewrites → AnalysisReport.
//!
//! Only the first two steps can fail an analysis. AI steps degrade inside the assistant.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::heuristics::{
    calculate_job_profile_match, calculate_score_and_breakdown, extract_skills, is_resume,
};
use crate::analysis::models::{AnalysisError, AnalysisReport};
use crate::assistant::GenerativeAssistant;
use crate::extraction::TextExtractor;

/// Aborts the wrapped task when dropped, so an abandoned request does not keep
/// its LLM calls running.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[derive(Clone)]
pub struct ResumeAnalyzer {
    extractor: Arc<dyn TextExtractor>,
    assistant: GenerativeAssistant,
}

impl ResumeAnalyzer {
    pub fn new(extractor: Arc<dyn TextExtractor>, assistant: GenerativeAssistant) -> Self {
        Self {
            extractor,
            assistant,
        }
    }

    pub fn ai_available(&self) -> bool {
        self.assistant.is_available()
    }

    pub async fn generate_cover_letter(&self, resume_text: &str, jd_text: Option<&str>) -> Option<String> {
        self.assistant.generate_cover_letter(resume_text, jd_text).await
    }

    /// Analyzes the document at `path`. A panic anywhere in the analysis is reported as
    /// `AnalysisError::Internal` instead of unwinding into the caller.
    pub async fn analyze(
        &self,
        path: &Path,
        job_description: Option<&str>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let analyzer = self.clone();
        let path: PathBuf = path.to_path_buf();
        let job_description = job_description.map(str::to_string);
        let span = info_span!(
            "analysis",
            id = %Uuid::new_v4(),
            file = %path.file_name().unwrap_or_default().to_string_lossy()
        );

        let mut task = AbortOnDrop(tokio::spawn(
            async move { analyzer.run(&path, job_description.as_deref()).await }.instrument(span),
        ));

        match (&mut task.0).await {
            Ok(result) => result,
            Err(e) => {
                error!("Analysis task failed: {e}");
                Err(AnalysisError::Internal(e.to_string()))
            }
        }
    }

    async fn run(
        &self,
        path: &Path,
        job_description: Option<&str>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let text = self.extractor.extract(path).await;
        if text.trim().is_empty() {
            warn!("No text extracted from {filename}");
            return Err(AnalysisError::ExtractionFailed);
        }

        if !is_resume(&text) {
            info!("Rejected {filename}: does not look like a resume");
            return Err(AnalysisError::NotAResume);
        }

        let skills = extract_skills(&text);
        let (score, score_breakdown) = calculate_score_and_breakdown(&text, &skills);
        let job_profile_matches = calculate_job_profile_match(&skills.technical);
        info!(
            "Heuristic score {score}/100 ({} technical, {} soft skills)",
            skills.technical.len(),
            skills.soft.len()
        );

        let job_comparison = self
            .assistant
            .compare_to_job_description(&text, job_description.unwrap_or_default(), &skills.technical)
            .await;
        let ai_feedback = self.assistant.generate_feedback(&text, &skills, score).await;
        let enhanced_bullets = self.assistant.enhance_bullet_points(&text).await;

        Ok(AnalysisReport {
            filename,
            score,
            skills,
            score_breakdown,
            job_profile_matches,
            job_comparison,
            ai_feedback,
            enhanced_bullets,
            full_text: text,
            ai_powered: self.assistant.is_available(),
        })
    }
}
