use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lexicon skills found in a document, each list sorted lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

impl ExtractedSkills {
    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len()
    }
}

/// Per-category ATS sub-scores. Each field is bounded by its `*_CAP`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScoreBreakdown {
    pub contact_info: u32,
    pub content: u32,
    pub education: u32,
    pub experience: u32,
    pub skills: u32,
    pub structure: u32,
}

impl ScoreBreakdown {
    pub const CONTACT_INFO_CAP: u32 = 10;
    pub const CONTENT_CAP: u32 = 15;
    pub const EDUCATION_CAP: u32 = 10;
    pub const EXPERIENCE_CAP: u32 = 20;
    pub const SKILLS_CAP: u32 = 25;
    pub const STRUCTURE_CAP: u32 = 20;
    pub const MAX_TOTAL: u32 = 100;

    /// Sum of all categories, clamped to 100.
    pub fn total(&self) -> u32 {
        (self.contact_info
            + self.content
            + self.education
            + self.experience
            + self.skills
            + self.structure)
            .min(Self::MAX_TOTAL)
    }
}

/// Profile name → percentage (0–100) of its expected skills that were found.
pub type JobProfileMatch = BTreeMap<String, u32>;

/// Resume vs. job description comparison; only produced when a description is supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobComparison {
    pub match_score: u32,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub ai_insights: String,
    /// Echoed back so a follow-up cover letter request can reuse it.
    pub jd_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletSuggestion {
    pub original: String,
    pub suggestion: String,
}

/// Everything a successful analysis produces. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub filename: String,
    pub score: u32,
    pub skills: ExtractedSkills,
    pub score_breakdown: ScoreBreakdown,
    pub job_profile_matches: JobProfileMatch,
    pub job_comparison: Option<JobComparison>,
    pub ai_feedback: String,
    pub enhanced_bullets: Vec<BulletSuggestion>,
    /// Kept for the separate cover letter request.
    pub full_text: String,
    pub ai_powered: bool,
}

/// Reasons a whole analysis is abandoned. AI failures never end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Could not extract text from the file.")]
    ExtractionFailed,

    #[error("The uploaded file does not appear to be a valid resume.")]
    NotAResume,

    #[error("An unexpected error occurred during analysis.")]
    Internal(String),
}

impl AnalysisError {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::ExtractionFailed => "ExtractionFailed",
            AnalysisError::NotAResume => "NotAResume",
            AnalysisError::Internal(_) => "InternalError",
        }
    }
}
