//! Axum route handlers for the Analysis API.

use std::path::Path;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::models::AnalysisReport;
use crate::errors::AppError;
use crate::extraction::is_supported;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub ai_available: bool,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub jd_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub success: bool,
    pub cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart upload: `resume` (file) and optional `job_description` (text).
/// The upload lives in a temporary directory that is removed when the request ends.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                upload = Some((file_name, data));
            }
            Some("job_description") => job_description = field.text().await?,
            _ => {}
        }
    }

    let (original_name, data) = upload
        .filter(|(name, _)| !name.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No file selected".to_string()))?;

    if !is_supported(Path::new(&original_name)) {
        return Err(AppError::Validation(
            "Invalid file type. Please upload a PDF, DOC, DOCX or TXT file.".to_string(),
        ));
    }

    // Sanitising can eat the whole stem or the extension of a non-ASCII name.
    let filename = sanitize_filename(&original_name);
    if filename.is_empty() || !is_supported(Path::new(&filename)) {
        return Err(AppError::Validation("Invalid filename".to_string()));
    }

    let upload_dir = tempfile::tempdir().context("Failed to create upload directory")?;
    let path = upload_dir.path().join(&filename);
    tokio::fs::write(&path, &data)
        .await
        .with_context(|| format!("Failed to store upload {filename}"))?;
    info!("Received {filename} ({} bytes)", data.len());

    let job_description = job_description.trim();
    let job_description = (!job_description.is_empty()).then_some(job_description);

    let report = state.analyzer.analyze(&path, job_description).await?;

    Ok(Json(AnalyzeResponse {
        success: true,
        ai_available: state.analyzer.ai_available(),
        report,
    }))
}

/// POST /api/v1/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if !state.analyzer.ai_available() {
        return Err(AppError::ServiceUnavailable(
            "AI features are not available.".to_string(),
        ));
    }
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("Resume text is required.".to_string()));
    }

    let cover_letter = state
        .analyzer
        .generate_cover_letter(&request.resume_text, request.jd_text.as_deref())
        .await
        .ok_or_else(|| AppError::Llm("Failed to generate cover letter.".to_string()))?;

    Ok(Json(CoverLetterResponse {
        success: true,
        cover_letter,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Reduces a client-supplied name to a safe basename: directory parts are dropped,
/// spaces become `_`, and anything outside `[A-Za-z0-9._-]` is removed.
/// Leading dots and underscores are stripped so the result is never hidden.
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    cleaned.trim_start_matches(['.', '_']).to_string()
}
