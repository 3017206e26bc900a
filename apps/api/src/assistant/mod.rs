//! Generative Assistant: AI feedback, bullet rewrites, job-fit insights and cover letters.
//!
//! Every operation works without a model: an absent capability, a failed call or a call that
//! outlives its budget all degrade to a deterministic fallback (rule-based tips, placeholder
//! text, an empty list or `None`). No error from the capability ever leaves this module.

pub mod bullets;
pub mod feedback;
pub mod prompts;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::analysis::heuristics::{extract_skills, percentage};
use crate::analysis::models::{BulletSuggestion, ExtractedSkills, JobComparison};
use crate::assistant::bullets::{accept_rewrite, rewrite_candidates};
use crate::assistant::feedback::{fallback_feedback, format_feedback};
use crate::assistant::prompts::*;
use crate::llm_client::{ChatCompletion, ChatMessage, CompletionParams, LlmError};

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Holds the optional chat capability. Cheap to clone; safe to share across requests.
#[derive(Clone)]
pub struct GenerativeAssistant {
    capability: Option<Arc<dyn ChatCompletion>>,
    call_timeout: Duration,
}

impl GenerativeAssistant {
    pub fn new(capability: Arc<dyn ChatCompletion>, call_timeout: Duration) -> Self {
        Self {
            capability: Some(capability),
            call_timeout,
        }
    }

    /// An assistant with no capability; every operation takes its fallback path.
    pub fn disabled() -> Self {
        Self {
            capability: None,
            call_timeout: Duration::ZERO,
        }
    }

    pub fn is_available(&self) -> bool {
        self.capability.is_some()
    }

    async fn complete(&self, messages: Vec<ChatMessage>, max_tokens: u32) -> Result<String, LlmError> {
        let capability = self.capability.as_ref().ok_or(LlmError::Unavailable)?;
        let params = CompletionParams::with_max_tokens(max_tokens);
        debug!(
            "Sending {} messages ({} chars) to LLM",
            messages.len(),
            messages.iter().map(|m| m.content.len()).sum::<usize>()
        );

        tokio::time::timeout(self.call_timeout, capability.chat_complete(&messages, params))
            .await
            .unwrap_or(Err(LlmError::Timeout(self.call_timeout)))
    }

    /// Five bulleted tips from the model, or rule-based tips when it cannot answer.
    pub async fn generate_feedback(&self, text: &str, skills: &ExtractedSkills, score: u32) -> String {
        let score_text = score.to_string();
        let prompt = fill_template(
            FEEDBACK_PROMPT_TEMPLATE,
            &[
                ("score", score_text.as_str()),
                ("resume_excerpt", excerpt(text, FEEDBACK_EXCERPT_CHARS)),
            ],
        );
        let messages = vec![ChatMessage::system(FEEDBACK_SYSTEM), ChatMessage::user(prompt)];

        match self.complete(messages, FEEDBACK_MAX_TOKENS).await {
            Ok(reply) => match format_feedback(&reply) {
                Some(feedback) => return feedback,
                None => warn!("AI feedback reply had no usable lines, using rule-based feedback"),
            },
            Err(LlmError::Unavailable) => {
                debug!("AI feedback skipped: capability not configured")
            }
            Err(e) => warn!("AI feedback failed, using rule-based feedback: {e}"),
        }

        fallback_feedback(skills, score)
    }

    /// Compares lexicon skills in the resume and job description. `None` for a blank
    /// description. The insight text falls back to a fixed placeholder.
    pub async fn compare_to_job_description(
        &self,
        resume_text: &str,
        jd_text: &str,
        resume_technical: &[String],
    ) -> Option<JobComparison> {
        if jd_text.trim().is_empty() {
            return None;
        }

        let jd_skills = extract_skills(jd_text).technical;
        let (matching_skills, missing_skills): (Vec<String>, Vec<String>) = jd_skills
            .iter()
            .cloned()
            .partition(|skill| resume_technical.contains(skill));
        let match_score = percentage(matching_skills.len(), jd_skills.len());

        let mut ai_insights = INSIGHTS_UNAVAILABLE.to_string();
        if self.is_available() {
            let prompt = fill_template(
                INSIGHTS_PROMPT_TEMPLATE,
                &[
                    ("resume_excerpt", excerpt(resume_text, COMPARISON_EXCERPT_CHARS)),
                    ("jd_excerpt", excerpt(jd_text, COMPARISON_EXCERPT_CHARS)),
                ],
            );
            let messages = vec![ChatMessage::system(INSIGHTS_SYSTEM), ChatMessage::user(prompt)];

            match self.complete(messages, INSIGHTS_MAX_TOKENS).await {
                Ok(insights) => ai_insights = insights,
                Err(e) => warn!("Job comparison insights failed: {e}"),
            }
        }

        Some(JobComparison {
            match_score,
            matching_skills,
            missing_skills,
            ai_insights,
            jd_text: jd_text.to_string(),
        })
    }

    /// Rewrites of up to five resume bullets. Empty without a capability.
    pub async fn enhance_bullet_points(&self, text: &str) -> Vec<BulletSuggestion> {
        if !self.is_available() {
            return Vec::new();
        }

        let candidates = rewrite_candidates(text);
        let mut suggestions = Vec::new();

        for bullet in candidates {
            let messages = vec![
                ChatMessage::system(BULLET_SYSTEM),
                ChatMessage::user(fill_template(
                    BULLET_PROMPT_TEMPLATE,
                    &[("bullet", bullet.as_str())],
                )),
            ];

            match self.complete(messages, BULLET_MAX_TOKENS).await {
                Ok(reply) => {
                    if let Some(suggestion) = accept_rewrite(&bullet, &reply) {
                        suggestions.push(BulletSuggestion {
                            original: bullet,
                            suggestion,
                        });
                    }
                }
                Err(e) => warn!("Bullet rewrite failed, skipping: {e}"),
            }
        }

        suggestions
    }

    /// Drafts a cover letter from the resume and, when given, the job description.
    /// `None` without a capability or when the call fails.
    pub async fn generate_cover_letter(&self, resume_text: &str, jd_text: Option<&str>) -> Option<String> {
        if !self.is_available() {
            return None;
        }

        let jd_section = match jd_text.map(str::trim).filter(|jd| !jd.is_empty()) {
            Some(jd) => excerpt(jd, COVER_LETTER_JD_CHARS),
            None => COVER_LETTER_NO_JD,
        };
        let prompt = fill_template(
            COVER_LETTER_PROMPT_TEMPLATE,
            &[
                ("resume_excerpt", excerpt(resume_text, COVER_LETTER_RESUME_CHARS)),
                ("jd_section", jd_section),
            ],
        );
        let messages = vec![ChatMessage::system(COVER_LETTER_SYSTEM), ChatMessage::user(prompt)];

        match self.complete(messages, COVER_LETTER_MAX_TOKENS).await {
            Ok(letter) => {
                info!("Cover letter generated ({} chars)", letter.len());
                Some(letter)
            }
            Err(e) => {
                warn!("Cover letter generation failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{HangingLlm, Scripted, ScriptedLlm};
    use crate::llm_client::Role;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn assistant_with(llm: &Arc<ScriptedLlm>) -> GenerativeAssistant {
        GenerativeAssistant::new(llm.clone(), TIMEOUT)
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn few_skills() -> ExtractedSkills {
        ExtractedSkills {
            technical: strings(&["python"]),
            soft: vec![],
        }
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        assert_eq!(excerpt("héllo wörld", 4), "héll");
        assert_eq!(excerpt("short", 100), "short");
        assert_eq!(excerpt("", 3), "");
    }

    #[tokio::test]
    async fn test_unavailable_assistant_degrades_everywhere() {
        let assistant = GenerativeAssistant::disabled();
        assert!(!assistant.is_available());

        let feedback = assistant.generate_feedback("text", &few_skills(), 40).await;
        assert_eq!(feedback, fallback_feedback(&few_skills(), 40));

        let bullets = assistant
            .enhance_bullet_points("- Built the internal billing service from scratch")
            .await;
        assert!(bullets.is_empty());

        assert_eq!(assistant.generate_cover_letter("resume", Some("jd")).await, None);

        let comparison = assistant
            .compare_to_job_description("resume", "Need python and docker", &strings(&["python"]))
            .await
            .unwrap();
        assert_eq!(comparison.ai_insights, INSIGHTS_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_feedback_formats_model_reply() {
        let llm = Arc::new(ScriptedLlm::replying([
            "Here are your tips:\n1) first\n- Quantify results\n* Add a summary\n\n• Trim to one page\n- Use keywords\n- Extra tip",
        ]));
        let assistant = assistant_with(&llm);
        let long_text = "x".repeat(3000);

        let feedback = assistant.generate_feedback(&long_text, &few_skills(), 55).await;
        assert_eq!(feedback.lines().count(), 5);
        assert!(feedback.lines().all(|l| l.starts_with("• ")));
        assert!(feedback.contains("• Quantify results"));
        assert!(!feedback.contains("Extra tip"));

        let requests = llm.requests();
        assert_eq!(requests.len(), 1);
        let (messages, params) = &requests[0];
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[1].content.contains("55/100"));
        assert!(messages[1].content.contains(&"x".repeat(1500)));
        assert!(!messages[1].content.contains(&"x".repeat(1501)));
        assert_eq!(params.max_tokens, FEEDBACK_MAX_TOKENS);
    }

    #[tokio::test]
    async fn test_feedback_falls_back_on_failure() {
        let llm = Arc::new(ScriptedLlm::new(vec![Scripted::Fail]));
        let assistant = assistant_with(&llm);

        let feedback = assistant.generate_feedback("text", &few_skills(), 90).await;
        assert_eq!(feedback, fallback_feedback(&few_skills(), 90));
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_feedback_falls_back_on_timeout() {
        let assistant = GenerativeAssistant::new(Arc::new(HangingLlm), TIMEOUT);
        let feedback = assistant.generate_feedback("text", &few_skills(), 90).await;
        assert_eq!(feedback, fallback_feedback(&few_skills(), 90));
    }

    #[tokio::test]
    async fn test_comparison_blank_description_is_none() {
        let llm = Arc::new(ScriptedLlm::replying(["unused"]));
        let assistant = assistant_with(&llm);

        assert!(assistant
            .compare_to_job_description("resume", "   \n", &strings(&["python"]))
            .await
            .is_none());
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_comparison_full_match() {
        let llm = Arc::new(ScriptedLlm::replying(["Strengths... Gaps... Tip..."]));
        let assistant = assistant_with(&llm);
        let resume_skills = strings(&["docker", "python", "sql"]);
        let jd = "We want Python, SQL and Docker experience.";

        let comparison = assistant
            .compare_to_job_description("my resume", jd, &resume_skills)
            .await
            .unwrap();
        assert_eq!(comparison.match_score, 100);
        assert_eq!(comparison.matching_skills, resume_skills);
        assert!(comparison.missing_skills.is_empty());
        assert_eq!(comparison.ai_insights, "Strengths... Gaps... Tip...");
        assert_eq!(comparison.jd_text, jd);
    }

    #[tokio::test]
    async fn test_comparison_partial_match_and_failed_insights() {
        let llm = Arc::new(ScriptedLlm::new(vec![Scripted::Fail]));
        let assistant = assistant_with(&llm);
        let jd = format!("Kubernetes, AWS, Python and Terraform. {}", "y".repeat(2000));

        let comparison = assistant
            .compare_to_job_description("resume text", &jd, &strings(&["python", "rust"]))
            .await
            .unwrap();
        assert_eq!(comparison.matching_skills, strings(&["python"]));
        assert_eq!(comparison.missing_skills, strings(&["aws", "kubernetes", "terraform"]));
        assert_eq!(comparison.match_score, 25);
        assert_eq!(comparison.ai_insights, INSIGHTS_UNAVAILABLE);

        let (messages, params) = &llm.requests()[0];
        assert!(!messages[1].content.contains(&"y".repeat(800)));
        assert_eq!(params.max_tokens, INSIGHTS_MAX_TOKENS);
    }

    #[tokio::test]
    async fn test_comparison_without_known_skills_scores_zero() {
        let assistant = GenerativeAssistant::disabled();
        let comparison = assistant
            .compare_to_job_description("resume", "Friendly barista wanted", &[])
            .await
            .unwrap();
        assert_eq!(comparison.match_score, 0);
        assert!(comparison.matching_skills.is_empty());
        assert!(comparison.missing_skills.is_empty());
    }

    #[tokio::test]
    async fn test_bullets_keep_only_distinct_successful_rewrites() {
        let text = "Experience\n\
            - Worked on the billing service for payments\n\
            - Wrote docs for the platform team members\n\
            - Short one\n\
            - Fixed bugs reported by customers every week\n";
        let llm = Arc::new(ScriptedLlm::new(vec![
            Scripted::Reply("* Rebuilt billing service, cutting failed payments by 20%".into()),
            Scripted::Reply("wrote docs for the platform team members".into()),
            Scripted::Fail,
        ]));
        let assistant = assistant_with(&llm);

        let suggestions = assistant.enhance_bullet_points(text).await;
        assert_eq!(llm.call_count(), 3);
        assert_eq!(
            suggestions,
            vec![BulletSuggestion {
                original: "Worked on the billing service for payments".into(),
                suggestion: "Rebuilt billing service, cutting failed payments by 20%".into(),
            }]
        );
        let (messages, params) = &llm.requests()[0];
        assert!(messages[1]
            .content
            .contains("\"Worked on the billing service for payments\""));
        assert_eq!(params.max_tokens, BULLET_MAX_TOKENS);
    }

    #[tokio::test]
    async fn test_bullets_without_bullet_lines_make_no_calls() {
        let llm = Arc::new(ScriptedLlm::replying(["unused"]));
        let assistant = assistant_with(&llm);

        assert!(assistant.enhance_bullet_points("Plain prose only.").await.is_empty());
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_comparison_prompt_keeps_marker_text_from_resume() {
        let llm = Arc::new(ScriptedLlm::replying(["Insight"]));
        let assistant = assistant_with(&llm);

        assistant
            .compare_to_job_description("Template tip: {jd_excerpt}", "Need Python", &[])
            .await
            .unwrap();

        let (messages, _) = &llm.requests()[0];
        assert!(messages[1].content.contains("**Resume:**\nTemplate tip: {jd_excerpt}\n"));
        assert_eq!(messages[1].content.matches("Need Python").count(), 1);
    }

    #[tokio::test]
    async fn test_cover_letter_prompt_keeps_marker_text_from_resume() {
        let llm = Arc::new(ScriptedLlm::replying(["Dear team"]));
        let assistant = assistant_with(&llm);

        assistant
            .generate_cover_letter("See {jd_section} below", Some("Platform engineer"))
            .await
            .unwrap();

        let (messages, _) = &llm.requests()[0];
        assert!(messages[1].content.contains("See {jd_section} below"));
        assert_eq!(messages[1].content.matches("Platform engineer").count(), 1);
    }

    #[tokio::test]
    async fn test_cover_letter_with_job_description() {
        let llm = Arc::new(ScriptedLlm::replying(["Dear Hiring Manager, ..."]));
        let assistant = assistant_with(&llm);
        let resume = "r".repeat(2500);

        let letter = assistant
            .generate_cover_letter(&resume, Some("Backend engineer, Rust"))
            .await;
        assert_eq!(letter.as_deref(), Some("Dear Hiring Manager, ..."));

        let (messages, params) = &llm.requests()[0];
        assert_eq!(messages[0].content, COVER_LETTER_SYSTEM);
        assert!(messages[1].content.contains("Backend engineer, Rust"));
        assert!(messages[1].content.contains(&"r".repeat(2000)));
        assert!(!messages[1].content.contains(&"r".repeat(2001)));
        assert!(!messages[1].content.contains(COVER_LETTER_NO_JD));
        assert_eq!(params.max_tokens, COVER_LETTER_MAX_TOKENS);
    }

    #[tokio::test]
    async fn test_cover_letter_without_job_description() {
        let llm = Arc::new(ScriptedLlm::replying(["letter"]));
        let assistant = assistant_with(&llm);

        assert!(assistant.generate_cover_letter("resume", Some("  ")).await.is_some());
        assert!(llm.requests()[0].0[1].content.contains(COVER_LETTER_NO_JD));
    }

    #[tokio::test]
    async fn test_cover_letter_failure_is_none() {
        let llm = Arc::new(ScriptedLlm::failing());
        let assistant = assistant_with(&llm);
        assert_eq!(assistant.generate_cover_letter("resume", None).await, None);
    }
}
