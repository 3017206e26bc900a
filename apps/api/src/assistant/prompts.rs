// Prompt constants for the generative assistant.
// Templates use `{placeholder}` markers that are filled with `fill_template` before sending.

/// Input excerpt limits, in characters.
pub const FEEDBACK_EXCERPT_CHARS: usize = 1500;
pub const COMPARISON_EXCERPT_CHARS: usize = 800;
pub const COVER_LETTER_RESUME_CHARS: usize = 2000;
pub const COVER_LETTER_JD_CHARS: usize = 1500;

pub const FEEDBACK_MAX_TOKENS: u32 = 400;
pub const INSIGHTS_MAX_TOKENS: u32 = 300;
pub const BULLET_MAX_TOKENS: u32 = 100;
pub const COVER_LETTER_MAX_TOKENS: u32 = 700;

pub const FEEDBACK_SYSTEM: &str = "You are a helpful and professional resume coach. \
    Your task is to provide exactly 5 specific, actionable tips to improve a resume \
    based on its content and score. Each tip must start with a bullet point.";

/// Replace: {score}, {resume_excerpt}
pub const FEEDBACK_PROMPT_TEMPLATE: &str = "Please analyze this resume and give me 5 actionable \
improvements. The resume has an ATS score of {score}/100. Here is the resume text:

---
{resume_excerpt}
---";

pub const INSIGHTS_SYSTEM: &str = "You are a career advisor. You will receive a resume and a \
    job description. Provide 3 concise insights: \
    1. Key strengths for the role. \
    2. Critical gaps to address. \
    3. One actionable tip to improve the candidate's fit for this specific job.";

/// Replace: {resume_excerpt}, {jd_excerpt}
pub const INSIGHTS_PROMPT_TEMPLATE: &str = "Compare this resume snippet with the job description.

**Resume:**
{resume_excerpt}

**Job Description:**
{jd_excerpt}

Based on this, what are the key strengths, critical gaps, and one actionable tip?";

pub const INSIGHTS_UNAVAILABLE: &str = "AI insights are unavailable at this moment.";

pub const BULLET_SYSTEM: &str = "You are an expert resume editor. Rewrite a single resume \
    bullet point to be more impactful. Use a strong action verb, focus on quantifiable \
    results, and keep it concise (under 25 words). Reply with the rewritten bullet only.";

/// Replace: {bullet}
pub const BULLET_PROMPT_TEMPLATE: &str = "Rewrite this bullet point: \"{bullet}\"";

pub const COVER_LETTER_SYSTEM: &str =
    "You are a world-class career coach specializing in writing persuasive cover letters.";

/// Replace: {resume_excerpt}, {jd_section}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = "Based on the following resume and job \
description, write a professional and compelling cover letter. The tone should be enthusiastic \
but formal. The letter should highlight 2-3 key skills or experiences from the resume that \
directly align with the requirements in the job description. Structure it with a clear \
introduction, body, and conclusion.

--- RESUME ---
{resume_excerpt}

--- JOB DESCRIPTION ---
{jd_section}

Generate the cover letter now.";

pub const COVER_LETTER_NO_JD: &str = "(No job description provided. Write a general-purpose \
cover letter for a role in the candidate's field.)";

/// Substitutes `{key}` markers in a single left-to-right pass. Inserted values are never
/// rescanned, so user text that happens to contain a marker is sent verbatim.
/// Unknown markers are left as they are.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        filled.push_str(&rest[..start]);
        let marker = &rest[start + 1..];
        let known = values
            .iter()
            .find(|(key, _)| marker.starts_with(key) && marker[key.len()..].starts_with('}'));

        match known {
            Some((key, value)) => {
                filled.push_str(value);
                rest = &marker[key.len() + 1..];
            }
            None => {
                filled.push('{');
                rest = marker;
            }
        }
    }

    filled.push_str(rest);
    filled
}
