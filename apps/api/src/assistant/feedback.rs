use crate::analysis::models::ExtractedSkills;

pub const BULLET: &str = "•";
pub const MAX_FEEDBACK_ITEMS: usize = 5;

const MIN_TECHNICAL_SKILLS: usize = 5;
const MIN_SOFT_SKILLS: usize = 3;
const ACTION_VERB_SCORE_THRESHOLD: u32 = 70;

const GENERIC_TIPS: &[&str] = &[
    "Proofread carefully for any spelling or grammar errors.",
    "Keep your resume concise and easy to read, ideally one page.",
];

/// Markdown and list markers a model tends to put in front of a line.
const LEADING_MARKERS: &[char] = &['*', '-', '•', '#', '>', ' ', '\t'];

pub fn strip_leading_markers(line: &str) -> &str {
    line.trim_start_matches(LEADING_MARKERS).trim()
}

fn bulleted(tip: &str) -> String {
    format!("{BULLET} {tip}")
}

/// Normalises a model reply into at most five `• tip` lines.
/// Returns `None` when the reply has no usable lines.
pub fn format_feedback(reply: &str) -> Option<String> {
    let lines: Vec<String> = reply
        .lines()
        .map(strip_leading_markers)
        .filter(|line| !line.is_empty())
        .take(MAX_FEEDBACK_ITEMS)
        .map(bulleted)
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Rule-based tips used whenever the model is unavailable or fails. Never empty.
pub fn fallback_feedback(skills: &ExtractedSkills, score: u32) -> String {
    let mut tips: Vec<&str> = Vec::new();

    if skills.technical.len() < MIN_TECHNICAL_SKILLS {
        tips.push("Add more relevant technical skills from job descriptions.");
    }
    if skills.soft.len() < MIN_SOFT_SKILLS {
        tips.push("Include important soft skills like leadership or teamwork.");
    }
    if score < ACTION_VERB_SCORE_THRESHOLD {
        tips.push(
            "Use action verbs (e.g., 'Developed,' 'Managed') and quantify achievements with numbers.",
        );
    }
    for tip in GENERIC_TIPS {
        if tips.len() < MAX_FEEDBACK_ITEMS {
            tips.push(tip);
        }
    }

    tips.into_iter().map(bulleted).collect::<Vec<_>>().join("\n")
}
