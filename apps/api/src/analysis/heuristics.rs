//! Rule-based resume heuristics: resume detection, skill extraction, ATS scoring and
//! job-profile matching. Everything here is synchronous, deterministic and side-effect free.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::lexicon::{
    EDUCATION_KEYWORDS, EXPERIENCE_KEYWORDS, JOB_PROFILES, RESUME_SECTIONS, SOFT_SKILLS,
    TECHNICAL_SKILLS,
};
use crate::analysis::models::{ExtractedSkills, JobProfileMatch, ScoreBreakdown};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid regex")
});

/// Optional international prefix, optional parentheses around the area code,
/// `-`, `.` or whitespace as separators.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex")
});

const MIN_SECTION_KEYWORDS: usize = 2;
const MIN_WORDS_EXCLUSIVE: usize = 50;

pub fn has_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    PHONE_PATTERN.is_match(text)
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of section keywords present anywhere in `text_lower` (substring match).
fn count_section_keywords(text_lower: &str) -> usize {
    RESUME_SECTIONS
        .iter()
        .filter(|section| text_lower.contains(*section))
        .count()
}

/// Gate applied before any analysis: at least two section keywords, some contact detail
/// and more than fifty words.
pub fn is_resume(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    let section_count = count_section_keywords(&text_lower);
    let has_contact = has_email(text) || has_phone(text);

    section_count >= MIN_SECTION_KEYWORDS && has_contact && word_count(text) > MIN_WORDS_EXCLUSIVE
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when `term` occurs in `haystack` with no word character directly on either side.
/// Works for terms that start or end with symbols such as `c++` or `.net`.
pub fn contains_whole_word(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    haystack.match_indices(term).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + term.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

/// Lexicon tables are sorted and unique, so the result is too.
fn matching_terms(text_lower: &str, lexicon: &[&str]) -> Vec<String> {
    lexicon
        .iter()
        .filter(|term| contains_whole_word(text_lower, term))
        .map(|term| term.to_string())
        .collect()
}

pub fn extract_skills(text: &str) -> ExtractedSkills {
    let text_lower = text.to_lowercase();
    ExtractedSkills {
        technical: matching_terms(&text_lower, TECHNICAL_SKILLS),
        soft: matching_terms(&text_lower, SOFT_SKILLS),
    }
}

/// Applies the fixed ATS rubric and returns `(total, breakdown)`.
pub fn calculate_score_and_breakdown(text: &str, skills: &ExtractedSkills) -> (u32, ScoreBreakdown) {
    let text_lower = text.to_lowercase();

    let mut contact_info = 0;
    if has_email(text) {
        contact_info += 5;
    }
    if has_phone(text) {
        contact_info += 5;
    }

    let content = (word_count(text) / 30).min(ScoreBreakdown::CONTENT_CAP as usize) as u32;

    let education = if EDUCATION_KEYWORDS.iter().any(|k| text_lower.contains(k)) {
        ScoreBreakdown::EDUCATION_CAP
    } else {
        0
    };

    let experience = if EXPERIENCE_KEYWORDS.iter().any(|k| text_lower.contains(k)) {
        ScoreBreakdown::EXPERIENCE_CAP
    } else {
        0
    };

    let skills_score = (skills.total() * 2).min(ScoreBreakdown::SKILLS_CAP as usize) as u32;

    let structure = (count_section_keywords(&text_lower) * 4)
        .min(ScoreBreakdown::STRUCTURE_CAP as usize) as u32;

    let breakdown = ScoreBreakdown {
        contact_info: contact_info.min(ScoreBreakdown::CONTACT_INFO_CAP),
        content,
        education,
        experience,
        skills: skills_score,
        structure,
    };

    (breakdown.total(), breakdown)
}

/// Integer percentage, truncated toward zero and capped at 100. Empty `whole` gives 0.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part * 100 / whole) as u32).min(100)
}

pub fn calculate_job_profile_match(technical_skills: &[String]) -> JobProfileMatch {
    JOB_PROFILES
        .iter()
        .map(|(profile, required)| {
            let matched = required
                .iter()
                .filter(|skill| technical_skills.iter().any(|s| s == *skill))
                .count();
            (profile.to_string(), percentage(matched, required.len()))
        })
        .collect()
}
