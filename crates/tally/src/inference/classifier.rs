//! Classifies survey questions from the answers they received.
//!
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. **StarRating**: any answer reads "N star(s)", or every answer is a bare
//!    digit 1-5.
//! 2. **MultiSelect**: any answer contains a comma.
//! 3. **SingleChoice**: every answer is on the five-point satisfaction scale.
//! 4. **Text**: everything else, including no answers at all.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::{QuestionType, SatisfactionLevel};

// The count must be a whole number on its own: "2/5 stars", "1.5 stars" and
// "-1 stars" do not match.
static STAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|[^\d./-])(\d+)\s*stars?\b").unwrap());

static BARE_RATING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-5]$").unwrap());

static BARE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// True if the answer is a bare digit 1-5.
pub fn is_bare_rating(answer: &str) -> bool {
    BARE_RATING.is_match(answer.trim())
}

/// Extract a star count from a bare number or a "N star(s)" answer.
pub fn parse_stars(answer: &str) -> Option<u32> {
    let answer = answer.trim();
    if BARE_NUMBER.is_match(answer) {
        return answer.parse().ok();
    }
    STAR_PATTERN
        .captures(answer)
        .and_then(|caps| caps[1].parse().ok())
}

/// Classify a question from the answers observed for it.
///
/// Blank samples are ignored; an empty sample set is [`QuestionType::Text`].
pub fn classify<S: AsRef<str>>(samples: &[S]) -> QuestionType {
    let samples: Vec<&str> = samples
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();

    if samples.is_empty() {
        return QuestionType::Text;
    }

    if samples.iter().any(|s| STAR_PATTERN.is_match(s))
        || samples.iter().all(|s| is_bare_rating(s))
    {
        return QuestionType::StarRating;
    }

    if samples.iter().any(|s| s.contains(',')) {
        return QuestionType::MultiSelect;
    }

    if samples.iter().all(|s| SatisfactionLevel::parse(s).is_some()) {
        return QuestionType::SingleChoice;
    }

    QuestionType::Text
}
