//! Per-question tallies.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::department::ScoreTotals;
use super::types::QuestionType;

/// Accumulated answer distribution for one question within one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionTally {
    /// Question prompt, as first seen.
    pub question_text: String,
    /// Type assigned when the question was first classified.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Option label to number of times it was selected, in first-seen order.
    pub option_counts: IndexMap<String, usize>,
    /// Number of answers folded into this tally.
    pub total_answered: usize,
    /// Score contributions from this question alone.
    pub scores: ScoreTotals,
    /// Mean star value over parseable star answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_stars: Option<f64>,
    /// First distinct free-text answers, for display.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<String>,
    #[serde(skip)]
    star_total: u64,
    #[serde(skip)]
    star_count: usize,
}

impl QuestionTally {
    /// Create an empty tally for a classified question.
    pub fn new(question_text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            question_text: question_text.into(),
            question_type,
            option_counts: IndexMap::new(),
            total_answered: 0,
            scores: ScoreTotals::default(),
            mean_stars: None,
            samples: Vec::new(),
            star_total: 0,
            star_count: 0,
        }
    }

    /// Count one selection of `option`.
    pub fn count_option(&mut self, option: &str) {
        *self.option_counts.entry(option.to_string()).or_insert(0) += 1;
    }

    /// Keep a free-text answer as a display sample, up to `limit` distinct ones.
    pub fn keep_sample(&mut self, answer: &str, limit: usize) {
        if self.samples.len() < limit && !self.samples.iter().any(|s| s == answer) {
            self.samples.push(answer.to_string());
        }
    }

    /// Record a parsed star value.
    pub fn record_stars(&mut self, stars: u32) {
        self.star_total += u64::from(stars);
        self.star_count += 1;
        self.mean_stars = Some(self.star_total as f64 / self.star_count as f64);
    }

    /// Options sorted by count, highest first. Ties keep first-seen order.
    pub fn options_by_count(&self) -> Vec<(&str, usize)> {
        let mut options: Vec<(&str, usize)> = self
            .option_counts
            .iter()
            .map(|(k, &v)| (k.as_str(), v))
            .collect();
        options.sort_by(|a, b| b.1.cmp(&a.1));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_option_preserves_first_seen_order() {
        let mut tally = QuestionTally::new("Colors?", QuestionType::MultiSelect);
        tally.count_option("Red");
        tally.count_option("Blue");
        tally.count_option("Red");

        let keys: Vec<&str> = tally.option_counts.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Red", "Blue"]);
        assert_eq!(tally.option_counts["Red"], 2);
    }

    #[test]
    fn test_options_by_count() {
        let mut tally = QuestionTally::new("Colors?", QuestionType::MultiSelect);
        for option in ["Green", "Red", "Blue", "Red", "Blue"] {
            tally.count_option(option);
        }
        assert_eq!(
            tally.options_by_count(),
            vec![("Red", 2), ("Blue", 2), ("Green", 1)]
        );
    }

    #[test]
    fn test_keep_sample_limit_and_dedup() {
        let mut tally = QuestionTally::new("Comments", QuestionType::Text);
        for answer in ["ok", "ok", "fine", "great"] {
            tally.keep_sample(answer, 2);
        }
        assert_eq!(tally.samples, vec!["ok", "fine"]);
    }

    #[test]
    fn test_mean_stars() {
        let mut tally = QuestionTally::new("Rate us", QuestionType::StarRating);
        assert_eq!(tally.mean_stars, None);
        tally.record_stars(4);
        tally.record_stars(5);
        assert_eq!(tally.mean_stars, Some(4.5));
    }
}
