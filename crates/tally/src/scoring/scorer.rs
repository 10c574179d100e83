//! Maps one answer of a classified question to a score contribution.
//!
//! | Type         | Answer              | Score                         |
//! |--------------|---------------------|-------------------------------|
//! | StarRating   | stars >= 3          | satisfied(stars / 5 * 100)    |
//! | StarRating   | stars < 3           | dissatisfied((5 - stars) / 5 * 100) |
//! | SingleChoice | (Very) Satisfied    | satisfied(weight)             |
//! | SingleChoice | (Very) Dissatisfied | dissatisfied(100 - weight)    |
//! | SingleChoice | Neutral             | none                          |
//! | MultiSelect, Text | anything       | none                          |
//!
//! "None" means the answer feeds neither metric, which is not the same as a
//! zero-valued contribution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TallyError};
use crate::inference::parse_stars;
use crate::schema::{QuestionType, SatisfactionLevel};

/// Contribution of a single answer. Amounts are exact, in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Score {
    None,
    Satisfied(f64),
    Dissatisfied(f64),
}

impl Score {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Score::Satisfied(a) | Score::Dissatisfied(a) => Some(*a),
            Score::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Score::None)
    }
}

/// Score an answer, rejecting amounts outside 0..=100.
pub fn try_score(question_type: QuestionType, answer: &str) -> Result<Score> {
    let score = match question_type {
        QuestionType::StarRating => match parse_stars(answer) {
            Some(stars) if stars >= 3 => Score::Satisfied(f64::from(stars) * 100.0 / 5.0),
            Some(stars) => Score::Dissatisfied(f64::from(5 - stars) * 100.0 / 5.0),
            None => Score::None,
        },
        QuestionType::SingleChoice => match SatisfactionLevel::parse(answer) {
            Some(level @ (SatisfactionLevel::VerySatisfied | SatisfactionLevel::Satisfied)) => {
                Score::Satisfied(level.weight())
            }
            Some(level @ (SatisfactionLevel::Dissatisfied | SatisfactionLevel::VeryDissatisfied)) => {
                Score::Dissatisfied(100.0 - level.weight())
            }
            Some(SatisfactionLevel::Neutral) | None => Score::None,
        },
        QuestionType::MultiSelect | QuestionType::Text => Score::None,
    };

    match score.amount() {
        Some(amount) if !(0.0..=100.0).contains(&amount) => {
            Err(TallyError::ScoringOverflow { amount })
        }
        _ => Ok(score),
    }
}

/// Score an answer. Out-of-range amounts are treated as no contribution.
pub fn score(question_type: QuestionType, answer: &str) -> Score {
    try_score(question_type, answer).unwrap_or_else(|e| {
        debug!(answer, %question_type, error = %e, "discarding out-of-range score");
        Score::None
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_rating_scores() {
        assert_eq!(score(QuestionType::StarRating, "5"), Score::Satisfied(100.0));
        assert_eq!(score(QuestionType::StarRating, "3 stars"), Score::Satisfied(60.0));
        assert_eq!(score(QuestionType::StarRating, "2 stars"), Score::Dissatisfied(60.0));
        assert_eq!(score(QuestionType::StarRating, "1"), Score::Dissatisfied(80.0));
        assert_eq!(score(QuestionType::StarRating, "0 stars"), Score::Dissatisfied(100.0));
    }

    #[test]
    fn test_star_rating_unparseable_is_none() {
        assert_eq!(score(QuestionType::StarRating, "excellent"), Score::None);
        assert_eq!(score(QuestionType::StarRating, ""), Score::None);
    }

    #[test]
    fn test_star_rating_out_of_range_is_guarded() {
        assert!(matches!(
            try_score(QuestionType::StarRating, "7 stars"),
            Err(TallyError::ScoringOverflow { .. })
        ));
        assert_eq!(score(QuestionType::StarRating, "7 stars"), Score::None);
    }

    #[test]
    fn test_star_rating_partial_counts_are_none() {
        assert_eq!(score(QuestionType::StarRating, "2/5 stars"), Score::None);
        assert_eq!(score(QuestionType::StarRating, "1.5 stars"), Score::None);
        assert_eq!(score(QuestionType::StarRating, "-1 stars"), Score::None);
    }

    #[test]
    fn test_single_choice_scores() {
        assert_eq!(score(QuestionType::SingleChoice, "Very Satisfied"), Score::Satisfied(100.0));
        assert_eq!(score(QuestionType::SingleChoice, "Satisfied"), Score::Satisfied(75.0));
        assert_eq!(score(QuestionType::SingleChoice, "Neutral"), Score::None);
        assert_eq!(score(QuestionType::SingleChoice, "Dissatisfied"), Score::Dissatisfied(75.0));
        assert_eq!(
            score(QuestionType::SingleChoice, "Very Dissatisfied"),
            Score::Dissatisfied(100.0)
        );
        assert_eq!(score(QuestionType::SingleChoice, "Whatever"), Score::None);
    }

    #[test]
    fn test_unscored_types() {
        assert_eq!(score(QuestionType::MultiSelect, "5"), Score::None);
        assert_eq!(score(QuestionType::Text, "Very Satisfied"), Score::None);
    }
}
