//! Core enumerations shared by the classifier, scorer, and renderer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type of a survey question, inferred from its answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Answers are star ratings ("4 stars") or bare digits 1-5.
    StarRating,
    /// Answers come from the five-point satisfaction scale.
    SingleChoice,
    /// Answers are comma-separated lists of selected options.
    MultiSelect,
    /// Free text.
    Text,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::StarRating => "star_rating",
            QuestionType::SingleChoice => "single_choice",
            QuestionType::MultiSelect => "multi_select",
            QuestionType::Text => "text",
        }
    }
}

impl Default for QuestionType {
    fn default() -> Self {
        QuestionType::Text
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed five-point satisfaction vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SatisfactionLevel {
    #[serde(rename = "Very Satisfied")]
    VerySatisfied,
    #[serde(rename = "Satisfied")]
    Satisfied,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Dissatisfied")]
    Dissatisfied,
    #[serde(rename = "Very Dissatisfied")]
    VeryDissatisfied,
}

impl SatisfactionLevel {
    /// All levels, most satisfied first.
    pub const ALL: [SatisfactionLevel; 5] = [
        SatisfactionLevel::VerySatisfied,
        SatisfactionLevel::Satisfied,
        SatisfactionLevel::Neutral,
        SatisfactionLevel::Dissatisfied,
        SatisfactionLevel::VeryDissatisfied,
    ];

    /// Parse an answer against the vocabulary, ignoring case and surrounding
    /// whitespace.
    pub fn parse(answer: &str) -> Option<Self> {
        let answer = answer.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(answer))
    }

    pub fn label(&self) -> &'static str {
        match self {
            SatisfactionLevel::VerySatisfied => "Very Satisfied",
            SatisfactionLevel::Satisfied => "Satisfied",
            SatisfactionLevel::Neutral => "Neutral",
            SatisfactionLevel::Dissatisfied => "Dissatisfied",
            SatisfactionLevel::VeryDissatisfied => "Very Dissatisfied",
        }
    }

    /// Position on the 0-100 satisfaction scale.
    pub fn weight(&self) -> f64 {
        match self {
            SatisfactionLevel::VerySatisfied => 100.0,
            SatisfactionLevel::Satisfied => 75.0,
            SatisfactionLevel::Neutral => 50.0,
            SatisfactionLevel::Dissatisfied => 25.0,
            SatisfactionLevel::VeryDissatisfied => 0.0,
        }
    }
}

impl fmt::Display for SatisfactionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
