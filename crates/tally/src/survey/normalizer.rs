//! Row normalization: raw column/value rows into [`Response`]s.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::response::{Answer, Response};
use crate::error::{Result, TallyError};
use crate::input::RawRow;

static PAIR_COLUMN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(question|answer)\s*(\d+)$").unwrap());

/// Column holding the respondent's department. Matched like the pair
/// columns: trimmed and ignoring case.
pub const DEPARTMENT_COLUMN: &str = "Department";

/// Normalizer configuration.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Answer text meaning the respondent skipped the question.
    pub no_answer_sentinel: String,
    /// Department used when the column is missing or blank.
    pub unknown_department: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            no_answer_sentinel: "No answer".to_string(),
            unknown_department: "Unknown".to_string(),
        }
    }
}

#[derive(Default)]
struct Pair<'a> {
    question: Option<&'a str>,
    answer: Option<&'a str>,
}

/// Converts raw rows into responses.
#[derive(Debug, Clone, Default)]
pub struct RowNormalizer {
    config: NormalizerConfig,
}

impl RowNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalize one row. `row_number` is 1-based and only used in errors.
    ///
    /// Pairs with a blank side or a "No answer" answer are dropped. The row
    /// is malformed only when no pair survives.
    pub fn normalize(&self, row: &RawRow, row_number: usize) -> Result<Response> {
        let mut department = None;
        let mut pairs: BTreeMap<u32, Pair<'_>> = BTreeMap::new();
        for (column, value) in row.iter() {
            let column = column.trim();
            if column.eq_ignore_ascii_case(DEPARTMENT_COLUMN) {
                department = Some(value.trim()).filter(|d| !d.is_empty());
                continue;
            }
            let Some(caps) = PAIR_COLUMN.captures(column) else {
                continue;
            };
            let Ok(index) = caps[2].parse::<u32>() else {
                continue;
            };
            if index == 0 {
                continue;
            }

            let value = value.trim();
            let value = (!value.is_empty()).then_some(value);
            let pair = pairs.entry(index).or_default();
            if caps[1].eq_ignore_ascii_case("question") {
                pair.question = value;
            } else {
                pair.answer = value;
            }
        }

        let answers: Vec<Answer> = pairs
            .into_iter()
            .filter_map(|(index, pair)| {
                let question = pair.question?;
                let answer = pair.answer?;
                if self.is_no_answer(answer) {
                    return None;
                }
                Some(Answer {
                    question_index: index,
                    question_text: question.to_string(),
                    answer_text: answer.to_string(),
                })
            })
            .collect();

        if answers.is_empty() {
            return Err(TallyError::MalformedRow {
                row: row_number,
                message: "no usable question/answer pairs".to_string(),
            });
        }

        let department = department.unwrap_or(self.config.unknown_department.as_str());
        Ok(Response::new(department, answers))
    }

    fn is_no_answer(&self, answer: &str) -> bool {
        answer.eq_ignore_ascii_case(self.config.no_answer_sentinel.trim())
    }
}
