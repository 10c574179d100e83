//! Folds responses into per-department, per-question tallies.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::inference::{classify, parse_stars};
use crate::schema::{DepartmentSummary, QuestionTally, QuestionType};
use crate::scoring::score;
use crate::survey::Response;

/// Aggregator configuration.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Distinct free-text answers kept per Text question.
    pub text_sample_limit: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            text_sample_limit: 5,
        }
    }
}

/// Answers collected for one question, in arrival order.
#[derive(Debug)]
struct PendingQuestion {
    question_text: String,
    answers: Vec<String>,
}

/// Answers collected for one department.
#[derive(Debug, Default)]
struct PendingDepartment {
    response_count: usize,
    questions: BTreeMap<u32, PendingQuestion>,
}

/// Owns the tallies of one analysis run.
///
/// Responses are collected with [`add`](Self::add) in arrival order, grouped
/// by department and question. [`finish`](Self::finish) classifies each
/// (department, question) once, from every answer it received, then tallies
/// and scores every answer to that question under that single type.
#[derive(Debug, Default)]
pub struct DepartmentAggregator {
    config: AggregatorConfig,
    departments: IndexMap<String, PendingDepartment>,
    responses: usize,
}

impl DepartmentAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AggregatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Add a response.
    pub fn add(&mut self, response: Response) {
        let (department, answers) = response.into_parts();
        let pending = self.departments.entry(department).or_default();
        pending.response_count += 1;
        self.responses += 1;

        for answer in answers {
            pending
                .questions
                .entry(answer.question_index)
                .or_insert_with(|| PendingQuestion {
                    question_text: answer.question_text,
                    answers: Vec::new(),
                })
                .answers
                .push(answer.answer_text);
        }
    }

    /// Number of responses added so far.
    pub fn response_count(&self) -> usize {
        self.responses
    }

    /// Tally everything and return finalized summaries in first-seen
    /// department order.
    pub fn finish(self) -> Vec<DepartmentSummary> {
        self.departments
            .into_iter()
            .map(|(department, pending)| self.config.summarize(department, pending))
            .collect()
    }
}

impl AggregatorConfig {
    fn summarize(&self, department: String, pending: PendingDepartment) -> DepartmentSummary {
        let mut summary = DepartmentSummary::new(department);
        summary.response_count = pending.response_count;

        for (index, question) in pending.questions {
            let question_type = classify(question.answers.as_slice());
            debug!(
                department = %summary.department,
                question = index,
                %question_type,
                "classified question"
            );

            let mut tally = QuestionTally::new(question.question_text, question_type);
            for answer in &question.answers {
                self.fold_answer(&mut tally, answer);
                let contribution = score(question_type, answer);
                tally.scores.record(contribution);
                summary.scores.record(contribution);
            }
            summary.question_tallies.insert(index, tally);
        }

        summary.finalize();
        summary
    }

    fn fold_answer(&self, tally: &mut QuestionTally, answer: &str) {
        tally.total_answered += 1;

        match tally.question_type {
            QuestionType::MultiSelect => {
                for option in answer.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                    tally.count_option(option);
                }
            }
            QuestionType::StarRating => {
                tally.count_option(answer);
                if let Some(stars) = parse_stars(answer).filter(|s| *s <= 5) {
                    tally.record_stars(stars);
                }
            }
            QuestionType::Text => {
                tally.count_option(answer);
                tally.keep_sample(answer, self.text_sample_limit);
            }
            QuestionType::SingleChoice => tally.count_option(answer),
        }
    }
}
