//! Per-department summaries and score accumulation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::question::QuestionTally;
use crate::scoring::Score;

/// Running satisfied/dissatisfied contributions.
///
/// The two metrics are independent: each percentage averages only the
/// answers that contributed to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTotals {
    pub satisfied_sum: f64,
    pub satisfied_count: usize,
    pub dissatisfied_sum: f64,
    pub dissatisfied_count: usize,
}

impl ScoreTotals {
    /// Fold one score in. `Score::None` changes nothing.
    pub fn record(&mut self, score: Score) {
        match score {
            Score::Satisfied(amount) => {
                self.satisfied_sum += amount;
                self.satisfied_count += 1;
            }
            Score::Dissatisfied(amount) => {
                self.dissatisfied_sum += amount;
                self.dissatisfied_count += 1;
            }
            Score::None => {}
        }
    }

    /// Pool another set of contributions into this one.
    pub fn merge(&mut self, other: &ScoreTotals) {
        self.satisfied_sum += other.satisfied_sum;
        self.satisfied_count += other.satisfied_count;
        self.dissatisfied_sum += other.dissatisfied_sum;
        self.dissatisfied_count += other.dissatisfied_count;
    }

    /// Rounded mean of satisfied amounts, 0 when there are none.
    pub fn satisfaction(&self) -> u32 {
        rounded_percentage(self.satisfied_sum, self.satisfied_count)
    }

    /// Rounded mean of dissatisfied amounts, 0 when there are none.
    pub fn dissatisfaction(&self) -> u32 {
        rounded_percentage(self.dissatisfied_sum, self.dissatisfied_count)
    }

    pub fn has_dissatisfaction(&self) -> bool {
        self.dissatisfied_count > 0
    }
}

fn rounded_percentage(sum: f64, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    let mean = sum / count as f64;
    if mean.is_finite() {
        mean.round().clamp(0.0, 100.0) as u32
    } else {
        0
    }
}

/// Everything tallied for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// Department name.
    pub department: String,
    /// Number of responses from this department.
    pub response_count: usize,
    /// Question index to tally, in index order.
    pub question_tallies: BTreeMap<u32, QuestionTally>,
    /// Pooled contributions from every scored answer.
    pub scores: ScoreTotals,
    /// Rounded satisfaction percentage.
    pub satisfaction: u32,
    /// Rounded dissatisfaction percentage.
    pub dissatisfaction: u32,
}

impl DepartmentSummary {
    /// Create an empty summary for a department.
    pub fn new(department: impl Into<String>) -> Self {
        Self {
            department: department.into(),
            response_count: 0,
            question_tallies: BTreeMap::new(),
            scores: ScoreTotals::default(),
            satisfaction: 0,
            dissatisfaction: 0,
        }
    }

    /// Fix the percentages from the accumulated contributions.
    pub fn finalize(&mut self) {
        self.satisfaction = self.scores.satisfaction();
        self.dissatisfaction = self.scores.dissatisfaction();
    }

    /// Total answers across all questions.
    pub fn total_answers(&self) -> usize {
        self.question_tallies.values().map(|t| t.total_answered).sum()
    }
}
