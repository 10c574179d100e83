//! The finished analysis handed to report renderers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::department::DepartmentSummary;
use crate::error::Result;
use crate::input::SourceMetadata;

/// Counters describing one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Rows yielded by the source.
    pub rows_read: usize,
    /// Rows rejected as malformed.
    pub rows_skipped: usize,
    /// Rows accepted as responses.
    pub responses: usize,
    /// Answers folded into tallies.
    pub total_answers: usize,
}

/// Overall survey analysis across all departments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAnalysis {
    /// Number of distinct departments.
    pub department_count: usize,
    /// Satisfaction percentage over every satisfied contribution, pooled.
    pub average_satisfaction: u32,
    /// Dissatisfaction percentage over every dissatisfied contribution, pooled.
    pub average_dissatisfaction: u32,
    /// Department with the strictly highest dissatisfaction, if any
    /// department had a dissatisfied answer at all.
    pub most_dissatisfied_department: Option<String>,
    /// Department summaries in first-seen order.
    pub department_summaries: IndexMap<String, DepartmentSummary>,
    /// Run counters.
    pub statistics: RunStatistics,
    /// Source file metadata, when the rows came from a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
}

impl OverallAnalysis {
    /// Label for the most dissatisfied department, `"None"` when there is none.
    pub fn most_dissatisfied_label(&self) -> &str {
        self.most_dissatisfied_department.as_deref().unwrap_or("None")
    }

    /// Departments ordered by dissatisfaction percentage, highest first.
    /// Ties keep input order.
    pub fn dissatisfaction_ranking(&self) -> Vec<&DepartmentSummary> {
        let mut ranking: Vec<&DepartmentSummary> = self.department_summaries.values().collect();
        ranking.sort_by(|a, b| b.dissatisfaction.cmp(&a.dissatisfaction));
        ranking
    }

    /// Look up a department summary by name.
    pub fn department(&self, name: &str) -> Option<&DepartmentSummary> {
        self.department_summaries.get(name)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
