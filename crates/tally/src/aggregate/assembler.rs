//! Combines department summaries into the overall analysis.

use indexmap::IndexMap;

use crate::input::SourceMetadata;
use crate::schema::{DepartmentSummary, OverallAnalysis, RunStatistics, ScoreTotals};

/// Builds the [`OverallAnalysis`] from finalized department summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisAssembler;

impl AnalysisAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the overall view.
    ///
    /// Overall percentages are recomputed from the pooled contributions of
    /// every department, not averaged over department percentages.
    pub fn assemble(
        &self,
        summaries: Vec<DepartmentSummary>,
        mut statistics: RunStatistics,
        source: Option<SourceMetadata>,
    ) -> OverallAnalysis {
        let mut pooled = ScoreTotals::default();
        for summary in &summaries {
            pooled.merge(&summary.scores);
        }

        let most_dissatisfied_department = most_dissatisfied(&summaries);
        statistics.total_answers = summaries.iter().map(DepartmentSummary::total_answers).sum();

        let department_summaries: IndexMap<String, DepartmentSummary> = summaries
            .into_iter()
            .map(|summary| (summary.department.clone(), summary))
            .collect();

        OverallAnalysis {
            department_count: department_summaries.len(),
            average_satisfaction: pooled.satisfaction(),
            average_dissatisfaction: pooled.dissatisfaction(),
            most_dissatisfied_department,
            department_summaries,
            statistics,
            source,
        }
    }
}

/// Department with the strictly highest dissatisfaction percentage; the first
/// one wins ties. Departments without a dissatisfied answer never qualify.
fn most_dissatisfied(summaries: &[DepartmentSummary]) -> Option<String> {
    let mut best: Option<&DepartmentSummary> = None;
    for summary in summaries.iter().filter(|s| s.scores.has_dissatisfaction()) {
        if best.is_none_or(|b| summary.dissatisfaction > b.dissatisfaction) {
            best = Some(summary);
        }
    }
    best.map(|s| s.department.clone())
}
