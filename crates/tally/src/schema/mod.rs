//! Data types produced by an analysis run.

mod analysis;
mod department;
mod question;
mod types;

pub use analysis::{OverallAnalysis, RunStatistics};
pub use department::{DepartmentSummary, ScoreTotals};
pub use question::QuestionTally;
pub use types::{QuestionType, SatisfactionLevel};
