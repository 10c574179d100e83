//! Tally: satisfaction analysis for tabular survey responses.
//!
//! Each input row is one respondent: a `Department` column plus any number of
//! `Question N`/`Answer N` column pairs. Tally classifies every question,
//! scores satisfaction and dissatisfaction, tallies answer distributions per
//! department, and assembles an overall view for report renderers.
//!
//! # Pipeline
//!
//! - [`survey::RowNormalizer`] turns a [`RawRow`] into a [`Response`]
//! - [`inference::classify`] assigns each question a [`QuestionType`]
//! - [`scoring::score`] maps each answer to a [`Score`]
//! - [`aggregate::DepartmentAggregator`] builds [`DepartmentSummary`]s
//! - [`aggregate::AnalysisAssembler`] produces the [`OverallAnalysis`]
//!
//! # Example
//!
//! ```no_run
//! use tally::Tally;
//!
//! let analysis = Tally::new().analyze("survey.csv").unwrap();
//!
//! println!("Departments: {}", analysis.department_count);
//! println!("Satisfaction: {}%", analysis.average_satisfaction);
//! println!("Most dissatisfied: {}", analysis.most_dissatisfied_label());
//! ```

pub mod aggregate;
pub mod error;
pub mod inference;
pub mod input;
pub mod schema;
pub mod scoring;
pub mod survey;

mod tally;

pub use crate::tally::{Tally, TallyConfig};
pub use error::{Result, TallyError};
pub use input::{Parser, ParserConfig, RawRow, RowSource, SourceMetadata};
pub use schema::{
    DepartmentSummary, OverallAnalysis, QuestionTally, QuestionType, RunStatistics,
    SatisfactionLevel, ScoreTotals,
};
pub use scoring::Score;
pub use survey::{Answer, Response};
