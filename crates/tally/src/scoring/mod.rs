//! Satisfaction scoring of classified answers.

mod scorer;

pub use scorer::{score, try_score, Score};
