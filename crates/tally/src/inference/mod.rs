//! Question type inference.

mod classifier;

pub use classifier::{classify, is_bare_rating, parse_stars};
