//! Survey responses normalized from raw rows.

mod normalizer;
mod response;

pub use normalizer::{NormalizerConfig, RowNormalizer};
pub use response::{Answer, Response};
