pub mod error;
pub mod models;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use models::AnalysisModel;
pub use storage::{HistoryStorage, WordLookup};
pub use types::*;

/// Returns true when `input` holds nothing but whitespace.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
