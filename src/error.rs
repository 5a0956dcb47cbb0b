use thiserror::Error;

#[derive(Debug, Error)]
pub enum QcError {
    #[error("empty input: at least one score record is required")]
    EmptyInput,
    #[error("invalid score for {category:?}: {score} is not a finite number")]
    InvalidScore { category: String, score: f64 },
    #[error("record {index} has an empty category name")]
    EmptyCategory { index: usize },
    #[error("duplicate category: {category:?}")]
    DuplicateCategory { category: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
