use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoodError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, MoodError>;
