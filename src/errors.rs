use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed contact on line {line}: '{content}' (expected exactly one comma)")]
    MalformedLine { line: usize, content: String },

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Could not render contacts as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
