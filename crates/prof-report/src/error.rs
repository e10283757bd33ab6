use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed record at line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type ReportResult<T> = Result<T, ReportError>;
