#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Parse(err.to_string())
    }
}
