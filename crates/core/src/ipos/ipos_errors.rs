use thiserror::Error;

/// Custom error type for IPO-related operations
#[derive(Debug, Error)]
pub enum IpoError {
    #[error("Failed to read CSV file: {0}")]
    FileRead(String),
    #[error("Failed to decode CSV file: {0}")]
    Encoding(String),
    #[error("Failed to parse CSV: {0}")]
    Csv(String),
}

impl From<IpoError> for String {
    fn from(error: IpoError) -> Self {
        error.to_string()
    }
}
