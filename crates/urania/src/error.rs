use thiserror::Error;

/// Errors raised by the aspect and direction engines.
///
/// A missing aspect is not an error; see [`crate::aspects::AspectType::None`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UraniaError {
    #[error("{table} has no entry for {key}")]
    NotFound { table: String, key: String },
    #[error("Degenerate input for point {point_id}: {message}")]
    DegenerateInput { point_id: String, message: String },
    #[error("Invalid term table: {message}")]
    InvalidTermTable { message: String },
    #[error("Invalid aspect catalogue: {message}")]
    InvalidAspectCatalogue { message: String },
    #[error("Invalid chart JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid point code {code}: {message}")]
    InvalidPointCode { code: String, message: String },
}

impl UraniaError {
    pub(crate) fn not_found(table: &str, key: impl Into<String>) -> Self {
        UraniaError::NotFound {
            table: table.to_string(),
            key: key.into(),
        }
    }

    pub(crate) fn degenerate(point_id: &str, message: impl Into<String>) -> Self {
        UraniaError::DegenerateInput {
            point_id: point_id.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UraniaError>;
