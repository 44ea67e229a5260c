use thiserror::Error;

/// A drag-and-drop payload that could not become a block.
///
/// Every variant is recoverable: the page the drop targeted is left as it was.
#[derive(Debug, Error)]
pub enum DropError {
    #[error("malformed drop payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed drop payload: expected a JSON object")]
    NotAnObject,

    #[error("malformed drop payload: missing `type`")]
    MissingType,

    #[error("malformed drop payload: `type` must be a string, got {0}")]
    InvalidType(String),

    #[error("malformed drop payload: `data` must be an object, got {0}")]
    InvalidData(String),
}

/// Errors loading or saving pages
#[derive(Debug, Error)]
pub enum DocError {
    #[error("invalid page JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DropError::MissingType.to_string(),
            "malformed drop payload: missing `type`"
        );
        assert_eq!(
            DropError::InvalidData("[]".into()).to_string(),
            "malformed drop payload: `data` must be an object, got []"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: DropError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, DropError::Json(_)));
    }
}
