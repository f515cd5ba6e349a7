use crate::types::DbId;

/// Error taxonomy shared by the validator, the store and the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Client-supplied data failed one or more field rules.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Re-encoding a field for persistence failed.
    #[error("Encoding failed: {0}")]
    Encode(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Opaque persistence failure. Never retried.
    #[error("Store error: {0}")]
    Store(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_validation_joins_violations() {
        let err = CoreError::Validation(vec![
            "title: This field is required".to_string(),
            "genre: Value is below the minimum allowed".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: title: This field is required; genre: Value is below the minimum allowed"
        );
    }

    #[test]
    fn display_not_found() {
        let err = CoreError::NotFound {
            entity: "Movie",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Movie with id 7");
    }

    #[test]
    fn display_store() {
        let err = CoreError::Store("connection reset".to_string());
        assert_eq!(err.to_string(), "Store error: connection reset");
    }
}
