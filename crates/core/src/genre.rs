//! Genre labels and the genre blob adapter.
//!
//! In the domain a movie's genres are an ordered `Vec<GenreLabel>`. Stores
//! persist them as a JSON array blob; [`encode_blob`] and [`decode_blob`]
//! are the only places that see the encoded form.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;

/// A single genre label such as `"Action"`.
///
/// Serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct GenreLabel {
    #[validate(custom(function = "validate_label"))]
    label: String,
}

impl GenreLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.label
    }
}

impl From<&str> for GenreLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl std::fmt::Display for GenreLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::new("dive"));
    }
    Ok(())
}

/// Encode genre labels into the persisted JSON blob.
///
/// An empty list is refused so a row can never be stored without genres.
pub fn encode_blob(labels: &[GenreLabel]) -> Result<String, CoreError> {
    if labels.is_empty() {
        return Err(CoreError::Encode("genre list is empty".to_string()));
    }
    serde_json::to_string(labels).map_err(|e| CoreError::Encode(e.to_string()))
}

/// Decode a persisted JSON blob back into genre labels.
///
/// A blob that does not parse is corrupt storage, hence a [`CoreError::Store`].
pub fn decode_blob(blob: &str) -> Result<Vec<GenreLabel>, CoreError> {
    serde_json::from_str(blob).map_err(|e| CoreError::Store(format!("corrupt genre blob: {e}")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn labels(names: &[&str]) -> Vec<GenreLabel> {
        names.iter().copied().map(GenreLabel::from).collect()
    }

    #[test]
    fn label_serializes_as_plain_string() {
        let json = serde_json::to_string(&GenreLabel::new("Drama")).unwrap();
        assert_eq!(json, "\"Drama\"");
    }

    #[test]
    fn encode_produces_json_array() {
        let blob = encode_blob(&labels(&["Action", "Drama"])).unwrap();
        assert_eq!(blob, r#"["Action","Drama"]"#);
    }

    #[test]
    fn decode_preserves_order() {
        let decoded = decode_blob(r#"["Sci-Fi","Action","Drama"]"#).unwrap();
        assert_eq!(decoded, labels(&["Sci-Fi", "Action", "Drama"]));
    }

    #[test]
    fn encode_rejects_empty_list() {
        assert_matches!(encode_blob(&[]), Err(CoreError::Encode(_)));
    }

    #[test]
    fn decode_rejects_corrupt_blob() {
        assert_matches!(decode_blob("{not json"), Err(CoreError::Store(_)));
        assert_matches!(decode_blob(r#"{"a":1}"#), Err(CoreError::Store(_)));
    }

    #[test]
    fn blank_label_fails_validation() {
        let err = GenreLabel::new("   ").validate().unwrap_err();
        let field_errors = err.field_errors();
        assert_eq!(field_errors["label"][0].code, "dive");
    }

    #[test]
    fn non_blank_label_passes_validation() {
        assert!(GenreLabel::new("Comedy").validate().is_ok());
    }
}
