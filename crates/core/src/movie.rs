//! Movie entity and request shapes.
//!
//! - [`Movie`]: a stored row, as returned to clients.
//! - [`MovieInput`]: the raw request body for create and update. Missing
//!   fields default to empty/zero so they surface as `required` violations
//!   rather than decode errors.
//! - [`MovieDraft`]: a validated, typed set of mutable fields handed to the
//!   store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateUrl, ValidationError};

use crate::error::CoreError;
use crate::genre::GenreLabel;
use crate::types::{DbId, Timestamp};

/// Accepted `release_date` layout.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A movie as persisted by a [`MovieStore`](crate::store::MovieStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub release_date: NaiveDate,
    pub rating: f64,
    pub duration_minutes: i32,
    pub director: String,
    pub genre: Vec<GenreLabel>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Movie {
    /// Replace every mutable field with the draft's values.
    ///
    /// `id`, `created_at` and `updated_at` are untouched; the store refreshes
    /// `updated_at` when the change is persisted.
    pub fn apply(&mut self, draft: MovieDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.poster_url = draft.poster_url;
        self.release_date = draft.release_date;
        self.rating = draft.rating;
        self.duration_minutes = draft.duration_minutes;
        self.director = draft.director;
        self.genre = draft.genre;
    }
}

// ---------------------------------------------------------------------------
// Request body
// ---------------------------------------------------------------------------

/// Client-supplied movie fields for create and update.
///
/// Unknown keys (`id`, `created_at`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct MovieInput {
    #[validate(custom(function = "required_text"))]
    pub title: String,

    #[validate(custom(function = "required_text"))]
    pub description: String,

    #[validate(custom(function = "valid_poster_url"))]
    pub poster_url: String,

    #[validate(custom(function = "valid_release_date"))]
    pub release_date: String,

    #[validate(custom(function = "valid_rating"))]
    pub rating: f64,

    #[validate(custom(function = "required_minutes"))]
    pub duration_minutes: i32,

    #[validate(custom(function = "required_text"))]
    pub director: String,

    #[validate(length(min = 1, code = "min"), nested)]
    pub genre: Vec<GenreLabel>,
}

impl MovieInput {
    /// Field names in declaration order; violations are reported in this order.
    pub const FIELDS: [&'static str; 8] = [
        "title",
        "description",
        "poster_url",
        "release_date",
        "rating",
        "duration_minutes",
        "director",
        "genre",
    ];

    /// Convert an already validated input into a typed draft.
    pub fn into_draft(self) -> Result<MovieDraft, CoreError> {
        let release_date = parse_release_date(&self.release_date).ok_or_else(|| {
            CoreError::Validation(vec![
                "release_date: Invalid date format, expected YYYY-MM-DD".to_string()
            ])
        })?;

        Ok(MovieDraft {
            title: self.title,
            description: self.description,
            poster_url: self.poster_url,
            release_date,
            rating: self.rating,
            duration_minutes: self.duration_minutes,
            director: self.director,
            genre: self.genre,
        })
    }
}

/// Validated mutable fields of a movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub release_date: NaiveDate,
    pub rating: f64,
    pub duration_minutes: i32,
    pub director: String,
    pub genre: Vec<GenreLabel>,
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// Strict `YYYY-MM-DD`: zero-padded, ten characters, a real calendar date.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 10 || !raw.is_ascii() {
        return None;
    }
    let bytes = raw.as_bytes();
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, RELEASE_DATE_FORMAT).ok()
}

fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn valid_poster_url(value: &str) -> Result<(), ValidationError> {
    required_text(value)?;
    if !value.validate_url() {
        return Err(ValidationError::new("url"));
    }
    Ok(())
}

fn valid_release_date(value: &str) -> Result<(), ValidationError> {
    required_text(value)?;
    if parse_release_date(value).is_none() {
        return Err(ValidationError::new("datetime"));
    }
    Ok(())
}

fn valid_rating(value: f64) -> Result<(), ValidationError> {
    if value == 0.0 {
        return Err(ValidationError::new("required"));
    }
    if !value.is_finite() {
        return Err(ValidationError::new("numeric"));
    }
    Ok(())
}

fn required_minutes(value: i32) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
