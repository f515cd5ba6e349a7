//! Row model for the `movies` table.

use chrono::NaiveDate;
use marquee_core::error::CoreError;
use marquee_core::genre;
use marquee_core::movie::Movie;
use marquee_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `movies` table, with `genre` still in its encoded form.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub release_date: NaiveDate,
    pub rating: f64,
    pub duration_minutes: i32,
    pub director: String,
    /// JSONB column selected as text.
    pub genre: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<MovieRow> for Movie {
    type Error = CoreError;

    fn try_from(row: MovieRow) -> Result<Self, Self::Error> {
        Ok(Movie {
            id: row.id,
            title: row.title,
            description: row.description,
            poster_url: row.poster_url,
            release_date: row.release_date,
            rating: row.rating,
            duration_minutes: row.duration_minutes,
            director: row.director,
            genre: genre::decode_blob(&row.genre)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
