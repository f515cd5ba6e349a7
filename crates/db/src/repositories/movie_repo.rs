//! Repository for the `movies` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::MovieRow;

/// Column list for `movies` queries. `genre` is read back as JSON text.
const COLUMNS: &str = "\
    id, title, description, poster_url, release_date, rating, \
    duration_minutes, director, genre::text AS genre, created_at, updated_at";

/// Column values for an insert or full update, with `genre` already encoded.
#[derive(Debug, Clone, Copy)]
pub struct MovieColumns<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub poster_url: &'a str,
    pub release_date: chrono::NaiveDate,
    pub rating: f64,
    pub duration_minutes: i32,
    pub director: &'a str,
    pub genre_blob: &'a str,
}

/// Provides data access for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List every movie, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MovieRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, MovieRow>(&query).fetch_all(pool).await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new movie. Timestamps come from column defaults, so
    /// `created_at` and `updated_at` are equal on the returned row.
    pub async fn create(pool: &PgPool, cols: MovieColumns<'_>) -> Result<MovieRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies \
                 (title, description, poster_url, release_date, rating, \
                  duration_minutes, director, genre) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, CAST($8 AS JSONB)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(cols.title)
            .bind(cols.description)
            .bind(cols.poster_url)
            .bind(cols.release_date)
            .bind(cols.rating)
            .bind(cols.duration_minutes)
            .bind(cols.director)
            .bind(cols.genre_blob)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable column and bump `updated_at`.
    ///
    /// `updated_at` strictly increases, even for an update issued in the same
    /// transaction or clock tick as the previous write. Returns `None` if the
    /// row no longer exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        cols: MovieColumns<'_>,
    ) -> Result<Option<MovieRow>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET \
                 title = $2, \
                 description = $3, \
                 poster_url = $4, \
                 release_date = $5, \
                 rating = $6, \
                 duration_minutes = $7, \
                 director = $8, \
                 genre = CAST($9 AS JSONB), \
                 updated_at = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond') \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .bind(cols.title)
            .bind(cols.description)
            .bind(cols.poster_url)
            .bind(cols.release_date)
            .bind(cols.rating)
            .bind(cols.duration_minutes)
            .bind(cols.director)
            .bind(cols.genre_blob)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
