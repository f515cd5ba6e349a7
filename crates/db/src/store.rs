//! [`MovieStore`] implementation over a PostgreSQL pool.

use async_trait::async_trait;
use marquee_core::error::CoreError;
use marquee_core::genre;
use marquee_core::movie::{Movie, MovieDraft};
use marquee_core::store::{MovieStore, MOVIE_ENTITY};
use marquee_core::types::DbId;

use crate::models::movie::MovieRow;
use crate::repositories::{MovieColumns, MovieRepo};
use crate::DbPool;

/// Movie store backed by the `movies` table.
#[derive(Debug, Clone)]
pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Any sqlx failure that reaches here is an opaque store error.
fn store_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Movie store query failed");
    CoreError::Store(err.to_string())
}

fn into_movie(row: MovieRow) -> Result<Movie, CoreError> {
    Movie::try_from(row)
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn list_all(&self) -> Result<Vec<Movie>, CoreError> {
        let rows = MovieRepo::list(&self.pool).await.map_err(store_error)?;
        rows.into_iter().map(into_movie).collect()
    }

    async fn get_by_id(&self, id: DbId) -> Result<Movie, CoreError> {
        match MovieRepo::find_by_id(&self.pool, id).await {
            Ok(Some(row)) => into_movie(row),
            Ok(None) | Err(sqlx::Error::RowNotFound) => Err(CoreError::NotFound {
                entity: MOVIE_ENTITY,
                id,
            }),
            Err(err) => Err(store_error(err)),
        }
    }

    async fn insert(&self, draft: &MovieDraft) -> Result<Movie, CoreError> {
        let genre_blob = genre::encode_blob(&draft.genre)?;
        let cols = MovieColumns {
            title: &draft.title,
            description: &draft.description,
            poster_url: &draft.poster_url,
            release_date: draft.release_date,
            rating: draft.rating,
            duration_minutes: draft.duration_minutes,
            director: &draft.director,
            genre_blob: &genre_blob,
        };
        let row = MovieRepo::create(&self.pool, cols)
            .await
            .map_err(store_error)?;
        into_movie(row)
    }

    async fn update(&self, movie: &Movie) -> Result<Movie, CoreError> {
        let genre_blob = genre::encode_blob(&movie.genre)?;
        let cols = MovieColumns {
            title: &movie.title,
            description: &movie.description,
            poster_url: &movie.poster_url,
            release_date: movie.release_date,
            rating: movie.rating,
            duration_minutes: movie.duration_minutes,
            director: &movie.director,
            genre_blob: &genre_blob,
        };
        match MovieRepo::update(&self.pool, movie.id, cols).await {
            Ok(Some(row)) => into_movie(row),
            Ok(None) => Err(CoreError::Store(format!(
                "movie {} vanished before update",
                movie.id
            ))),
            Err(err) => Err(store_error(err)),
        }
    }

    async fn delete(&self, movie: &Movie) -> Result<(), CoreError> {
        let deleted = MovieRepo::delete(&self.pool, movie.id)
            .await
            .map_err(store_error)?;
        if !deleted {
            tracing::debug!(movie_id = movie.id, "Delete found no row (already removed)");
        }
        Ok(())
    }
}
