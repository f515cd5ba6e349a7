//! In-process [`MovieStore`] backed by a `BTreeMap`.
//!
//! Rows keep their genres as the encoded JSON blob, the same shape the
//! relational store persists, so encoding failures surface identically.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use tokio::sync::RwLock;

use super::{MovieStore, MOVIE_ENTITY};
use crate::error::CoreError;
use crate::genre;
use crate::movie::{Movie, MovieDraft};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone)]
struct StoredMovie {
    id: DbId,
    title: String,
    description: String,
    poster_url: String,
    release_date: NaiveDate,
    rating: f64,
    duration_minutes: i32,
    director: String,
    genre_blob: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl StoredMovie {
    fn to_movie(&self) -> Result<Movie, CoreError> {
        Ok(Movie {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            poster_url: self.poster_url.clone(),
            release_date: self.release_date,
            rating: self.rating,
            duration_minutes: self.duration_minutes,
            director: self.director.clone(),
            genre: genre::decode_blob(&self.genre_blob)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, StoredMovie>,
}

/// Movie store kept entirely in memory. Cheap to construct per test.
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    inner: RwLock<Inner>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn list_all(&self) -> Result<Vec<Movie>, CoreError> {
        let inner = self.inner.read().await;
        let mut rows: Vec<&StoredMovie> = inner.rows.values().collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        rows.into_iter().map(StoredMovie::to_movie).collect()
    }

    async fn get_by_id(&self, id: DbId) -> Result<Movie, CoreError> {
        let inner = self.inner.read().await;
        match inner.rows.get(&id) {
            Some(row) => row.to_movie(),
            None => Err(CoreError::NotFound {
                entity: MOVIE_ENTITY,
                id,
            }),
        }
    }

    async fn insert(&self, draft: &MovieDraft) -> Result<Movie, CoreError> {
        let genre_blob = genre::encode_blob(&draft.genre)?;
        let mut inner = self.inner.write().await;

        inner.last_id += 1;
        let now = Utc::now();
        let row = StoredMovie {
            id: inner.last_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            poster_url: draft.poster_url.clone(),
            release_date: draft.release_date,
            rating: draft.rating,
            duration_minutes: draft.duration_minutes,
            director: draft.director.clone(),
            genre_blob,
            created_at: now,
            updated_at: now,
        };
        let movie = row.to_movie()?;
        inner.rows.insert(row.id, row);
        Ok(movie)
    }

    async fn update(&self, movie: &Movie) -> Result<Movie, CoreError> {
        let genre_blob = genre::encode_blob(&movie.genre)?;
        let mut inner = self.inner.write().await;

        // A concurrent delete between fetch and update leaves nothing to write.
        let Some(row) = inner.rows.get_mut(&movie.id) else {
            return Err(CoreError::Store(format!(
                "movie {} vanished before update",
                movie.id
            )));
        };

        let now = Utc::now();
        let floor = row.updated_at + Duration::microseconds(1);
        row.title = movie.title.clone();
        row.description = movie.description.clone();
        row.poster_url = movie.poster_url.clone();
        row.release_date = movie.release_date;
        row.rating = movie.rating;
        row.duration_minutes = movie.duration_minutes;
        row.director = movie.director.clone();
        row.genre_blob = genre_blob;
        row.updated_at = now.max(floor);
        row.to_movie()
    }

    async fn delete(&self, movie: &Movie) -> Result<(), CoreError> {
        let mut inner = self.inner.write().await;
        if inner.rows.remove(&movie.id).is_none() {
            tracing::debug!(movie_id = movie.id, "Delete found no row (already removed)");
        }
        Ok(())
    }
}
