//! Persistence contract for movies.
//!
//! Handlers only talk to `dyn MovieStore`; the PostgreSQL implementation
//! lives in `marquee-db`, and [`memory::InMemoryMovieStore`] backs tests and
//! local runs without a database.
//!
//! Fetch-then-mutate sequences (update, delete) are not atomic: two requests
//! racing on the same id both succeed and the last write wins.

pub mod memory;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::movie::{Movie, MovieDraft};
use crate::types::DbId;

pub use memory::InMemoryMovieStore;

/// Entity name used in [`CoreError::NotFound`].
pub const MOVIE_ENTITY: &str = "Movie";

#[async_trait]
pub trait MovieStore: Send + Sync {
    /// All movies, newest `created_at` first (ties broken by higher id first).
    async fn list_all(&self) -> Result<Vec<Movie>, CoreError>;

    /// Fetch one movie. [`CoreError::NotFound`] if no row matches.
    async fn get_by_id(&self, id: DbId) -> Result<Movie, CoreError>;

    /// Persist a new movie, assigning `id`, `created_at` and `updated_at`.
    ///
    /// Fails with [`CoreError::Encode`] if the genre blob cannot be built.
    async fn insert(&self, draft: &MovieDraft) -> Result<Movie, CoreError>;

    /// Replace every mutable column of an existing row.
    ///
    /// Returns the row as stored, with `updated_at` advanced.
    async fn update(&self, movie: &Movie) -> Result<Movie, CoreError>;

    /// Remove a row previously fetched with [`MovieStore::get_by_id`].
    async fn delete(&self, movie: &Movie) -> Result<(), CoreError>;
}
