//! Handlers for the movie resource.
//!
//! Each handler runs the same linear pipeline: resolve the path id, fetch
//! or decode, validate, persist, and answer with exactly one envelope.
//! Update and delete fetch the row first; the fetch and the write are not
//! wrapped in a transaction (last writer wins).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::movie::{Movie, MovieDraft, MovieInput};
use marquee_core::types::{parse_db_id, DbId};

use crate::error::{AppError, AppResult};
use crate::response::{Envelope, Payload};
use crate::state::AppState;

/// Resolve a path segment to an id. Non-numeric ids cannot match a row.
fn movie_id(raw: &str) -> AppResult<DbId> {
    parse_db_id(raw).ok_or_else(|| AppError::NotFound(format!("Movie with id '{raw}' not found")))
}

/// Decode, validate and convert a request body into a draft.
fn validated_draft(
    state: &AppState,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<MovieDraft> {
    let Json(input) = body?;
    state
        .validator
        .validate(&input)
        .map_err(|e| AppError::from_core("Validation failed", e))?;
    input
        .into_draft()
        .map_err(|e| AppError::from_core("Validation failed", e))
}

/// GET /api/movies
///
/// List all movies, newest first. Returns 204 when the catalog is empty.
pub async fn list_movies(State(state): State<AppState>) -> AppResult<Response> {
    let movies = state
        .store
        .list_all()
        .await
        .map_err(|e| AppError::from_core("Failed to fetch movies", e))?;

    if movies.is_empty() {
        return Ok(Envelope::<Movie>::no_content("Movies data is empty").into_response());
    }

    Ok(Envelope::ok("Movies fetched successfully", Payload::List(movies)).into_response())
}

/// GET /api/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Envelope<Movie>> {
    let id = movie_id(&raw_id)?;
    let movie = state
        .store
        .get_by_id(id)
        .await
        .map_err(|e| AppError::from_core("Failed to fetch movie", e))?;

    Ok(Envelope::ok("Movie fetched successfully", Payload::Item(movie)))
}

/// POST /api/movies
pub async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<Envelope<Movie>> {
    let draft = validated_draft(&state, body)?;

    let movie = state
        .store
        .insert(&draft)
        .await
        .map_err(|e| AppError::from_core("Failed to create movie", e))?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok(Envelope::created("Movie created successfully", Payload::Item(movie)))
}

/// PUT /api/movies/{id}
///
/// Full replacement of every mutable field. The existing row is fetched
/// before the body is inspected, so an unknown id is a 404 even when the
/// body is also invalid.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> AppResult<Envelope<Movie>> {
    let id = movie_id(&raw_id)?;
    let mut movie = state
        .store
        .get_by_id(id)
        .await
        .map_err(|e| AppError::from_core("Failed to fetch movie", e))?;

    let draft = validated_draft(&state, body)?;
    movie.apply(draft);

    let updated = state
        .store
        .update(&movie)
        .await
        .map_err(|e| AppError::from_core("Failed to update movie", e))?;

    tracing::info!(movie_id = updated.id, "Movie updated");

    Ok(Envelope::ok("Movie updated successfully", Payload::Item(updated)))
}

/// DELETE /api/movies/{id}
///
/// Any failure to fetch the row, not only a miss, answers 404.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Envelope<Movie>> {
    let id = movie_id(&raw_id)?;
    let movie = state.store.get_by_id(id).await.map_err(|e| {
        if !matches!(e, CoreError::NotFound { .. }) {
            tracing::warn!(movie_id = id, error = %e, "Fetch before delete failed");
        }
        AppError::NotFound(e.to_string())
    })?;

    state
        .store
        .delete(&movie)
        .await
        .map_err(|e| AppError::from_core("Failed to delete movie", e))?;

    tracing::info!(movie_id = movie.id, "Movie deleted");

    Ok(Envelope::ok("Movie deleted successfully", Payload::Absent))
}
