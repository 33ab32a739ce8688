//! Route handlers for the movie API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::catalog::Movie;
use crate::http::error::{ApiError, ApiResult};
use crate::http::server::AppState;
use crate::validation::{validate_movie, validate_partial_movie};

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// Query string accepted by `GET /movies`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub genre: Option<String>,
}

pub async fn root() -> Json<Greeting> {
    Json(Greeting {
        message: "Hola Mundo",
    })
}

pub async fn list_movies(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query?;

    let response = match query.genre.as_deref().filter(|g| !g.is_empty()) {
        Some(genre) => {
            let movies = state.store.filter_by_genre(genre);
            tracing::debug!(genre = %genre, matched = movies.len(), "Filtered movies");
            Json(movies).into_response()
        }
        None => {
            let movies = state.store.list_all();
            Json(movies.as_slice()).into_response()
        }
    };
    Ok(response)
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Movie>> {
    state.store.find_by_id(&id).map(Json).ok_or(ApiError::NotFound)
}

pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let Json(body) = payload?;

    let new_movie = validate_movie(&body).inspect_err(|errors| {
        tracing::debug!(issues = errors.len(), "Rejected movie payload");
    })?;

    let movie = new_movie.into_movie(Uuid::new_v4().to_string());
    state.store.append(movie.clone());

    tracing::info!(id = %movie.id, title = %movie.title, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Movie>> {
    let Json(body) = payload?;

    let patch = validate_partial_movie(&body).inspect_err(|errors| {
        tracing::debug!(id = %id, issues = errors.len(), "Rejected movie update");
    })?;

    let movie = state.store.update(&id, patch).ok_or(ApiError::NotFound)?;

    tracing::info!(id = %movie.id, "Movie updated");
    Ok(Json(movie))
}
