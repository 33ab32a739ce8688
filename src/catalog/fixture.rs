//! Initial dataset loading.
//!
//! The bundled fixture is compiled in; a different file can be supplied through
//! `store.fixture_path`. Fixture records are trusted and not re-validated.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::catalog::types::Movie;

/// Fixture shipped with the binary.
pub const BUNDLED_FIXTURE: &str = include_str!("../../data/movies.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of movies.
pub fn parse_fixture(content: &str) -> Result<Vec<Movie>, FixtureError> {
    Ok(serde_json::from_str(content)?)
}

/// Load movies from `path`, or the bundled fixture when no path is given.
pub fn load_fixture(path: Option<&Path>) -> Result<Vec<Movie>, FixtureError> {
    let movies = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            parse_fixture(&content)?
        }
        None => parse_fixture(BUNDLED_FIXTURE)?,
    };

    tracing::debug!(count = movies.len(), source = ?path, "Fixture loaded");
    Ok(movies)
}
