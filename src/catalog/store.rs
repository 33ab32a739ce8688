//! In-memory movie store.

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::catalog::types::{Genre, Movie, MoviePatch};

/// Ordered, in-memory collection of movies.
///
/// Readers take a snapshot of the current vector; writers publish a new one with
/// `rcu`, so a reader never sees a half-written record.
pub struct MovieStore {
    movies: ArcSwap<Vec<Movie>>,
}

impl MovieStore {
    /// Create a store seeded with `movies`, keeping their order.
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: ArcSwap::from_pointee(movies),
        }
    }

    /// Snapshot of every movie in insertion order.
    pub fn list_all(&self) -> Arc<Vec<Movie>> {
        self.movies.load_full()
    }

    /// First movie whose id equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<Movie> {
        self.movies.load().iter().find(|m| m.id == id).cloned()
    }

    /// Movies tagged with `tag`, compared case-insensitively.
    ///
    /// A tag outside the genre enumeration matches nothing.
    pub fn filter_by_genre(&self, tag: &str) -> Vec<Movie> {
        let Ok(genre) = tag.parse::<Genre>() else {
            return Vec::new();
        };

        self.movies
            .load()
            .iter()
            .filter(|m| m.genre.contains(&genre))
            .cloned()
            .collect()
    }

    /// Add a movie at the end.
    pub fn append(&self, movie: Movie) {
        self.movies.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(movie.clone());
            next
        });
    }

    /// Merge `patch` into the movie with `id` and return the updated record.
    pub fn update(&self, id: &str, patch: MoviePatch) -> Option<Movie> {
        let mut updated = None;

        self.movies.rcu(|current| {
            let mut next = Vec::clone(current);
            updated = next.iter_mut().find(|m| m.id == id).map(|movie| {
                movie.apply(patch.clone());
                movie.clone()
            });
            next
        });

        updated
    }

    pub fn len(&self) -> usize {
        self.movies.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str, genre: Vec<Genre>) -> Movie {
        Movie {
            id: id.into(),
            title: title.into(),
            year: 1999,
            director: "Someone".into(),
            duration: 120,
            poster: "https://example.com/poster.jpg".into(),
            genre,
        }
    }

    fn store() -> MovieStore {
        MovieStore::new(vec![
            movie("1", "Matrix", vec![Genre::Action, Genre::SciFi]),
            movie("2", "Amelie", vec![Genre::Comedy, Genre::Romance]),
            movie("3", "Heat", vec![Genre::Action, Genre::Drama]),
        ])
    }

    #[test]
    fn test_list_all_preserves_order() {
        let titles: Vec<_> = store().list_all().iter().map(|m| m.title.clone()).collect();
        assert_eq!(titles, vec!["Matrix", "Amelie", "Heat"]);
    }

    #[test]
    fn test_find_by_id() {
        let store = store();
        assert_eq!(store.find_by_id("2").map(|m| m.title), Some("Amelie".to_string()));
        assert!(store.find_by_id("999").is_none());
    }

    #[test]
    fn test_filter_by_genre_is_case_insensitive() {
        let store = store();
        let lower = store.filter_by_genre("action");
        let upper = store.filter_by_genre("ACTION");

        assert_eq!(lower, upper);
        assert_eq!(lower.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(), vec!["1", "3"]);
        assert!(store.filter_by_genre("horror").is_empty());
        assert!(store.filter_by_genre("western").is_empty());
    }

    #[test]
    fn test_append_goes_to_end() {
        let store = store();
        let before = store.list_all();

        store.append(movie("4", "Alien", vec![Genre::Horror]));

        assert_eq!(store.len(), 4);
        assert_eq!(store.list_all().last().map(|m| m.id.as_str()), Some("4"));
        // Earlier snapshots are unaffected.
        assert_eq!(before.len(), 3);
    }

    #[test]
    fn test_update() {
        let store = store();
        let patch = MoviePatch {
            title: Some("Heat (1995)".into()),
            ..Default::default()
        };

        let updated = store.update("3", patch.clone()).unwrap();
        assert_eq!(updated.title, "Heat (1995)");
        assert_eq!(updated.genre, vec![Genre::Action, Genre::Drama]);
        assert_eq!(store.find_by_id("3"), Some(updated));

        assert!(store.update("999", patch).is_none());
        assert_eq!(store.len(), 3);
    }
}
