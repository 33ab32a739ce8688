//! Movie record types.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Genre tags a movie may carry.
///
/// Canonical names are lower-case; parsing ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    SciFi,
    Romance,
}

impl Genre {
    /// Every genre, in canonical order.
    pub const ALL: [Genre; 6] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::SciFi,
        Genre::Romance,
    ];

    /// Canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Comedy => "comedy",
            Genre::Drama => "drama",
            Genre::Horror => "horror",
            Genre::SciFi => "sci-fi",
            Genre::Romance => "romance",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tag is not one of the known genres.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown genre: {0}")]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str() == lowered)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Genre {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A movie held in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identifier, assigned by the server.
    pub id: String,
    pub title: String,
    /// Release year, never earlier than 1888.
    pub year: u32,
    pub director: String,
    /// Running time in minutes.
    pub duration: u32,
    /// Poster image URL.
    pub poster: String,
    pub genre: Vec<Genre>,
}

impl Movie {
    /// Overwrite the fields present in `patch`. The id is left untouched.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }
}

/// A fully validated creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub year: u32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
}

impl NewMovie {
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            poster: self.poster,
            genre: self.genre,
        }
    }
}

/// A validated partial payload; absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<u32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        *self == MoviePatch::default()
    }

    /// Convert into a creation payload; `None` unless every field is set.
    pub fn into_new_movie(self) -> Option<NewMovie> {
        let MoviePatch {
            title: Some(title),
            year: Some(year),
            director: Some(director),
            duration: Some(duration),
            poster: Some(poster),
            genre: Some(genre),
        } = self
        else {
            return None;
        };

        Some(NewMovie {
            title,
            year,
            director,
            duration,
            poster,
            genre,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> Movie {
        Movie {
            id: "1".into(),
            title: "Matrix".into(),
            year: 1999,
            director: "Lana Wachowski".into(),
            duration: 136,
            poster: "https://example.com/matrix.jpg".into(),
            genre: vec![Genre::Action, Genre::SciFi],
        }
    }

    #[test]
    fn test_genre_parse_ignores_case() {
        assert_eq!("ACTION".parse::<Genre>(), Ok(Genre::Action));
        assert_eq!("Sci-Fi".parse::<Genre>(), Ok(Genre::SciFi));
        assert!("western".parse::<Genre>().is_err());
        assert!("scifi".parse::<Genre>().is_err());
    }

    #[test]
    fn test_genre_serializes_canonical() {
        let json = serde_json::to_string(&vec![Genre::SciFi, Genre::Romance]).unwrap();
        assert_eq!(json, r#"["sci-fi","romance"]"#);

        let parsed: Vec<Genre> = serde_json::from_str(r#"["Drama","HORROR"]"#).unwrap();
        assert_eq!(parsed, vec![Genre::Drama, Genre::Horror]);
    }

    #[test]
    fn test_apply_patch_keeps_untouched_fields() {
        let mut movie = matrix();
        movie.apply(MoviePatch {
            year: Some(2000),
            genre: Some(vec![Genre::Drama]),
            ..Default::default()
        });

        assert_eq!(movie.id, "1");
        assert_eq!(movie.title, "Matrix");
        assert_eq!(movie.year, 2000);
        assert_eq!(movie.genre, vec![Genre::Drama]);
    }

    #[test]
    fn test_into_new_movie_needs_every_field() {
        let mut patch = MoviePatch {
            title: Some("Heat".into()),
            year: Some(1995),
            ..Default::default()
        };
        assert!(patch.clone().into_new_movie().is_none());
        assert!(MoviePatch::default().is_empty());

        patch.director = Some("Michael Mann".into());
        patch.duration = Some(170);
        patch.poster = Some("https://example.com/heat.jpg".into());
        patch.genre = Some(vec![Genre::Action, Genre::Drama]);

        let movie = patch.into_new_movie().unwrap().into_movie("3".into());
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.duration, 170);
    }
}
