//! Movie payload schema.

use serde_json::Value;

use crate::catalog::types::{MoviePatch, NewMovie};
use crate::validation::issues::ValidationErrors;
use crate::validation::rules::{apply_rules, Constraint, FieldRule, Messages, Mode};

/// Earliest year a film can have been made.
pub const EARLIEST_FILM_YEAR: u32 = 1888;

/// Field rules for a movie payload.
pub const MOVIE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "title",
        constraint: Constraint::Text { min_len: 1 },
        messages: Messages {
            required: Some("El título es requerido"),
            invalid_type: Some("El título debe ser una cadena de texto"),
            constraint: Some("El título es requerido"),
        },
    },
    FieldRule {
        field: "year",
        constraint: Constraint::Integer {
            min: Some(EARLIEST_FILM_YEAR),
            positive: false,
        },
        messages: Messages {
            required: None,
            invalid_type: None,
            constraint: Some("El año debe ser un número válido"),
        },
    },
    FieldRule {
        field: "director",
        constraint: Constraint::Text { min_len: 1 },
        messages: Messages {
            required: None,
            invalid_type: None,
            constraint: Some("El director es requerido"),
        },
    },
    FieldRule {
        field: "duration",
        constraint: Constraint::Integer {
            min: None,
            positive: true,
        },
        messages: Messages {
            required: None,
            invalid_type: None,
            constraint: None,
        },
    },
    FieldRule {
        field: "poster",
        constraint: Constraint::Url,
        messages: Messages {
            required: None,
            invalid_type: None,
            constraint: Some("La URL del poster debe ser válida"),
        },
    },
    FieldRule {
        field: "genre",
        constraint: Constraint::GenreSet,
        messages: Messages {
            required: Some("El género es requerido"),
            invalid_type: Some("El género debe ser una cadena de texto"),
            constraint: None,
        },
    },
];

/// Validate a creation payload; every field is required.
pub fn validate_movie(input: &Value) -> Result<NewMovie, ValidationErrors> {
    // Full mode has already reported every absent field.
    validate(input, Mode::Full)?
        .into_new_movie()
        .ok_or_else(|| ValidationErrors::new(Vec::new()))
}

/// Validate an update payload; only present fields are checked.
pub fn validate_partial_movie(input: &Value) -> Result<MoviePatch, ValidationErrors> {
    validate(input, Mode::Partial)
}

fn validate(input: &Value, mode: Mode) -> Result<MoviePatch, ValidationErrors> {
    let mut fields = apply_rules(MOVIE_RULES, input, mode)?;

    Ok(MoviePatch {
        title: fields.take_text("title"),
        year: fields.take_integer("year"),
        director: fields.take_text("director"),
        duration: fields.take_integer("duration"),
        poster: fields.take_text("poster"),
        genre: fields.take_genres("genre"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::Genre;
    use crate::validation::issues::IssueCode;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "title": "The Godfather",
            "year": 1972,
            "director": "Francis Ford Coppola",
            "duration": 175,
            "poster": "https://img.example.com/godfather.jpg",
            "genre": "Drama"
        })
    }

    #[test]
    fn test_valid_payload() {
        let movie = validate_movie(&valid()).unwrap();
        assert_eq!(movie.title, "The Godfather");
        assert_eq!(movie.year, 1972);
        assert_eq!(movie.duration, 175);
        assert_eq!(movie.poster, "https://img.example.com/godfather.jpg");
        assert_eq!(movie.genre, vec![Genre::Drama]);
    }

    #[test]
    fn test_genre_list_accepted_and_deduplicated() {
        let mut input = valid();
        input["genre"] = json!(["Drama", "ACTION", "action"]);
        let movie = validate_movie(&input).unwrap();
        assert_eq!(movie.genre, vec![Genre::Drama, Genre::Action]);
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let mut input = valid();
        input["id"] = json!("client-chosen");
        input["rating"] = json!(9.2);
        assert!(validate_movie(&input).is_ok());
    }

    #[test]
    fn test_missing_title() {
        let mut input = valid();
        input.as_object_mut().unwrap().remove("title");

        let errors = validate_movie(&input).unwrap_err();
        assert_eq!(errors.fields(), vec!["title"]);
        assert_eq!(errors.issues()[0].message, "El título es requerido");
        assert_eq!(errors.issues()[0].code, IssueCode::InvalidType);
    }

    #[test]
    fn test_every_violation_is_reported() {
        let input = json!({
            "title": "",
            "year": 1887,
            "director": 42,
            "duration": 0,
            "poster": "not a url",
            "genre": "western"
        });

        let errors = validate_movie(&input).unwrap_err();
        assert_eq!(
            errors.fields(),
            vec!["title", "year", "director", "duration", "poster", "genre"]
        );

        let messages: Vec<_> = errors.issues().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages[0], "El título es requerido");
        assert_eq!(messages[1], "El año debe ser un número válido");
        assert_eq!(messages[2], "Expected string, received number");
        assert_eq!(messages[3], "Number must be greater than 0");
        assert_eq!(messages[4], "La URL del poster debe ser válida");
        assert!(messages[5].starts_with("Invalid enum value."));
        assert_eq!(errors.issues()[5].code, IssueCode::InvalidEnumValue);
    }

    #[test]
    fn test_genre_wrong_type() {
        let mut input = valid();
        input["genre"] = json!(7);
        let errors = validate_movie(&input).unwrap_err();
        assert_eq!(errors.issues()[0].message, "El género debe ser una cadena de texto");
    }

    #[test]
    fn test_empty_genre_list() {
        let mut input = valid();
        input["genre"] = json!([]);

        let errors = validate_movie(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.issues()[0].code, IssueCode::TooSmall);
        assert_eq!(errors.issues()[0].path, vec!["genre"]);
    }

    #[test]
    fn test_genre_list_items_are_checked_by_index() {
        let mut input = valid();
        input["genre"] = json!([7, "x"]);

        let errors = validate_movie(&input).unwrap_err();
        assert_eq!(errors.len(), 2);

        let first = &errors.issues()[0];
        assert_eq!(first.path, vec!["genre", "0"]);
        assert_eq!(first.code, IssueCode::InvalidType);
        assert_eq!(first.message, "El género debe ser una cadena de texto");

        let second = &errors.issues()[1];
        assert_eq!(second.path, vec!["genre", "1"]);
        assert_eq!(second.code, IssueCode::InvalidEnumValue);
    }

    #[test]
    fn test_partial_checks_only_present_fields() {
        let patch = validate_partial_movie(&json!({"year": 2001})).unwrap();
        assert_eq!(patch.year, Some(2001));
        assert!(patch.title.is_none());

        assert!(validate_partial_movie(&json!({})).unwrap().is_empty());

        let errors = validate_partial_movie(&json!({"poster": "nope"})).unwrap_err();
        assert_eq!(errors.fields(), vec!["poster"]);
    }
}
