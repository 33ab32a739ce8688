//! Payload validation subsystem.
//!
//! # Data Flow
//! ```text
//! untyped JSON body (serde_json::Value)
//!     → rules.rs (walk the rule table, collect every issue)
//!     → movie.rs (MOVIE_RULES, build NewMovie / MoviePatch)
//!     → issues.rs (ValidationErrors on failure)
//! ```
//!
//! # Design Decisions
//! - Rules are data: one table entry per field, checked by a single engine
//! - Full mode requires every field; partial mode checks only what is present
//! - All issues are reported, in table order, not just the first
//! - Validation is pure: Value → Result<T, ValidationErrors>

pub mod issues;
pub mod movie;
pub mod rules;

pub use issues::{Issue, IssueCode, ValidationErrors};
pub use movie::{validate_movie, validate_partial_movie, MOVIE_RULES};
pub use rules::{Constraint, FieldRule, Messages, Mode};
