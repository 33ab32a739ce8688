//! Movie catalog subsystem.
//!
//! # Data Flow
//! ```text
//! data/movies.json (or configured fixture)
//!     → fixture.rs (deserialize, no validation)
//!     → store.rs (MovieStore, shared via Arc)
//!     → http handlers read / append / update
//! ```
//!
//! # Design Decisions
//! - Records only enter the store through the fixture or a validated payload
//! - Insertion order is preserved and is the order returned by listings
//! - Nothing is persisted; a restart reloads the fixture

pub mod fixture;
pub mod store;
pub mod types;

pub use fixture::{load_fixture, FixtureError};
pub use store::MovieStore;
pub use types::{Genre, Movie, MoviePatch, NewMovie};
