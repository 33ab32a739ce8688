//! In-memory movie catalog served over a small JSON REST API.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ http::server (axum router + middleware)
//!                          │
//!                          ├─ GET  /movies[?genre=]   ─▶ catalog::MovieStore
//!                          ├─ GET  /movies/{id}       ─▶ catalog::MovieStore
//!                          ├─ POST /movies            ─▶ validation ─▶ catalog::MovieStore
//!                          └─ PATCH /movies/{id}      ─▶ validation ─▶ catalog::MovieStore
//!
//!     Cross-cutting: config, observability, lifecycle
//! ```

// Core subsystems
pub mod catalog;
pub mod http;
pub mod validation;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use catalog::{Genre, Movie, MovieStore};
pub use config::AppConfig;
pub use http::MovieServer;
pub use lifecycle::Shutdown;
