//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers / server / startup
//!     → tracing events (structured fields: id, title, request_id, ...)
//!     → logging.rs subscriber (EnvFilter + fmt)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - RUST_LOG wins over the configured level

pub mod logging;

pub use logging::init_logging;
