//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! MOVIES_CONFIG file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → PORT env override
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; with no file and no PORT the service listens on 1234
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::LimitsConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::StoreConfig;
