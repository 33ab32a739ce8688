//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → resolve shutdown_signal()
//!
//! Shutdown (shutdown.rs):
//!     trigger() → every wait() future resolves → server stops accepting
//! ```
//!
//! # Design Decisions
//! - No drain deadline: in-flight requests finish, then the process exits
//! - Appended records are not saved; the next start reloads the fixture

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::shutdown_signal;
