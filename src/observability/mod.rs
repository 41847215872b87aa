//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! main.rs
//!     → logging.rs (subscriber: filter + text/json formatter)
//!
//! Every request:
//!     → tower_http TraceLayer (span per request)
//!     → access_log.rs (status, method, path, elapsed)
//! ```
//!
//! # Design Decisions
//! - Structured logging through `tracing`
//! - `RUST_LOG` overrides the configured filter
//! - Request ID is recorded on every access log line

pub mod access_log;
pub mod logging;

pub use access_log::access_log;
pub use logging::init_logging;
