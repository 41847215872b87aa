//! Request reflection core.
//!
//! # Data Flow
//! ```text
//! Request<Body>
//!     → reflector.rs (read body, split host:port, copy request line)
//!         → query.rs (canonical query + params)
//!         → headers.rs (one value per header name)
//!     → EchoReply (reply.rs)
//!     → serializer.rs (pretty JSON, application/json)
//! ```
//!
//! # Design Decisions
//! - Reflection is a pure function of the buffered request
//! - Missing data is reported through sentinels, not errors
//! - Body read and serialization failures are per-request errors

pub mod error;
pub mod headers;
pub mod query;
pub mod reflector;
pub mod reply;
pub mod serializer;
pub mod split;

pub use error::EchoError;
pub use reflector::{reflect, reflect_request};
pub use reply::EchoReply;
pub use serializer::JsonDocument;
