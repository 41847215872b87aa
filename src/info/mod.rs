//! Auxiliary documents: environment snapshot and system metadata.
//!
//! Both are built once at startup and shared read-only between requests.

pub mod env;
pub mod system;

pub use env::EnvSnapshot;
pub use system::SystemInfo;
