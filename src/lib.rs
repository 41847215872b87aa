//! Diagnostic HTTP echo service library.

pub mod config;
pub mod echo;
pub mod http;
pub mod info;
pub mod lifecycle;
pub mod observability;

pub use config::schema::EchoConfig;
pub use echo::EchoReply;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
