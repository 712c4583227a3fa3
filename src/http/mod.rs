//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → middleware/access_log.rs (buffer POST body, log, metrics)
//!     → request.rs (path ids, JSON payload extraction)
//!     → persons.rs / pages.rs (handlers over the PersonStore)
//!     → response.rs (domain errors → status + JSON)
//!     → Send to client
//! ```

pub mod middleware;
pub mod pages;
pub mod persons;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::ApiError;
pub use server::{AppState, HttpServer};
