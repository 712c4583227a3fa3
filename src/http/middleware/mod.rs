//! Request middleware owned by this crate.
//!
//! CORS, request ids, timeouts and body limits come from tower-http and are
//! wired in `server.rs`.

pub mod access_log;

pub use access_log::{access_log_middleware, AccessLog};
