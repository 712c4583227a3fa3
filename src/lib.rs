//! In-memory phonebook HTTP service.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod phonebook;

pub use config::PhonebookConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use phonebook::PersonStore;
