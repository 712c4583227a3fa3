//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs, --config or PHONEBOOK_CONFIG)
//!     → PORT environment variable
//!     → --port flag
//!     → validation.rs (semantic checks)
//!     → PhonebookConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so the service runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::{
    LimitsConfig, ListenerConfig, LogFormat, ObservabilityConfig, PhonebookConfig,
    StaticFilesConfig,
};
pub use validation::{validate_config, ValidationError};
