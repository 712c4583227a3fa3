//! Phonebook domain subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → types.rs (NewPerson payload, presence checks)
//!     → store.rs (uniqueness check, id assignment, append/remove)
//!     → id.rs (random id source)
//!     → Person returned to the handler for serialization
//! ```
//!
//! # Design Decisions
//! - The store is the single owner of the collection; handlers hold a cloned handle
//! - Every operation runs inside one critical section, so no caller observes a
//!   half-applied change
//! - Records are never edited in place: they are appended or removed

pub mod id;
pub mod store;
pub mod types;

pub use id::{IdGenerator, RandomIds, MAX_ID};
pub use store::PersonStore;
pub use types::{NewPerson, Person, PersonId, PhonebookError, PhonebookResult};
