//! Typed async client for the phonebook HTTP API.

mod client;

pub use client::{ClientError, ClientResult, Person, PhonebookClient};
