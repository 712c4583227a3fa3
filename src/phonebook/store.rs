//! In-memory record store.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::observability::metrics;
use crate::phonebook::{
    IdGenerator, NewPerson, Person, PersonId, PhonebookError, PhonebookResult, RandomIds,
};

/// Draws allowed per create before a colliding id is accepted.
const MAX_ID_ATTEMPTS: usize = 16;

struct Inner {
    persons: Vec<Person>,
    ids: Box<dyn IdGenerator>,
}

/// Shared handle to the contact collection.
///
/// Clones point at the same collection. Each operation takes the lock once
/// and releases it before returning.
#[derive(Clone)]
pub struct PersonStore {
    inner: Arc<Mutex<Inner>>,
}

impl PersonStore {
    /// Create a store with the given records and id source.
    pub fn new(persons: Vec<Person>, ids: impl IdGenerator + 'static) -> Self {
        metrics::record_person_count(persons.len());
        Self {
            inner: Arc::new(Mutex::new(Inner {
                persons,
                ids: Box::new(ids),
            })),
        }
    }

    /// Create an empty store with random ids.
    pub fn empty() -> Self {
        Self::new(Vec::new(), RandomIds)
    }

    /// Create a store holding the seed records, with random ids.
    pub fn seeded() -> Self {
        Self::new(seed_persons(), RandomIds)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // No operation panics between reads and writes of the Vec; a poisoned
        // guard still holds a consistent collection.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of all records in insertion order.
    pub fn list(&self) -> Vec<Person> {
        self.lock().persons.clone()
    }

    /// First record with the given id.
    pub fn get(&self, id: PersonId) -> PhonebookResult<Person> {
        self.lock()
            .persons
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PhonebookError::NotFound)
    }

    /// Validate the payload and append a new record with a fresh id.
    ///
    /// Checks run in order: name present, number present, name unused.
    pub fn create(&self, payload: NewPerson) -> PhonebookResult<Person> {
        let (name, number) = payload.validate()?;

        let mut inner = self.lock();
        if inner.persons.iter().any(|p| p.name == name) {
            return Err(PhonebookError::NameTaken);
        }

        let id = inner.fresh_id();
        let person = Person::new(id, name, number);
        inner.persons.push(person.clone());
        metrics::record_person_count(inner.persons.len());

        tracing::debug!(id = person.id, name = %person.name, "Person created");
        Ok(person)
    }

    /// Remove every record with the given id. Returns whether anything was removed.
    pub fn delete(&self, id: PersonId) -> bool {
        let mut inner = self.lock();
        let before = inner.persons.len();
        inner.persons.retain(|p| p.id != id);
        let removed = inner.persons.len() != before;
        if removed {
            metrics::record_person_count(inner.persons.len());
            tracing::debug!(id, "Person deleted");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.lock().persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Inner {
    fn fresh_id(&mut self) -> PersonId {
        let mut id = self.ids.next_id();
        for _ in 1..MAX_ID_ATTEMPTS {
            if !self.is_taken(id) {
                return id;
            }
            id = self.ids.next_id();
        }
        if self.is_taken(id) {
            tracing::warn!(id, "Could not draw an unused id, accepting collision");
        }
        id
    }

    fn is_taken(&self, id: PersonId) -> bool {
        self.persons.iter().any(|p| p.id == id)
    }
}

/// The records present at process start.
pub fn seed_persons() -> Vec<Person> {
    vec![
        Person::new(1, "Arto Hellas", "040-123456"),
        Person::new(2, "Ada Lovelace", "39-44-5323523"),
        Person::new(3, "Dan Abramov", "12-43-234345"),
        Person::new(4, "Mary Poppendieck", "39-23-6423122"),
    ]
}
