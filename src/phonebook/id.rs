//! Record id assignment.

use rand::Rng;

use crate::phonebook::PersonId;

/// Exclusive upper bound of generated ids.
pub const MAX_ID: PersonId = 1_000_000_000;

/// Source of candidate ids for new records.
///
/// The store may ask for several candidates when one collides with an
/// existing record.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> PersonId;
}

/// Uniform random ids in `[0, MAX_ID)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> PersonId {
        rand::thread_rng().gen_range(0..MAX_ID)
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> PersonId + Send,
{
    fn next_id(&mut self) -> PersonId {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ids_stay_in_range() {
        let mut ids = RandomIds;
        for _ in 0..1_000 {
            assert!(ids.next_id() < MAX_ID);
        }
    }

    #[test]
    fn test_closure_generator() {
        let mut n = 10;
        let mut ids = move || {
            n += 1;
            n
        };
        assert_eq!(IdGenerator::next_id(&mut ids), 11);
        assert_eq!(IdGenerator::next_id(&mut ids), 12);
    }
}
