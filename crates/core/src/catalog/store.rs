//! Record store: the in-memory result of one full list fetch.
//!
//! Loads are all-or-nothing: a failed fetch records an error and leaves the
//! previous sequence untouched. In-flight fetches are tagged with a
//! generation token so that a slow, superseded response can never overwrite
//! newer data.

/// A record that can be addressed by its backend identifier.
pub trait Keyed {
    /// The backend identifier as a string slice.
    fn key(&self) -> &str;
}

impl Keyed for crate::types::Product {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Keyed for crate::types::Order {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Keyed for crate::types::User {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

/// Token identifying one load attempt.
///
/// Issued by [`RecordStore::begin_load`]; the matching completion must hand
/// it back so stale responses can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// What happened to a load completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The completion was current and was applied to the store.
    Applied,
    /// A newer load had already begun; the completion was discarded.
    Stale,
}

/// Ordered in-memory copy of one "list all X" API response.
#[derive(Debug)]
pub struct RecordStore<T> {
    records: Vec<T>,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordStore<T> {
    /// An empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            error: None,
            generation: 0,
        }
    }

    /// The current sequence, in fetch order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The error recorded by the most recent failed load, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a load attempt, superseding any load still in flight.
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        LoadToken(self.generation)
    }

    /// Apply the result of a load attempt.
    ///
    /// A completion whose token is not the latest issued one is discarded:
    /// the caller started a newer load and this response is stale. On
    /// success the whole sequence is replaced; on failure the previous
    /// sequence is kept and the error recorded.
    pub fn complete_load(
        &mut self,
        token: LoadToken,
        result: Result<Vec<T>, String>,
    ) -> LoadOutcome {
        if token.0 != self.generation {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        LoadOutcome::Applied
    }

    /// Replace the whole sequence directly (synchronous contexts).
    pub fn replace(&mut self, records: Vec<T>) {
        self.records = records;
        self.error = None;
    }
}

impl<T: Keyed> RecordStore<T> {
    /// Look up a record by identifier.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.records.iter().find(|record| record.key() == key)
    }

    /// Drop one record after a round-tripped delete. Returns whether the
    /// record was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.key() != key);
        self.records.len() != before
    }

    /// Replace one record in place after a round-tripped edit, keeping its
    /// position. Returns whether a matching record was found.
    pub fn update(&mut self, record: T) -> bool {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.key() == record.key())
        {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec {
        id: &'static str,
        value: i32,
    }

    impl Keyed for Rec {
        fn key(&self) -> &str {
            self.id
        }
    }

    fn store() -> RecordStore<Rec> {
        let mut store = RecordStore::new();
        store.replace(vec![
            Rec { id: "a", value: 1 },
            Rec { id: "b", value: 2 },
        ]);
        store
    }

    #[test]
    fn test_failed_load_keeps_previous_records() {
        let mut store = store();
        let token = store.begin_load();
        let outcome = store.complete_load(token, Err("network down".to_owned()));
        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(store.len(), 2);
        assert_eq!(store.error(), Some("network down"));
    }

    #[test]
    fn test_successful_load_clears_error() {
        let mut store = store();
        let token = store.begin_load();
        store.complete_load(token, Err("transient".to_owned()));

        let token = store.begin_load();
        let outcome = store.complete_load(token, Ok(vec![Rec { id: "c", value: 3 }]));
        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(store.len(), 1);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut store = RecordStore::new();
        let slow = store.begin_load();
        let fast = store.begin_load();

        // The later fetch lands first.
        let outcome = store.complete_load(fast, Ok(vec![Rec { id: "new", value: 2 }]));
        assert_eq!(outcome, LoadOutcome::Applied);

        // The superseded fetch must not overwrite newer data.
        let outcome = store.complete_load(slow, Ok(vec![Rec { id: "old", value: 1 }]));
        assert_eq!(outcome, LoadOutcome::Stale);
        assert_eq!(store.records()[0].id, "new");
    }

    #[test]
    fn test_remove_and_update_patch_in_place() {
        let mut store = store();
        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert_eq!(store.len(), 1);

        assert!(store.update(Rec { id: "b", value: 9 }));
        assert_eq!(store.get("b").map(|r| r.value), Some(9));
        assert!(!store.update(Rec { id: "zz", value: 0 }));
    }
}
