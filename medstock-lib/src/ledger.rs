//! The local mirror of the remote row store.

use crate::entry::{Entry, EntryId};

/// Ordered list of entries keyed by identifier.
///
/// This is the single source of truth for the table view, which is a pure
/// projection of it. The ledger is a best-effort mirror of the remote store:
/// a reload replaces it wholesale with whatever the store returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire contents, discarding any prior local state.
    pub fn replace_all(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the entry with the given identifier, if present. If identifiers
    /// collided, only the first match is removed.
    pub fn remove(&mut self, id: &EntryId) -> Option<Entry> {
        let index = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Entry>> for Ledger {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry(id: &str) -> Entry {
        Entry {
            id: id.into(),
            date: "2024-01-01".into(),
            branch: "Main".into(),
            product: "Gloves".into(),
            quantity: 10.0,
        }
    }

    #[test]
    fn test_push_appends_exactly_one() {
        let mut ledger = Ledger::new();

        ledger.push(entry("1"));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(&"1".into()).unwrap().branch, "Main");
    }

    #[test]
    fn test_remove_targets_only_the_matching_row() {
        let mut ledger = Ledger::from(vec![entry("1"), entry("2"), entry("3")]);

        let removed = ledger.remove(&"2".into()).unwrap();

        assert_eq!(removed.id, "2".into());
        assert_eq!(ledger.len(), 2);
        assert!(ledger.get(&"1".into()).is_some());
        assert!(ledger.get(&"2".into()).is_none());
        assert!(ledger.get(&"3".into()).is_some());
    }

    #[test]
    fn test_remove_missing_id_changes_nothing() {
        let mut ledger = Ledger::from(vec![entry("1")]);

        assert!(ledger.remove(&"nope".into()).is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_replace_all_discards_prior_state() {
        let mut ledger = Ledger::from(vec![entry("old")]);

        ledger.replace_all(vec![entry("a"), entry("b")]);

        assert_eq!(ledger.len(), 2);
        assert!(ledger.get(&"old".into()).is_none());
    }

    #[test]
    fn test_replace_all_is_idempotent() {
        let mut first = Ledger::new();
        first.replace_all(vec![entry("a"), entry("b")]);

        let mut second = first.clone();
        second.replace_all(vec![entry("a"), entry("b")]);

        assert_eq!(first, second);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut ledger = Ledger::new();
        for id in ["3", "1", "2"] {
            ledger.push(entry(id));
        }

        let ids: Vec<&str> = ledger.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }
}
