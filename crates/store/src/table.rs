//! In-memory table with kind-local identity allocation.
//!
//! One `Table` backs each entity kind in the store. Identities start at 1
//! and increase monotonically; a removed row's identity is never handed out
//! again because the counter only moves forward. Rows are keyed by their
//! identity in a `BTreeMap`, so iteration order is allocation order, which
//! is also insertion order — the owner listings and search scans rely on
//! this.

use std::collections::BTreeMap;

pub(crate) struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    pub(crate) fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Allocates the next identity, builds the row from it, stores it and
    /// returns a copy.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    /// Returns a copy of the row, or `None` if the identity is unknown.
    pub(crate) fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    /// Applies `mutate` to the row in place and returns a copy of the
    /// result. `None` for an unknown identity; nothing is created.
    pub(crate) fn modify(&mut self, id: i64, mutate: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        mutate(row);
        Some(row.clone())
    }

    /// Removes the row, reporting whether it existed.
    pub(crate) fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }

    /// Copies of all rows matching `keep`, in insertion order.
    pub(crate) fn select(&self, mut keep: impl FnMut(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| keep(row)).cloned().collect()
    }

    /// Copies of all rows, in insertion order.
    pub(crate) fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: i64,
        label: String,
    }

    fn insert(table: &mut Table<Row>, label: &str) -> Row {
        table.insert_with(|id| Row {
            id,
            label: label.to_string(),
        })
    }

    #[test]
    fn identities_start_at_one_and_increase() {
        let mut table = Table::new();
        assert_eq!(insert(&mut table, "a").id, 1);
        assert_eq!(insert(&mut table, "b").id, 2);
        assert_eq!(insert(&mut table, "c").id, 3);
    }

    #[test]
    fn removed_identities_are_never_reused() {
        let mut table = Table::new();
        insert(&mut table, "a");
        let b = insert(&mut table, "b");

        assert!(table.remove(b.id));
        assert!(!table.remove(b.id), "second remove reports absence");

        let c = insert(&mut table, "c");
        assert_eq!(c.id, 3, "counter moves forward past removed rows");
        assert!(table.get(b.id).is_none());
    }

    #[test]
    fn modify_on_unknown_identity_is_a_no_op() {
        let mut table: Table<Row> = Table::new();
        insert(&mut table, "a");

        let result = table.modify(99, |row| row.label = "changed".to_string());
        assert!(result.is_none());
        assert_eq!(table.get(1).expect("row 1 exists").label, "a");
    }

    #[test]
    fn select_preserves_insertion_order() {
        let mut table = Table::new();
        for label in ["a", "b", "c", "d"] {
            insert(&mut table, label);
        }

        let odd: Vec<i64> = table.select(|row| row.id % 2 == 1).iter().map(|r| r.id).collect();
        assert_eq!(odd, vec![1, 3]);

        let all: Vec<i64> = table.all().iter().map(|r| r.id).collect();
        assert_eq!(all, vec![1, 2, 3, 4]);
    }

    #[test]
    fn get_returns_a_copy_not_a_view() {
        let mut table = Table::new();
        insert(&mut table, "a");

        let mut copy = table.get(1).expect("row 1 exists");
        copy.label = "mutated".to_string();

        assert_eq!(table.get(1).expect("row 1 exists").label, "a");
    }
}
