//! Ordered, copy-on-write storage for committed user rows.
//!
//! Every mutation builds a new sequence and swaps it in; the previous
//! sequence is never touched. A [`RecordStore::snapshot`] taken before a
//! mutation therefore keeps describing the rows as they were.

use std::ops::Index;
use std::sync::Arc;

use ums_model::UserRecord;

/// The ordered list of committed rows. Insertion order is display order.
#[derive(Debug, Clone)]
pub struct RecordStore {
    rows: Arc<[UserRecord]>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            rows: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&UserRecord> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[UserRecord] {
        &self.rows
    }

    /// A cheap handle on the current sequence that later mutations never
    /// alter.
    pub fn snapshot(&self) -> Arc<[UserRecord]> {
        Arc::clone(&self.rows)
    }

    /// Add `record` as the new last row. Duplicates are allowed.
    pub fn append(&mut self, record: UserRecord) {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.extend_from_slice(&self.rows);
        rows.push(record);
        self.rows = rows.into();
    }

    /// Remove the row at `index`, shifting later rows left by one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> UserRecord {
        self.check_index("remove_at", index);
        let mut rows = self.rows.to_vec();
        let removed = rows.remove(index);
        self.rows = rows.into();
        removed
    }

    /// Substitute the row at `index`, returning the previous row.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn replace_at(&mut self, index: usize, record: UserRecord) -> UserRecord {
        self.check_index("replace_at", index);
        let mut rows = self.rows.to_vec();
        let previous = std::mem::replace(&mut rows[index], record);
        self.rows = rows.into();
        previous
    }

    fn check_index(&self, op: &str, index: usize) {
        assert!(
            index < self.rows.len(),
            "{op}: row index {index} out of range for store of {} rows",
            self.rows.len()
        );
    }
}

impl PartialEq for RecordStore {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl Eq for RecordStore {}

impl Index<usize> for RecordStore {
    type Output = UserRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl From<Vec<UserRecord>> for RecordStore {
    fn from(rows: Vec<UserRecord>) -> Self {
        Self { rows: rows.into() }
    }
}

impl FromIterator<UserRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ums_model::Gender;

    fn row(name: &str) -> UserRecord {
        UserRecord::new(name, "Doe", format!("{name}@x.com"), Gender::Other, "555-0000")
    }

    #[test]
    fn test_append_keeps_order() {
        let mut store = RecordStore::new();
        store.append(row("a"));
        store.append(row("b"));
        assert_eq!(store.as_slice(), &[row("a"), row("b")]);
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut store: RecordStore = vec![row("a"), row("b"), row("c")].into();
        let removed = store.remove_at(1);
        assert_eq!(removed, row("b"));
        assert_eq!(store.as_slice(), &[row("a"), row("c")]);
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut store: RecordStore = vec![row("a"), row("b")].into();
        let previous = store.replace_at(0, row("z"));
        assert_eq!(previous, row("a"));
        assert_eq!(store[0], row("z"));
        assert_eq!(store[1], row("b"));
    }

    #[test]
    fn test_snapshot_survives_mutation() {
        let mut store: RecordStore = vec![row("a")].into();
        let before = store.snapshot();
        store.append(row("b"));
        store.replace_at(0, row("z"));
        assert_eq!(&*before, &[row("a")]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    #[should_panic(expected = "remove_at: row index 0 out of range for store of 0 rows")]
    fn test_remove_out_of_range_panics() {
        RecordStore::new().remove_at(0);
    }

    #[test]
    #[should_panic(expected = "replace_at: row index 2 out of range")]
    fn test_replace_out_of_range_panics() {
        let mut store: RecordStore = vec![row("a"), row("b")].into();
        store.replace_at(2, row("c"));
    }
}
