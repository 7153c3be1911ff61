//! Typed tables with unique-constraint enforcement
//!
//! ## Design
//!
//! - `EntityTable<E>`: rows keyed by the store-assigned id, plus a unique
//!   name index. Both are maintained inside the same mutation call, so the
//!   index can never drift from the rows.
//! - `AssociationTable`: rows keyed directly by the compound `AssocKey`, so
//!   pair uniqueness is the map's own invariant.
//! - `Row<T>` records the insertion sequence; listings sort ascending by
//!   `(created_at, seq)`, which makes insertion order the tiebreak for equal
//!   timestamps.
//!
//! `try_insert` is the atomic insert-or-fail primitive: uniqueness is decided
//! and the row inserted in one call, never as separate check and act steps.

use brigade_core::record::{AssociationRecord, Entity};
use brigade_core::types::{AssocKey, Endpoint};
use std::collections::BTreeMap;

/// A stored row: the record plus its insertion sequence number
#[derive(Debug, Clone)]
struct Row<T> {
    seq: u64,
    record: T,
}

/// Table of one entity kind with a unique name index
#[derive(Debug, Clone)]
pub struct EntityTable<E: Entity> {
    rows: BTreeMap<E::Id, Row<E>>,
    by_name: BTreeMap<String, E::Id>,
    next_seq: u64,
}

impl<E: Entity> EntityTable<E> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            by_name: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve a name to its id (exact, case-sensitive)
    pub fn id_for(&self, name: &str) -> Option<E::Id> {
        self.by_name.get(name).copied()
    }

    /// Look up a record by id
    pub fn get(&self, id: E::Id) -> Option<&E> {
        self.rows.get(&id).map(|row| &row.record)
    }

    /// Look up a record by its unique name
    pub fn find_by_name(&self, name: &str) -> Option<&E> {
        self.id_for(name).and_then(|id| self.get(id))
    }

    /// Insert a record, failing if its name is taken
    ///
    /// The uniqueness decision and the insert happen in this single call.
    /// Returns the new row's id, or `None` when the name is already indexed.
    pub fn try_insert(&mut self, record: E) -> Option<E::Id> {
        if self.by_name.contains_key(record.name()) {
            return None;
        }
        let id = record.id();
        self.by_name.insert(record.name().to_string(), id);
        self.rows.insert(
            id,
            Row {
                seq: self.next_seq,
                record,
            },
        );
        self.next_seq += 1;
        Some(id)
    }

    /// Mutate a record in place, keeping the name index current
    ///
    /// The caller is responsible for having checked that any new name the
    /// mutation introduces is free; this method only re-indexes.
    /// Returns false when the id has no row.
    pub fn modify(&mut self, id: E::Id, f: impl FnOnce(&mut E)) -> bool {
        let Some(row) = self.rows.get_mut(&id) else {
            return false;
        };
        let old_name = row.record.name().to_string();
        f(&mut row.record);
        if row.record.name() != old_name {
            let new_name = row.record.name().to_string();
            self.by_name.remove(&old_name);
            self.by_name.insert(new_name, id);
        }
        true
    }

    /// Remove a record and its name index entry
    pub fn remove(&mut self, id: E::Id) -> Option<E> {
        let row = self.rows.remove(&id)?;
        self.by_name.remove(row.record.name());
        Some(row.record)
    }

    /// All records, ascending by `(created_at, insertion seq)`
    pub fn list(&self) -> Vec<E> {
        let mut rows: Vec<&Row<E>> = self.rows.values().collect();
        rows.sort_by_key(|row| (row.record.created_at(), row.seq));
        rows.into_iter().map(|row| row.record.clone()).collect()
    }

    /// All names, in the same order as [`list`](Self::list)
    pub fn names(&self) -> Vec<String> {
        self.list()
            .into_iter()
            .map(|record| record.name().to_string())
            .collect()
    }
}

impl<E: Entity> Default for EntityTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Table of cooks associations keyed by compound key
#[derive(Debug, Clone, Default)]
pub struct AssociationTable {
    rows: BTreeMap<AssocKey, Row<AssociationRecord>>,
    next_seq: u64,
}

impl AssociationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether a pair is associated
    pub fn contains(&self, key: &AssocKey) -> bool {
        self.rows.contains_key(key)
    }

    /// Look up an association by key
    pub fn get(&self, key: &AssocKey) -> Option<&AssociationRecord> {
        self.rows.get(key).map(|row| &row.record)
    }

    /// Insert an association, failing if its key is occupied
    ///
    /// Returns false when the pair is already associated.
    pub fn try_insert(&mut self, record: AssociationRecord) -> bool {
        if self.rows.contains_key(&record.key()) {
            return false;
        }
        self.rows.insert(
            record.key(),
            Row {
                seq: self.next_seq,
                record,
            },
        );
        self.next_seq += 1;
        true
    }

    /// Remove an association by key
    pub fn remove(&mut self, key: &AssocKey) -> Option<AssociationRecord> {
        self.rows.remove(key).map(|row| row.record)
    }

    /// Remove every association referencing an endpoint, returning the count
    pub fn remove_matching(&mut self, endpoint: Endpoint) -> usize {
        let before = self.rows.len();
        self.rows.retain(|key, _| !endpoint.matches_key(key));
        before - self.rows.len()
    }

    /// All associations, ascending by `(created_at, insertion seq)`
    pub fn list(&self) -> Vec<AssociationRecord> {
        let mut rows: Vec<&Row<AssociationRecord>> = self.rows.values().collect();
        rows.sort_by_key(|row| (row.record.created_at(), row.seq));
        rows.into_iter().map(|row| row.record.clone()).collect()
    }
}
