//! CatalogStore: the transactional table set
//!
//! ## Transaction model
//!
//! The engine is storage-transaction-driven: every operation that performs
//! more than one mutation (cascade delete, swap) runs inside one
//! `transaction` closure. The closure receives a staged copy of the tables
//! under the exclusive write lock; the copy is installed only when the
//! closure returns `Ok`. A failing closure leaves committed state untouched,
//! no matter how far its mutations got. Readers take the shared lock against
//! committed state and never observe a partial transaction.
//!
//! There are no retries and no background work; a failed closure surfaces its
//! error immediately.

use crate::table::{AssociationTable, EntityTable};
use brigade_core::error::Result;
use brigade_core::record::{ChefRecord, DishRecord, Entity};
use parking_lot::RwLock;
use tracing::debug;

/// The three tables the engine operates on
#[derive(Debug, Clone, Default)]
pub struct Tables {
    /// Chef records, unique by name
    pub chefs: EntityTable<ChefRecord>,
    /// Dish records, unique by name
    pub dishes: EntityTable<DishRecord>,
    /// Cooks associations, unique by compound key
    pub associations: AssociationTable,
}

/// Table accessor seam for the generic registry
///
/// Lets `EntityRegistry<E>` reach "its" table without knowing which field of
/// [`Tables`] that is.
pub trait Tabled: Entity {
    /// Shared view of this kind's table
    fn table(tables: &Tables) -> &EntityTable<Self>;

    /// Exclusive view of this kind's table
    fn table_mut(tables: &mut Tables) -> &mut EntityTable<Self>;
}

impl Tabled for ChefRecord {
    fn table(tables: &Tables) -> &EntityTable<Self> {
        &tables.chefs
    }

    fn table_mut(tables: &mut Tables) -> &mut EntityTable<Self> {
        &mut tables.chefs
    }
}

impl Tabled for DishRecord {
    fn table(tables: &Tables) -> &EntityTable<Self> {
        &tables.dishes
    }

    fn table_mut(tables: &mut Tables) -> &mut EntityTable<Self> {
        &mut tables.dishes
    }
}

/// Thread-safe store owning the committed table set
///
/// Components hold an `Arc<CatalogStore>` handed to them at construction;
/// there is no process-wide store handle.
#[derive(Debug, Default)]
pub struct CatalogStore {
    tables: RwLock<Tables>,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a read closure against committed state
    pub fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> T {
        f(&self.tables.read())
    }

    /// Run a mutation closure as one atomic unit
    ///
    /// The closure works on a staged copy under the exclusive lock. On `Ok`
    /// the copy becomes the committed state; on `Err` it is discarded and the
    /// error is returned unchanged.
    pub fn transaction<T>(&self, f: impl FnOnce(&mut Tables) -> Result<T>) -> Result<T> {
        let mut committed = self.tables.write();
        let mut staged = committed.clone();
        match f(&mut staged) {
            Ok(value) => {
                *committed = staged;
                debug!("transaction committed");
                Ok(value)
            }
            Err(e) => {
                debug!(error = %e, "transaction discarded");
                Err(e)
            }
        }
    }
}
