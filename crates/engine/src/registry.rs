//! EntityRegistry: CRUD for one uniquely named entity kind
//!
//! A stateless facade over the store, generic over the record kind and
//! instantiated once for chefs and once for dishes. All state lives in the
//! store; the registry holds only an `Arc` handle, so it is `Send + Sync`
//! and cheap to clone.

use crate::guard;
use brigade_core::error::{Error, Result};
use brigade_core::record::{Entity, Patch};
use brigade_storage::{CatalogStore, Tabled};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::info;

/// Registry for one entity kind
pub struct EntityRegistry<E: Tabled> {
    store: Arc<CatalogStore>,
    _kind: PhantomData<fn() -> E>,
}

impl<E: Tabled> Clone for EntityRegistry<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _kind: PhantomData,
        }
    }
}

impl<E: Tabled> EntityRegistry<E> {
    /// Create a registry over the given store
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }

    /// Insert a new record, returning its store-assigned id
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] when a record with the same name
    /// already exists. The uniqueness check and the insert are one atomic
    /// table call inside the transaction scope.
    pub fn create(&self, record: E) -> Result<E::Id> {
        let name = record.name().to_string();
        let id = self.store.transaction(|tables| {
            E::table_mut(tables)
                .try_insert(record)
                .ok_or_else(|| Error::duplicate_name(E::KIND, &name))
        })?;
        info!(kind = %E::KIND, name = %name, id = %id, "created record");
        Ok(id)
    }

    /// Look up a record by its unique name (exact, case-sensitive)
    pub fn find_by_name(&self, name: &str) -> Option<E> {
        self.store
            .read(|tables| E::table(tables).find_by_name(name).cloned())
    }

    /// All records, ascending by creation time (insertion order on ties)
    pub fn list(&self) -> Vec<E> {
        self.store.read(|tables| E::table(tables).list())
    }

    /// All names, in listing order
    pub fn names(&self) -> Vec<String> {
        self.store.read(|tables| E::table(tables).names())
    }

    /// Apply a partial update to the record currently holding `name`
    ///
    /// Fields the patch does not carry are left untouched. A rename
    /// re-validates the unique-name constraint.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] when no record matches `name`
    /// - [`Error::DuplicateName`] when the patch renames onto a taken name
    pub fn update(&self, name: &str, patch: &E::Patch) -> Result<()> {
        self.store.transaction(|tables| {
            let table = E::table_mut(tables);
            let Some(id) = table.id_for(name) else {
                return Err(Error::not_found(E::KIND, name));
            };
            if let Some(new_name) = patch.new_name() {
                if new_name != name && table.id_for(new_name).is_some() {
                    return Err(Error::duplicate_name(E::KIND, new_name));
                }
            }
            if !table.modify(id, |record| record.apply(patch)) {
                return Err(Error::storage(format!(
                    "{} name index points at a missing row",
                    E::KIND
                )));
            }
            Ok(())
        })?;
        info!(kind = %E::KIND, name = %name, "updated record");
        Ok(())
    }

    /// Delete the record holding `name`, cascading its associations
    ///
    /// The cascade and the record removal commit as one unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no record matches `name`.
    pub fn delete(&self, name: &str) -> Result<()> {
        let cascaded = self.store.transaction(|tables| {
            let Some(id) = E::table(tables).id_for(name) else {
                return Err(Error::not_found(E::KIND, name));
            };
            let cascaded = guard::cascade_entity_delete(&mut tables.associations, E::endpoint(id));
            if E::table_mut(tables).remove(id).is_none() {
                return Err(Error::storage(format!(
                    "{} name index points at a missing row",
                    E::KIND
                )));
            }
            Ok(cascaded)
        })?;
        info!(kind = %E::KIND, name = %name, cascaded, "deleted record");
        Ok(())
    }
}
