//! AssociationStore: CRUD and swap for cooks associations
//!
//! Operations resolve entity names inside the transaction, so validation and
//! mutation see the same committed state. A name that fails to resolve is an
//! `InvalidReference`; a resolved pair with no association row is
//! `AssociationNotFound`. Callers can tell the two apart.

use brigade_core::error::{Error, Result};
use brigade_core::record::AssociationRecord;
use brigade_core::types::{AssocKey, ChefId, DishId, EntityKind};
use brigade_storage::{CatalogStore, Tables};
use std::sync::Arc;
use tracing::info;

/// Store facade for cooks associations
///
/// Holds only the store handle; `Send + Sync`, cheap to clone.
#[derive(Clone)]
pub struct AssociationStore {
    store: Arc<CatalogStore>,
}

impl AssociationStore {
    /// Create an association store over the given catalog store
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Resolve a (chef name, dish name) pair to endpoint ids
    fn resolve(tables: &Tables, chef_name: &str, dish_name: &str) -> Result<(ChefId, DishId)> {
        let chef = tables
            .chefs
            .find_by_name(chef_name)
            .ok_or_else(|| Error::invalid_reference(EntityKind::Chef, chef_name))?;
        let dish = tables
            .dishes
            .find_by_name(dish_name)
            .ok_or_else(|| Error::invalid_reference(EntityKind::Dish, dish_name))?;
        Ok((chef.id(), dish.id()))
    }

    /// Associate a chef with a dish
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidReference`] when either name does not resolve
    /// - [`Error::DuplicateAssociation`] when the pair is already associated
    pub fn create(&self, chef_name: &str, dish_name: &str) -> Result<()> {
        self.store.transaction(|tables| {
            let (chef_id, dish_id) = Self::resolve(tables, chef_name, dish_name)?;
            if !tables
                .associations
                .try_insert(AssociationRecord::link(chef_id, dish_id))
            {
                return Err(Error::duplicate_association(chef_name, dish_name));
            }
            Ok(())
        })?;
        info!(chef = %chef_name, dish = %dish_name, "created association");
        Ok(())
    }

    /// All associations as (chef name, dish name) pairs
    ///
    /// Ordered ascending by creation time; names are resolved at read time,
    /// so a rename shows up immediately without touching association rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if a row references a missing record,
    /// which the cascade invariant rules out in committed state.
    pub fn list(&self) -> Result<Vec<(String, String)>> {
        self.store.read(|tables| {
            tables
                .associations
                .list()
                .into_iter()
                .map(|record| {
                    let chef = tables.chefs.get(record.chef_id()).ok_or_else(|| {
                        Error::storage(format!(
                            "association {} references a missing chef",
                            record.key()
                        ))
                    })?;
                    let dish = tables.dishes.get(record.dish_id()).ok_or_else(|| {
                        Error::storage(format!(
                            "association {} references a missing dish",
                            record.key()
                        ))
                    })?;
                    Ok((chef.name().to_string(), dish.name().to_string()))
                })
                .collect()
        })
    }

    /// Remove the association between a pair
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidReference`] when either name does not resolve
    /// - [`Error::AssociationNotFound`] when the pair is not associated
    pub fn delete(&self, chef_name: &str, dish_name: &str) -> Result<()> {
        self.store.transaction(|tables| {
            let (chef_id, dish_id) = Self::resolve(tables, chef_name, dish_name)?;
            let key = AssocKey::derive(chef_id, dish_id);
            if tables.associations.remove(&key).is_none() {
                return Err(Error::association_not_found(chef_name, dish_name));
            }
            Ok(())
        })?;
        info!(chef = %chef_name, dish = %dish_name, "deleted association");
        Ok(())
    }

    /// Re-point an association from one pair to another
    ///
    /// A swap is a relationship rename, not delete-plus-create: the new row
    /// inherits the old row's creation timestamp, keeping its position in
    /// creation order, and both mutations commit as one unit.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidReference`] when any of the four names fails to
    ///   resolve
    /// - [`Error::DuplicateAssociation`] when the new pair is already
    ///   associated (including a swap of a pair onto itself)
    /// - [`Error::AssociationNotFound`] when the old pair is not associated
    pub fn swap(
        &self,
        old_chef: &str,
        old_dish: &str,
        new_chef: &str,
        new_dish: &str,
    ) -> Result<()> {
        self.store.transaction(|tables| {
            let (old_chef_id, old_dish_id) = Self::resolve(tables, old_chef, old_dish)?;
            let (new_chef_id, new_dish_id) = Self::resolve(tables, new_chef, new_dish)?;

            let new_key = AssocKey::derive(new_chef_id, new_dish_id);
            if tables.associations.contains(&new_key) {
                return Err(Error::duplicate_association(new_chef, new_dish));
            }

            let old_key = AssocKey::derive(old_chef_id, old_dish_id);
            let Some(old) = tables.associations.remove(&old_key) else {
                return Err(Error::association_not_found(old_chef, old_dish));
            };

            let repointed =
                AssociationRecord::repoint(new_chef_id, new_dish_id, old.created_at());
            if !tables.associations.try_insert(repointed) {
                return Err(Error::storage(format!(
                    "association key {} occupied mid-transaction",
                    new_key
                )));
            }
            Ok(())
        })?;
        info!(
            old_chef = %old_chef,
            old_dish = %old_dish,
            new_chef = %new_chef,
            new_dish = %new_dish,
            "swapped association"
        );
        Ok(())
    }
}
