//! Catalog: the facade binding the full operation surface
//!
//! A thin orchestration layer: it owns the store, instantiates one registry
//! per entity kind plus the association store, and forwards each operation.
//! Presentation layers (HTTP, CLI, whatever) call these methods and render
//! the typed results; nothing transport-shaped lives here.

use crate::associations::AssociationStore;
use crate::registry::EntityRegistry;
use brigade_core::error::Result;
use brigade_core::record::{ChefPatch, ChefRecord, DishPatch, DishRecord};
use brigade_core::types::{ChefId, DishId};
use brigade_storage::CatalogStore;
use std::sync::Arc;

/// The catalog engine
///
/// Cheap to clone (components share one `Arc<CatalogStore>`), `Send + Sync`,
/// and safe to use from multiple threads: the store's transaction scope
/// serializes all mutation.
///
/// # Example
///
/// ```
/// use brigade_engine::Catalog;
///
/// # fn main() -> brigade_core::Result<()> {
/// let catalog = Catalog::new();
/// catalog.create_chef("Ana", "1 Main St", "555-0100")?;
/// catalog.create_dish("Soup", "Tomato soup")?;
/// catalog.create_association("Ana", "Soup")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Catalog {
    chefs: EntityRegistry<ChefRecord>,
    dishes: EntityRegistry<DishRecord>,
    associations: AssociationStore,
}

impl Catalog {
    /// Create an empty catalog backed by a fresh in-memory store
    pub fn new() -> Self {
        Self::with_store(Arc::new(CatalogStore::new()))
    }

    /// Create a catalog over an existing store
    pub fn with_store(store: Arc<CatalogStore>) -> Self {
        Self {
            chefs: EntityRegistry::new(Arc::clone(&store)),
            dishes: EntityRegistry::new(Arc::clone(&store)),
            associations: AssociationStore::new(store),
        }
    }

    /// The chef registry
    pub fn chefs(&self) -> &EntityRegistry<ChefRecord> {
        &self.chefs
    }

    /// The dish registry
    pub fn dishes(&self) -> &EntityRegistry<DishRecord> {
        &self.dishes
    }

    /// The association store
    pub fn associations(&self) -> &AssociationStore {
        &self.associations
    }

    // ========== Chefs ==========

    /// Create a chef
    pub fn create_chef(
        &self,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<ChefId> {
        self.chefs.create(ChefRecord::new(name, address, phone)?)
    }

    /// All chefs, ascending by creation time
    pub fn list_chefs(&self) -> Vec<ChefRecord> {
        self.chefs.list()
    }

    /// Chef names in listing order
    pub fn chef_names(&self) -> Vec<String> {
        self.chefs.names()
    }

    /// Partially update the chef holding `name`
    pub fn update_chef(&self, name: &str, patch: &ChefPatch) -> Result<()> {
        self.chefs.update(name, patch)
    }

    /// Delete a chef, cascading its associations
    pub fn delete_chef(&self, name: &str) -> Result<()> {
        self.chefs.delete(name)
    }

    // ========== Dishes ==========

    /// Create a dish
    pub fn create_dish(
        &self,
        name: impl Into<String>,
        detail: impl Into<String>,
    ) -> Result<DishId> {
        self.dishes.create(DishRecord::new(name, detail)?)
    }

    /// All dishes, ascending by creation time
    pub fn list_dishes(&self) -> Vec<DishRecord> {
        self.dishes.list()
    }

    /// Dish names in listing order
    pub fn dish_names(&self) -> Vec<String> {
        self.dishes.names()
    }

    /// Partially update the dish holding `name`
    pub fn update_dish(&self, name: &str, patch: &DishPatch) -> Result<()> {
        self.dishes.update(name, patch)
    }

    /// Delete a dish, cascading its associations
    pub fn delete_dish(&self, name: &str) -> Result<()> {
        self.dishes.delete(name)
    }

    // ========== Associations ==========

    /// Associate a chef with a dish
    pub fn create_association(&self, chef_name: &str, dish_name: &str) -> Result<()> {
        self.associations.create(chef_name, dish_name)
    }

    /// All associations as (chef name, dish name), ascending by creation time
    pub fn list_associations(&self) -> Result<Vec<(String, String)>> {
        self.associations.list()
    }

    /// Re-point an association, preserving its creation timestamp
    pub fn swap_association(
        &self,
        old_chef: &str,
        old_dish: &str,
        new_chef: &str,
        new_dish: &str,
    ) -> Result<()> {
        self.associations.swap(old_chef, old_dish, new_chef, new_dish)
    }

    /// Remove the association between a pair
    pub fn delete_association(&self, chef_name: &str, dish_name: &str) -> Result<()> {
        self.associations.delete(chef_name, dish_name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
