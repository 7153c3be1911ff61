//! Brigade - embedded relational-integrity engine for kitchen catalog records
//!
//! Brigade manages three record types - chefs, dishes, and the many-to-many
//! cooks association between them - with enforced name uniqueness,
//! referential integrity, cascading deletes, and atomic association swaps.
//!
//! # Quick Start
//!
//! ```
//! use brigade::Catalog;
//!
//! # fn main() -> brigade::Result<()> {
//! let catalog = Catalog::new();
//!
//! catalog.create_chef("Ana", "1 Main St", "555-0100")?;
//! catalog.create_dish("Soup", "Tomato soup")?;
//! catalog.create_association("Ana", "Soup")?;
//!
//! assert_eq!(
//!     catalog.list_associations()?,
//!     vec![("Ana".to_string(), "Soup".to_string())]
//! );
//!
//! // Deleting a chef cascades into its associations
//! catalog.delete_chef("Ana")?;
//! assert!(catalog.list_associations()?.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The [`Catalog`] facade binds the operation surface; underneath it sit one
//! [`EntityRegistry`] per entity kind and an [`AssociationStore`], all
//! sharing a [`CatalogStore`] whose transaction scope makes multi-mutation
//! operations (cascade delete, swap) atomic.

// Re-export the public API
pub use brigade_core::{
    AssocKey, AssociationRecord, ChefId, ChefPatch, ChefRecord, DishId, DishPatch,
    DishRecord, Endpoint, Entity, EntityKind, Error, Patch, Result, Timestamp,
};
pub use brigade_engine::{AssociationStore, Catalog, EntityRegistry};
pub use brigade_storage::{CatalogStore, Tables};
