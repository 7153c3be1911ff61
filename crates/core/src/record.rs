//! Catalog record types and the entity abstraction
//!
//! ## Design
//!
//! Records are fixed-field structs built through validated factories that set
//! every field exactly once. `created_at` is private with a read accessor:
//! nothing can reset it after construction. The one sanctioned exception is
//! [`AssociationRecord::repoint`], which carries an existing timestamp onto a
//! re-pointed association so a swap keeps the relationship's position in
//! creation order.
//!
//! ## Partial updates
//!
//! Updates go through patch types ([`ChefPatch`], [`DishPatch`]) holding one
//! `Option<String>` per mutable field. A field is applied only when the patch
//! carries a non-empty value; empty input leaves the stored value untouched
//! rather than clearing it. The normalization lives in one place
//! (`non_empty`), so `Some("")` can never be constructed.

use crate::error::{Error, Result};
use crate::timestamp::Timestamp;
use crate::types::{AssocKey, ChefId, DishId, Endpoint, EntityKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Map form-style input to a patch field: empty means "not supplied"
fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The abstraction a registry needs from a record kind
///
/// Implemented by [`ChefRecord`] and [`DishRecord`] so a single generic
/// registry serves both tables.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Opaque store-assigned identifier type
    type Id: Copy
        + Ord
        + Eq
        + std::hash::Hash
        + fmt::Debug
        + fmt::Display
        + Send
        + Sync
        + 'static;

    /// Partial-update type for this record kind
    type Patch: Patch;

    /// Kind tag used in errors and logs
    const KIND: EntityKind;

    /// Store-assigned identifier
    fn id(&self) -> Self::Id;

    /// Unique external-facing name
    fn name(&self) -> &str;

    /// Creation timestamp
    fn created_at(&self) -> Timestamp;

    /// Apply a partial update in place
    fn apply(&mut self, patch: &Self::Patch);

    /// Wrap an id of this kind as an association endpoint
    fn endpoint(id: Self::Id) -> Endpoint;
}

/// Common surface of the partial-update types
pub trait Patch: Clone + fmt::Debug + Default + Send + Sync + 'static {
    /// The new name this patch carries, if any
    fn new_name(&self) -> Option<&str>;

    /// True when the patch carries no fields at all
    fn is_empty(&self) -> bool;
}

// ============================================================================
// Chef
// ============================================================================

/// A chef record
///
/// Externally identified by its unique `name`; the internal id exists so
/// associations survive renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChefRecord {
    id: ChefId,
    name: String,
    address: String,
    phone: String,
    created_at: Timestamp,
}

impl ChefRecord {
    /// Build a new chef record
    ///
    /// Assigns a fresh id and stamps `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `name` is empty.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::validation(EntityKind::Chef, "name"));
        }
        Ok(Self {
            id: ChefId::new(),
            name,
            address: address.into(),
            phone: phone.into(),
            created_at: Timestamp::now(),
        })
    }

    /// Store-assigned identifier
    pub fn id(&self) -> ChefId {
        self.id
    }

    /// Unique chef name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Postal address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Phone number
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Creation timestamp
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl Entity for ChefRecord {
    type Id = ChefId;
    type Patch = ChefPatch;

    const KIND: EntityKind = EntityKind::Chef;

    fn id(&self) -> ChefId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn apply(&mut self, patch: &ChefPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(address) = &patch.address {
            self.address.clone_from(address);
        }
        if let Some(phone) = &patch.phone {
            self.phone.clone_from(phone);
        }
    }

    fn endpoint(id: ChefId) -> Endpoint {
        Endpoint::Chef(id)
    }
}

/// Partial update for a chef record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChefPatch {
    name: Option<String>,
    address: Option<String>,
    phone: Option<String>,
}

impl ChefPatch {
    /// Build a patch from raw field inputs, treating empty strings as
    /// not-supplied
    pub fn from_fields(name: &str, address: &str, phone: &str) -> Self {
        Self {
            name: non_empty(name),
            address: non_empty(address),
            phone: non_empty(phone),
        }
    }

    /// Set the name field (ignored when empty)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name);
        self
    }

    /// Set the address field (ignored when empty)
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = non_empty(address);
        self
    }

    /// Set the phone field (ignored when empty)
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_empty(phone);
        self
    }
}

impl Patch for ChefPatch {
    fn new_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.phone.is_none()
    }
}

// ============================================================================
// Dish
// ============================================================================

/// A dish record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishRecord {
    id: DishId,
    name: String,
    detail: String,
    created_at: Timestamp,
}

impl DishRecord {
    /// Build a new dish record
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `name` is empty.
    pub fn new(name: impl Into<String>, detail: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::validation(EntityKind::Dish, "name"));
        }
        Ok(Self {
            id: DishId::new(),
            name,
            detail: detail.into(),
            created_at: Timestamp::now(),
        })
    }

    /// Store-assigned identifier
    pub fn id(&self) -> DishId {
        self.id
    }

    /// Unique dish name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form description
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Creation timestamp
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl Entity for DishRecord {
    type Id = DishId;
    type Patch = DishPatch;

    const KIND: EntityKind = EntityKind::Dish;

    fn id(&self) -> DishId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn apply(&mut self, patch: &DishPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(detail) = &patch.detail {
            self.detail.clone_from(detail);
        }
    }

    fn endpoint(id: DishId) -> Endpoint {
        Endpoint::Dish(id)
    }
}

/// Partial update for a dish record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishPatch {
    name: Option<String>,
    detail: Option<String>,
}

impl DishPatch {
    /// Build a patch from raw field inputs, treating empty strings as
    /// not-supplied
    pub fn from_fields(name: &str, detail: &str) -> Self {
        Self {
            name: non_empty(name),
            detail: non_empty(detail),
        }
    }

    /// Set the name field (ignored when empty)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name);
        self
    }

    /// Set the detail field (ignored when empty)
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = non_empty(detail);
        self
    }
}

impl Patch for DishPatch {
    fn new_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.detail.is_none()
    }
}

// ============================================================================
// Association
// ============================================================================

/// A cooks association linking one chef and one dish
///
/// Invariant: `key` is always exactly `AssocKey::derive(chef_id, dish_id)`.
/// Both constructors compute it; there is no way to set the fields apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationRecord {
    key: AssocKey,
    chef_id: ChefId,
    dish_id: DishId,
    created_at: Timestamp,
}

impl AssociationRecord {
    /// Link a pair, stamping a fresh creation timestamp
    pub fn link(chef_id: ChefId, dish_id: DishId) -> Self {
        Self::repoint(chef_id, dish_id, Timestamp::now())
    }

    /// Build an association carrying an existing creation timestamp
    ///
    /// Used by swap: re-pointing a relationship is a logical rename, not a
    /// new relationship, so it keeps its original position in creation order.
    pub fn repoint(chef_id: ChefId, dish_id: DishId, created_at: Timestamp) -> Self {
        Self {
            key: AssocKey::derive(chef_id, dish_id),
            chef_id,
            dish_id,
            created_at,
        }
    }

    /// The compound key identifying this association
    pub fn key(&self) -> AssocKey {
        self.key
    }

    /// The chef endpoint
    pub fn chef_id(&self) -> ChefId {
        self.chef_id
    }

    /// The dish endpoint
    pub fn dish_id(&self) -> DishId {
        self.dish_id
    }

    /// Creation timestamp (carried across swaps)
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
