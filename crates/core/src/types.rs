//! Identifier types for the catalog engine
//!
//! This module defines the foundational identifier types:
//! - ChefId / DishId: Opaque per-record identifiers
//! - EntityKind: Discriminates the two entity kinds in errors and logs
//! - Endpoint: A typed reference to one side of an association
//! - AssocKey: Compound key identifying a cooks association
//!
//! The external identity of an entity is its unique name; these ids exist so
//! associations can keep referencing a record across renames.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a chef record
///
/// A ChefId is a wrapper around a UUID v4. ChefIds are assigned by the store
/// at creation and never change, so an association that holds one survives a
/// chef rename.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ChefId(Uuid);

impl ChefId {
    /// Create a new random ChefId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a ChefId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parse a ChefId from a string representation
    ///
    /// Accepts standard UUID format. Returns None if the string is not a
    /// valid UUID.
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for ChefId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a dish record
///
/// Same scheme as [`ChefId`]; a distinct type so the two sides of an
/// association can never be confused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DishId(Uuid);

impl DishId {
    /// Create a new random DishId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a DishId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parse a DishId from a string representation
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for DishId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two entity kinds managed by the engine
///
/// Used in errors and logs to say which table a name was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A chef record
    Chef,
    /// A dish record
    Dish,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Chef => write!(f, "chef"),
            EntityKind::Dish => write!(f, "dish"),
        }
    }
}

/// A typed reference to one side of an association
///
/// Cascade deletion matches association rows against an Endpoint; the enum
/// keeps a chef id from ever being compared with the dish column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The chef side
    Chef(ChefId),
    /// The dish side
    Dish(DishId),
}

impl Endpoint {
    /// Whether an association key references this endpoint
    pub fn matches_key(&self, key: &AssocKey) -> bool {
        match self {
            Endpoint::Chef(id) => key.chef() == *id,
            Endpoint::Dish(id) => key.dish() == *id,
        }
    }
}

/// Compound key identifying a cooks association
///
/// An ordered pair of the two endpoint ids, chef first, used directly as the
/// association table's map key. Deriving a key is pure and deterministic, and
/// distinct pairs can never collide: equality is field-wise, with no encoding
/// step in between.
///
/// The `Display` rendering (`"<chef>,<dish>"`) exists for logs and error text
/// only and is never parsed back.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AssocKey {
    chef: ChefId,
    dish: DishId,
}

impl AssocKey {
    /// Derive the key for a (chef, dish) pair
    ///
    /// Order-sensitive by construction: the argument types fix which id lands
    /// in which position.
    pub fn derive(chef: ChefId, dish: DishId) -> Self {
        Self { chef, dish }
    }

    /// The chef side of the pair
    pub fn chef(&self) -> ChefId {
        self.chef
    }

    /// The dish side of the pair
    pub fn dish(&self) -> DishId {
        self.dish
    }
}

impl fmt::Display for AssocKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.chef, self.dish)
    }
}
