//! Core types for the Brigade catalog engine
//!
//! This crate defines the foundational types used throughout the system:
//! - ChefId / DishId: Opaque record identifiers
//! - AssocKey: Compound key identifying a cooks association
//! - Timestamp: Microsecond creation timestamps
//! - ChefRecord / DishRecord / AssociationRecord: Fixed-field record types
//! - Entity: The abstraction a registry needs from a record kind
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod timestamp;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use record::{
    AssociationRecord, ChefPatch, ChefRecord, DishPatch, DishRecord, Entity, Patch,
};
pub use timestamp::Timestamp;
pub use types::{AssocKey, ChefId, DishId, Endpoint, EntityKind};
