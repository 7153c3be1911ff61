//! Error types for the catalog engine
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every failure carries the offending name or pair so a presentation layer
//! can render a message without reaching back into the store.

use crate::types::EntityKind;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the catalog engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required field was empty or absent at record construction
    #[error("{kind} is missing required field `{field}`")]
    Validation {
        /// Entity kind being constructed
        kind: EntityKind,
        /// Name of the missing field
        field: &'static str,
    },

    /// An entity with this name already exists
    #[error("a {kind} named {name:?} already exists")]
    DuplicateName {
        /// Entity kind the name collided within
        kind: EntityKind,
        /// The colliding name
        name: String,
    },

    /// An association between this pair already exists
    #[error("a cooks association between {chef:?} and {dish:?} already exists")]
    DuplicateAssociation {
        /// Chef name of the colliding pair
        chef: String,
        /// Dish name of the colliding pair
        dish: String,
    },

    /// No entity with this name
    #[error("no {kind} named {name:?}")]
    NotFound {
        /// Entity kind that was looked up
        kind: EntityKind,
        /// The name that did not match
        name: String,
    },

    /// Both entities exist but the pair is not associated
    #[error("no cooks association between {chef:?} and {dish:?}")]
    AssociationNotFound {
        /// Chef name of the missing pair
        chef: String,
        /// Dish name of the missing pair
        dish: String,
    },

    /// One side of an association does not resolve to an existing entity
    #[error("{kind} {name:?} does not refer to an existing record")]
    InvalidReference {
        /// Entity kind that failed to resolve
        kind: EntityKind,
        /// The unresolved name
        name: String,
    },

    /// Underlying store unavailable or internally inconsistent
    #[error("storage error: {0}")]
    Storage(String),
}

impl Error {
    /// A required field was empty at a record factory
    pub fn validation(kind: EntityKind, field: &'static str) -> Self {
        Error::Validation { kind, field }
    }

    /// Name collision within an entity kind
    pub fn duplicate_name(kind: EntityKind, name: impl Into<String>) -> Self {
        Error::DuplicateName {
            kind,
            name: name.into(),
        }
    }

    /// Pair collision in the association table
    pub fn duplicate_association(chef: impl Into<String>, dish: impl Into<String>) -> Self {
        Error::DuplicateAssociation {
            chef: chef.into(),
            dish: dish.into(),
        }
    }

    /// No entity matched the name
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// No association matched the pair
    pub fn association_not_found(chef: impl Into<String>, dish: impl Into<String>) -> Self {
        Error::AssociationNotFound {
            chef: chef.into(),
            dish: dish.into(),
        }
    }

    /// An association endpoint name did not resolve
    pub fn invalid_reference(kind: EntityKind, name: impl Into<String>) -> Self {
        Error::InvalidReference {
            kind,
            name: name.into(),
        }
    }

    /// Store-level failure
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }

    /// True for either duplicate variant
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Error::DuplicateName { .. } | Error::DuplicateAssociation { .. }
        )
    }

    /// True for either not-found variant
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. } | Error::AssociationNotFound { .. }
        )
    }

    /// True when an association endpoint failed to resolve
    pub fn is_invalid_reference(&self) -> bool {
        matches!(self, Error::InvalidReference { .. })
    }

    /// True for store-level failures
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}
