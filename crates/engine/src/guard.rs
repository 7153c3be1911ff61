//! Cross-table consistency enforcement
//!
//! Referential integrity has two halves: association creation validates that
//! both endpoints exist (done in `AssociationStore`), and entity deletion
//! removes every association that references the dying record (done here).
//! The cascade runs inside the same transaction that removes the entity, so
//! no observer can see an association dangling on a deleted record.

use brigade_core::types::Endpoint;
use brigade_storage::AssociationTable;
use tracing::info;

/// Remove every association referencing `endpoint`, returning the count
///
/// Must run, and complete, before the entity row itself is removed; callers
/// keep both steps inside one transaction closure.
pub fn cascade_entity_delete(associations: &mut AssociationTable, endpoint: Endpoint) -> usize {
    let removed = associations.remove_matching(endpoint);
    if removed > 0 {
        info!(endpoint = ?endpoint, removed, "cascaded association removal");
    }
    removed
}
