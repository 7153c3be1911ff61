//! Association lifecycle and error distinctions

use crate::common::{pair, seeded_catalog};
use brigade::{Catalog, ChefPatch, EntityKind, Error};

#[test]
fn create_and_list_enriched() {
    let catalog = seeded_catalog();
    catalog.create_association("Ana", "Soup").unwrap();
    catalog.create_association("Bo", "Cake").unwrap();

    assert_eq!(
        catalog.list_associations().unwrap(),
        vec![pair("Ana", "Soup"), pair("Bo", "Cake")]
    );
}

#[test]
fn same_dish_can_have_many_chefs() {
    let catalog = seeded_catalog();
    catalog.create_association("Ana", "Soup").unwrap();
    catalog.create_association("Bo", "Soup").unwrap();

    assert_eq!(catalog.list_associations().unwrap().len(), 2);
}

#[test]
fn repeat_create_fails_with_duplicate() {
    let catalog = seeded_catalog();
    catalog.create_association("Ana", "Soup").unwrap();

    let err = catalog.create_association("Ana", "Soup").unwrap_err();
    assert!(err.is_duplicate());
    assert_eq!(catalog.list_associations().unwrap().len(), 1);
}

#[test]
fn create_against_missing_entity_is_invalid_reference() {
    let catalog = seeded_catalog();

    let err = catalog.create_association("Nobody", "Soup").unwrap_err();
    assert_eq!(err, Error::invalid_reference(EntityKind::Chef, "Nobody"));

    let err = catalog.create_association("Ana", "Nothing").unwrap_err();
    assert_eq!(err, Error::invalid_reference(EntityKind::Dish, "Nothing"));
}

#[test]
fn listing_reflects_renames_without_touching_rows() {
    let catalog = seeded_catalog();
    catalog.create_association("Ana", "Soup").unwrap();

    catalog
        .update_chef("Ana", &ChefPatch::default().with_name("Anna"))
        .unwrap();

    assert_eq!(
        catalog.list_associations().unwrap(),
        vec![pair("Anna", "Soup")]
    );
    // The association still follows the renamed chef
    catalog.delete_association("Anna", "Soup").unwrap();
    assert!(catalog.list_associations().unwrap().is_empty());
}

#[test]
fn delete_of_unassociated_pair_is_not_found() {
    let catalog = seeded_catalog();
    catalog.create_association("Ana", "Soup").unwrap();

    let err = catalog.delete_association("Bo", "Soup").unwrap_err();
    assert_eq!(err, Error::association_not_found("Bo", "Soup"));
}

#[test]
fn delete_against_missing_entity_is_invalid_reference() {
    let catalog = Catalog::new();
    catalog.create_chef("Ana", "", "").unwrap();

    let err = catalog.delete_association("Ana", "Soup").unwrap_err();
    assert!(err.is_invalid_reference());
}

#[test]
fn deleting_one_pair_leaves_the_others() {
    let catalog = seeded_catalog();
    catalog.create_association("Ana", "Soup").unwrap();
    catalog.create_association("Ana", "Cake").unwrap();

    catalog.delete_association("Ana", "Soup").unwrap();
    assert_eq!(
        catalog.list_associations().unwrap(),
        vec![pair("Ana", "Cake")]
    );
}
