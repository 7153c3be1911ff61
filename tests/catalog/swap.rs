//! Swap semantics: repoint, not delete-plus-create

use crate::common::{pair, seeded_catalog};
use brigade::{Catalog, EntityKind, Error};
use std::time::Duration;

#[test]
fn swap_replaces_old_pair_with_new_pair() {
    let catalog = seeded_catalog();
    catalog.create_association("Ana", "Soup").unwrap();

    catalog
        .swap_association("Ana", "Soup", "Bo", "Cake")
        .unwrap();

    let listed = catalog.list_associations().unwrap();
    assert_eq!(listed, vec![pair("Bo", "Cake")]);
}

#[test]
fn swap_keeps_the_original_position_in_creation_order() {
    let catalog = seeded_catalog();
    catalog.create_dish("Pie", "Apple pie").unwrap();

    // Distinct timestamps so creation order is unambiguous
    catalog.create_association("Ana", "Soup").unwrap();
    std::thread::sleep(Duration::from_millis(2));
    catalog.create_association("Ana", "Cake").unwrap();
    std::thread::sleep(Duration::from_millis(2));
    catalog.create_association("Bo", "Soup").unwrap();

    // Re-point the middle association; it must stay in the middle
    catalog
        .swap_association("Ana", "Cake", "Bo", "Pie")
        .unwrap();

    assert_eq!(
        catalog.list_associations().unwrap(),
        vec![pair("Ana", "Soup"), pair("Bo", "Pie"), pair("Bo", "Soup")]
    );
}

#[test]
fn swap_to_missing_dish_fails_and_leaves_the_old_pair() {
    // Bo cooks Cake; Pie does not exist
    let catalog = Catalog::new();
    catalog.create_chef("Bo", "2 Oak Ave", "555-0101").unwrap();
    catalog.create_dish("Cake", "Chocolate cake").unwrap();
    catalog.create_association("Bo", "Cake").unwrap();

    let err = catalog
        .swap_association("Bo", "Cake", "Bo", "Pie")
        .unwrap_err();
    assert_eq!(err, Error::invalid_reference(EntityKind::Dish, "Pie"));

    assert_eq!(
        catalog.list_associations().unwrap(),
        vec![pair("Bo", "Cake")]
    );
}

#[test]
fn swap_to_occupied_pair_fails_with_duplicate() {
    let catalog = seeded_catalog();
    catalog.create_association("Ana", "Soup").unwrap();
    catalog.create_association("Bo", "Cake").unwrap();

    let err = catalog
        .swap_association("Ana", "Soup", "Bo", "Cake")
        .unwrap_err();
    assert!(err.is_duplicate());

    // Both pairs still present, unchanged
    assert_eq!(catalog.list_associations().unwrap().len(), 2);
}

#[test]
fn swap_of_missing_old_pair_fails_with_not_found() {
    let catalog = seeded_catalog();

    let err = catalog
        .swap_association("Ana", "Soup", "Bo", "Cake")
        .unwrap_err();
    assert_eq!(err, Error::association_not_found("Ana", "Soup"));
}

#[test]
fn swap_can_move_a_single_endpoint() {
    let catalog = seeded_catalog();
    catalog.create_association("Ana", "Soup").unwrap();

    catalog
        .swap_association("Ana", "Soup", "Ana", "Cake")
        .unwrap();

    assert_eq!(
        catalog.list_associations().unwrap(),
        vec![pair("Ana", "Cake")]
    );
}

#[test]
fn swapped_pair_can_be_swapped_back() {
    let catalog = seeded_catalog();
    catalog.create_association("Ana", "Soup").unwrap();

    catalog
        .swap_association("Ana", "Soup", "Bo", "Cake")
        .unwrap();
    catalog
        .swap_association("Bo", "Cake", "Ana", "Soup")
        .unwrap();

    assert_eq!(
        catalog.list_associations().unwrap(),
        vec![pair("Ana", "Soup")]
    );
}
