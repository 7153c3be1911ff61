//! Entity CRUD through the facade

use crate::common::seeded_catalog;
use brigade::{Catalog, ChefPatch, DishPatch, Error};

#[test]
fn duplicate_chef_name_fails_on_second_create() {
    let catalog = Catalog::new();
    catalog.create_chef("Ana", "1 Main St", "555-0100").unwrap();

    let err = catalog
        .create_chef("Ana", "9 Elm Rd", "555-0999")
        .unwrap_err();
    assert!(err.is_duplicate());
    assert_eq!(catalog.list_chefs().len(), 1);
}

#[test]
fn duplicate_dish_name_fails_on_second_create() {
    let catalog = Catalog::new();
    catalog.create_dish("Soup", "Tomato soup").unwrap();

    let err = catalog.create_dish("Soup", "Miso soup").unwrap_err();
    assert!(err.is_duplicate());
}

#[test]
fn chef_and_dish_names_do_not_collide_across_kinds() {
    let catalog = Catalog::new();
    catalog.create_chef("Sage", "", "").unwrap();
    catalog.create_dish("Sage", "Herb butter sage").unwrap();

    assert_eq!(catalog.chef_names(), vec!["Sage"]);
    assert_eq!(catalog.dish_names(), vec!["Sage"]);
}

#[test]
fn empty_name_is_a_validation_error() {
    let catalog = Catalog::new();
    assert!(matches!(
        catalog.create_chef("", "1 Main St", ""),
        Err(Error::Validation { .. })
    ));
    assert!(matches!(
        catalog.create_dish("", "Tomato soup"),
        Err(Error::Validation { .. })
    ));
}

#[test]
fn listings_follow_creation_order() {
    let catalog = seeded_catalog();
    assert_eq!(catalog.chef_names(), vec!["Ana", "Bo"]);
    assert_eq!(catalog.dish_names(), vec!["Soup", "Cake"]);
}

#[test]
fn listing_carries_full_records() {
    let catalog = seeded_catalog();
    let chefs = catalog.list_chefs();
    assert_eq!(chefs[0].name(), "Ana");
    assert_eq!(chefs[0].address(), "1 Main St");
    assert_eq!(chefs[0].phone(), "555-0100");

    let dishes = catalog.list_dishes();
    assert_eq!(dishes[1].name(), "Cake");
    assert_eq!(dishes[1].detail(), "Chocolate cake");
}

#[test]
fn update_applies_supplied_fields_only() {
    let catalog = seeded_catalog();

    catalog
        .update_chef("Ana", &ChefPatch::from_fields("", "", "555"))
        .unwrap();

    let ana = &catalog.list_chefs()[0];
    assert_eq!(ana.address(), "1 Main St");
    assert_eq!(ana.phone(), "555");
}

#[test]
fn update_of_missing_chef_is_not_found() {
    let catalog = Catalog::new();
    let err = catalog
        .update_chef("Ana", &ChefPatch::from_fields("", "", "555"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn rename_keeps_created_at_and_order() {
    let catalog = seeded_catalog();
    let before = catalog.list_chefs()[0].created_at();

    catalog
        .update_chef("Ana", &ChefPatch::default().with_name("Anna"))
        .unwrap();

    let chefs = catalog.list_chefs();
    assert_eq!(chefs[0].name(), "Anna");
    assert_eq!(chefs[0].created_at(), before);
    assert_eq!(catalog.chef_names(), vec!["Anna", "Bo"]);
}

#[test]
fn rename_onto_existing_name_is_rejected() {
    let catalog = seeded_catalog();

    let err = catalog
        .update_chef("Bo", &ChefPatch::default().with_name("Ana"))
        .unwrap_err();
    assert!(err.is_duplicate());
    assert_eq!(catalog.chef_names(), vec!["Ana", "Bo"]);
}

#[test]
fn dish_update_merges_detail() {
    let catalog = seeded_catalog();
    catalog
        .update_dish("Soup", &DishPatch::from_fields("", "Roasted tomato soup"))
        .unwrap();

    assert_eq!(catalog.list_dishes()[0].detail(), "Roasted tomato soup");
}

#[test]
fn delete_then_recreate_reuses_the_name() {
    let catalog = seeded_catalog();

    catalog.delete_chef("Ana").unwrap();
    assert_eq!(catalog.chef_names(), vec!["Bo"]);

    catalog.create_chef("Ana", "3 Pine Ln", "").unwrap();
    // Recreated record is a new row at the end of creation order
    assert_eq!(catalog.chef_names(), vec!["Bo", "Ana"]);
}

#[test]
fn delete_of_missing_dish_is_not_found() {
    let catalog = Catalog::new();
    let err = catalog.delete_dish("Soup").unwrap_err();
    assert!(err.is_not_found());
}
