//! Races the transaction scope is required to serialize

use brigade::Catalog;
use std::thread;

#[test]
fn concurrent_creates_of_one_name_admit_exactly_one() {
    let catalog = Catalog::new();
    let mut handles = Vec::new();

    for i in 0..8 {
        let catalog = catalog.clone();
        handles.push(thread::spawn(move || {
            catalog.create_chef("Ana", format!("{} Main St", i), "555-0100")
        }));
    }

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let successes = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(successes, 1);
    assert!(results
        .iter()
        .filter(|r| r.is_err())
        .all(|r| matches!(r, Err(e) if e.is_duplicate())));
    assert_eq!(catalog.list_chefs().len(), 1);
}

#[test]
fn concurrent_association_creates_of_one_pair_admit_exactly_one() {
    let catalog = Catalog::new();
    catalog.create_chef("Ana", "", "").unwrap();
    catalog.create_dish("Soup", "").unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let catalog = catalog.clone();
        handles.push(thread::spawn(move || {
            catalog.create_association("Ana", "Soup")
        }));
    }

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(catalog.list_associations().unwrap().len(), 1);
}

#[test]
fn cascade_and_create_serialize_without_dangling_rows() {
    // A delete-with-cascade racing an association create must never leave an
    // association pointing at the deleted chef: either the create ran first
    // (and was cascaded away) or it ran second (and failed to resolve).
    for _ in 0..16 {
        let catalog = Catalog::new();
        catalog.create_chef("Ana", "", "").unwrap();
        catalog.create_dish("Soup", "").unwrap();

        let deleter = {
            let catalog = catalog.clone();
            thread::spawn(move || catalog.delete_chef("Ana"))
        };
        let creator = {
            let catalog = catalog.clone();
            thread::spawn(move || catalog.create_association("Ana", "Soup"))
        };

        deleter.join().unwrap().unwrap();
        let _ = creator.join().unwrap();

        assert!(catalog.list_associations().unwrap().is_empty());
        assert!(catalog.chef_names().is_empty());
    }
}
