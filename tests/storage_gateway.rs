use address_book::{Address, AddressStore, Error, SqliteStore};
use tempfile::TempDir;

fn open_store() -> (TempDir, SqliteStore) {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::open(dir.path().join("address_book.db")).unwrap();
    (dir, store)
}

fn names(addresses: &[Address]) -> Vec<&str> {
    let mut names: Vec<_> = addresses.iter().map(|a| a.name.as_str()).collect();
    names.sort_unstable();
    names
}

#[test]
fn create_then_get_returns_same_coordinates() {
    let (_dir, store) = open_store();

    let created = store.create_by_name("Home", 14.25, 121.5).unwrap();
    assert_eq!(created, Address::new("Home", 14.25, 121.5));

    let loaded = store.get_by_name("Home").unwrap();
    assert_eq!(loaded.longitude, 14.25);
    assert_eq!(loaded.latitude, 121.5);
}

#[test]
fn duplicate_create_leaves_original_unchanged() {
    let (_dir, store) = open_store();
    store.create_by_name("Home", 1.0, 2.0).unwrap();

    let err = store.create_by_name("Home", 8.0, 9.0).unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    assert_eq!(store.get_by_name("Home").unwrap(), Address::new("Home", 1.0, 2.0));
    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn update_changes_coordinates_only() {
    let (_dir, store) = open_store();
    store.create_by_name("Home", 1.0, 2.0).unwrap();

    let updated = store.update_by_name("Home", 3.0, 4.0).unwrap();
    assert_eq!(updated, Address::new("Home", 3.0, 4.0));
    assert_eq!(store.get_by_name("Home").unwrap(), updated);
}

#[test]
fn update_missing_is_not_found() {
    let (_dir, store) = open_store();
    let err = store.update_by_name("Nowhere", 0.0, 0.0).unwrap_err();
    assert!(matches!(err, Error::NotFound(ref name) if name == "Nowhere"));
}

#[test]
fn delete_returns_record_and_removes_it() {
    let (_dir, store) = open_store();
    store.create_by_name("A", 0.0, 0.0).unwrap();
    store.create_by_name("B", 1.0, 1.0).unwrap();

    let deleted = store.delete_by_name("A").unwrap();
    assert_eq!(deleted, Address::new("A", 0.0, 0.0));
    assert_eq!(names(&store.list_all().unwrap()), vec!["B"]);

    let err = store.delete_by_name("A").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn delete_all_returns_snapshot_and_empties_table() {
    let (_dir, store) = open_store();
    store.seed_samples().unwrap();

    let snapshot = store.delete_all().unwrap();
    assert_eq!(snapshot.len(), 13);
    assert!(store.list_all().unwrap().is_empty());
    assert!(store.is_empty().unwrap());

    assert!(store.delete_all().unwrap().is_empty());
}

#[test]
fn range_boundary_is_inclusive() {
    let (_dir, store) = open_store();
    store.create_by_name("A", 0.0, 0.0).unwrap();
    store.create_by_name("B", 3.0, 4.0).unwrap();

    assert_eq!(names(&store.find_in_range(0.0, 0.0, 5.0).unwrap()), vec!["A", "B"]);
    assert_eq!(names(&store.find_in_range(0.0, 0.0, 4.999).unwrap()), vec!["A"]);
}

#[test]
fn range_matches_squared_distance_predicate() {
    let (_dir, store) = open_store();
    store.seed_samples().unwrap();

    let (lon, lat, d) = (14.6, 121.05, 0.025);
    let expected: Vec<Address> = store
        .list_all()
        .unwrap()
        .into_iter()
        .filter(|a| {
            let (dx, dy) = (a.longitude - lon, a.latitude - lat);
            dx * dx + dy * dy <= d * d
        })
        .collect();
    let found = store.find_in_range(lon, lat, d).unwrap();

    assert!(!expected.is_empty());
    assert_eq!(names(&found), names(&expected));
}

#[test]
fn range_around_empty_area_is_empty() {
    let (_dir, store) = open_store();
    store.seed_samples().unwrap();
    assert!(store.find_in_range(0.0, 0.0, 1.0).unwrap().is_empty());
}

#[test]
fn each_store_handle_sees_the_same_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("address_book.db");
    let writer = SqliteStore::open(&path).unwrap();
    let reader = SqliteStore::new(&path);

    writer.create_by_name("Shared", 5.0, 6.0).unwrap();
    assert_eq!(reader.get_by_name("Shared").unwrap(), Address::new("Shared", 5.0, 6.0));
}
