use super::*;

use std::path::PathBuf;

fn test_root(name: &str) -> PathBuf {
    let root = PathBuf::from("target").join("path_cache_tests").join(name);
    let _ = std::fs::remove_dir_all(&root);
    let _ = std::fs::remove_file(&root);
    root
}

#[test]
fn store_then_load_round_trips() {
    let cache = PathCache::new(test_root("round_trip"));
    let path = hilbert::hilbert_path(8).unwrap();
    cache.store(&path).unwrap();
    assert_eq!(cache.load(8), Some(path));
}

#[test]
fn absent_entry_is_a_miss() {
    let cache = PathCache::new(test_root("absent"));
    assert_eq!(cache.load(8), None);
}

#[test]
fn corrupt_entry_is_a_miss() {
    let root = test_root("corrupt");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("path8.json"), b"definitely not json").unwrap();
    assert_eq!(PathCache::new(root).load(8), None);
}

#[test]
fn entry_with_wrong_point_count_is_a_miss() {
    let root = test_root("wrong_count");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("path8.json"), b"[[0,0],[0,1]]").unwrap();
    assert_eq!(PathCache::new(root).load(8), None);
}

#[test]
fn file_occupying_cache_root_is_replaced() {
    let root = test_root("root_is_file");
    std::fs::create_dir_all(root.parent().unwrap()).unwrap();
    std::fs::write(&root, b"in the way").unwrap();

    let cache = PathCache::new(root.clone());
    let path = hilbert::hilbert_path(4).unwrap();
    cache.store(&path).unwrap();

    assert!(root.is_dir());
    assert_eq!(cache.load(4), Some(path));
}

#[test]
fn unwritable_location_surfaces_cache_write_error() {
    let root = test_root("unwritable");
    std::fs::create_dir_all(&root).unwrap();
    let blocker = root.join("blocker");
    std::fs::write(&blocker, b"file, not a directory").unwrap();

    // The cache root sits below a plain file, so the directory can never be
    // created. The failure must come back as CacheWrite, not vanish.
    let cache = PathCache::new(blocker.join("nested"));
    let path = hilbert::hilbert_path(4).unwrap();
    assert!(matches!(
        cache.store(&path),
        Err(SonogridError::CacheWrite(_))
    ));
}

#[test]
fn provider_generates_on_miss_and_reuses_the_stored_entry() {
    let root = test_root("provider");
    let provider = PathProvider::new(PathCache::new(root.clone()));

    let first = provider.obtain(8).unwrap();
    assert!(root.join("path8.json").is_file());

    let second = provider.obtain(8).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, hilbert::hilbert_path(8).unwrap());
}

#[test]
fn provider_survives_a_failed_store() {
    let root = test_root("provider_unwritable");
    std::fs::create_dir_all(&root).unwrap();
    let blocker = root.join("blocker");
    std::fs::write(&blocker, b"file").unwrap();

    let provider = PathProvider::new(PathCache::new(blocker.join("nested")));
    let path = provider.obtain(4).unwrap();
    assert_eq!(path, hilbert::hilbert_path(4).unwrap());
}

#[test]
fn provider_propagates_invalid_grid_sizes() {
    let provider = PathProvider::new(PathCache::new(test_root("bad_size")));
    assert!(matches!(
        provider.obtain(12),
        Err(SonogridError::GridSize(_))
    ));
}
