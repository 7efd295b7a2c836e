/// Unit tests for the ServiceKey type.

use autofaker::ServiceKey;
use std::collections::HashMap;

trait Plugin: Send + Sync {}

#[test]
fn test_key_display_name_concrete() {
    let key = ServiceKey::of::<String>();
    assert_eq!(key.display_name(), "alloc::string::String");

    assert!(!key.display_name().is_empty());
}

#[test]
fn test_key_display_name_trait_object() {
    let key = ServiceKey::of::<dyn Plugin>();
    assert!(key.display_name().contains("Plugin"));
    assert!(key.display_name().starts_with("dyn "));
}

#[test]
fn test_key_equality_is_by_type() {
    assert_eq!(ServiceKey::of::<String>(), ServiceKey::of::<String>());
    assert_eq!(ServiceKey::of::<dyn Plugin>(), ServiceKey::of::<dyn Plugin>());

    assert_ne!(ServiceKey::of::<String>(), ServiceKey::of::<usize>());
    assert_ne!(ServiceKey::of::<String>(), ServiceKey::of::<dyn Plugin>());
}

#[test]
fn test_key_works_as_hashmap_key() {
    let mut map = HashMap::new();
    map.insert(ServiceKey::of::<String>(), 1);
    map.insert(ServiceKey::of::<usize>(), 2);
    map.insert(ServiceKey::of::<dyn Plugin>(), 3);

    assert_eq!(map.get(&ServiceKey::of::<String>()), Some(&1));
    assert_eq!(map.get(&ServiceKey::of::<usize>()), Some(&2));
    assert_eq!(map.get(&ServiceKey::of::<dyn Plugin>()), Some(&3));
    assert_eq!(map.len(), 3);

    // Re-inserting the same key overwrites.
    map.insert(ServiceKey::of::<String>(), 9);
    assert_eq!(map.get(&ServiceKey::of::<String>()), Some(&9));
    assert_eq!(map.len(), 3);
}

#[test]
fn test_key_is_copy() {
    let key = ServiceKey::of::<u32>();
    let copied = key;
    assert_eq!(key, copied);
}
