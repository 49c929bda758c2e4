//! Tests for validate-once startup maps.

use keyed::{Binding, Key, KeyMap, LazyMap, MapError};

static CONFIG: LazyMap = LazyMap::new(KeyMap::new(
    "config",
    &[
        Binding::of::<u16>(Key::new("port")),
        Binding::of::<String>(Key::new("host")),
    ],
));

static ALIASED: LazyMap = LazyMap::new(KeyMap::new(
    "aliased",
    &[
        Binding::of::<u16>(Key::new("port")),
        Binding::of::<u32>(Key::new("port")),
    ],
));

#[test]
fn test_lazy_map_is_usable_through_deref() {
    assert_eq!(CONFIG.get::<u16>(Key::new("port")), Ok(0));
    assert_eq!(CONFIG.set(Key::new("host"), &String::from("localhost")), Ok(()));
    assert!(CONFIG.is_initialized());
}

#[test]
fn test_lazy_map_failure_is_reported_without_panicking() {
    let err = ALIASED.try_validated().unwrap_err();
    assert!(matches!(err, MapError::DuplicateKey { .. }));
    assert_eq!(err.map(), "aliased");
}

#[test]
#[should_panic(expected = "failed validation")]
fn test_lazy_map_failure_is_fatal_on_access() {
    let _ = ALIASED.get::<u16>(Key::new("port"));
}

#[test]
fn test_declaration_is_available_before_validation() {
    let lazy = LazyMap::new(*CONFIG.declared());
    assert_eq!(lazy.declared().len(), 2);
    assert!(!lazy.is_initialized());
}
