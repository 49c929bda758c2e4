//! Tests for the uniqueness checker on run-time maps.

use keyed::{
    all_violations, check_unique, first_violation, Binding, Key, KeyMap, MapError, TypeDescriptor,
    ViolationKind,
};

use super::common::{map_of, map_with_types, COLLIDING_PAIR};

#[test]
fn test_duplicate_is_reported_whatever_the_types() {
    let map = map_with_types(
        "same_type",
        &[
            ("x", TypeDescriptor::of::<u8>()),
            ("x", TypeDescriptor::of::<u8>()),
        ],
    );
    assert!(matches!(
        map.validate(),
        Err(MapError::DuplicateKey { first: 0, second: 1, .. })
    ));
}

#[test]
fn test_collision_error_names_both_keys() {
    let (a, b) = COLLIDING_PAIR;
    let map = map_of("colliding", &["first", a, b]);
    let err = map.validate().unwrap_err();
    assert_eq!(
        err,
        MapError::HashCollision {
            map: "colliding",
            first_key: Key::new(a),
            second_key: Key::new(b),
            hash: keyed::key_hash(a),
        }
    );
    assert!(err.to_string().contains("hash collision in map `colliding`"));
}

#[test]
fn test_duplicate_wins_over_earlier_collision() {
    let (a, b) = COLLIDING_PAIR;
    let map = map_of("both", &[a, b, "dup", "dup"]);
    let err = check_unique(&map).unwrap_err();
    assert!(matches!(err, MapError::DuplicateKey { first: 2, second: 3, .. }));

    let kinds: Vec<ViolationKind> = all_violations(map.bindings()).iter().map(|v| v.kind).collect();
    assert_eq!(kinds, [ViolationKind::DuplicateKey, ViolationKind::HashCollision]);
}

#[test]
fn test_many_keys_without_violation() {
    let texts: Vec<String> = (0..64).map(|i| format!("key_{i}")).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let map = map_of("many", &refs);
    assert_eq!(first_violation(map.bindings()), None);
    assert!(map.validate().is_ok());
}

#[test]
fn test_checker_has_no_side_effects() {
    static BINDINGS: [Binding; 3] = [
        Binding::of::<u8>(Key::new("a")),
        Binding::of::<u8>(Key::new("b")),
        Binding::of::<u8>(Key::new("a")),
    ];
    let map = KeyMap::new("repeat", &BINDINGS);
    let before = map;
    assert_eq!(check_unique(&map), check_unique(&map));
    assert_eq!(map, before);
}
