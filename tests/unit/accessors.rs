//! Tests for the dynamic accessors on maps built at run time.

use std::any::Any;

use keyed::{Key, MapError, TypeDescriptor, UNNAMED_TYPE};

use super::common::{map_with_types, validated_map};

fn settings() -> keyed::ValidatedMap {
    map_with_types(
        "settings",
        &[
            ("retries", TypeDescriptor::of::<u32>()),
            ("ratio", TypeDescriptor::of::<f64>()),
            ("tags", TypeDescriptor::of::<Vec<String>>()),
            ("name", TypeDescriptor::of::<Option<String>>()),
        ],
    )
    .validate()
    .unwrap()
}

#[test]
fn test_get_returns_defaults_of_declared_types() {
    let map = settings();
    assert_eq!(map.get::<u32>(Key::new("retries")), Ok(0));
    assert_eq!(map.get::<Vec<String>>(Key::new("tags")), Ok(Vec::new()));
    assert_eq!(map.get::<Option<String>>(Key::new("name")), Ok(None));
}

#[test]
fn test_get_dyn_downcasts_to_declared_type_only() {
    let value = settings().get_dyn(Key::new("ratio")).unwrap();
    assert_eq!(value.downcast_ref::<f64>(), Some(&0.0));
    assert!(value.downcast_ref::<f32>().is_none());
}

#[test]
fn test_set_rejects_near_miss_types() {
    let map = settings();
    let retries = Key::new("retries");
    assert_eq!(map.set(retries, &3_u32), Ok(()));
    for err in [
        map.set(retries, &3_u64).unwrap_err(),
        map.set(retries, &3_i32).unwrap_err(),
        map.set(retries, &Some(3_u32)).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            MapError::TypeMismatch { expected: "u32", .. }
        ));
    }
}

#[test]
fn test_set_dyn_reports_unnamed_type() {
    let map = settings();
    let value: Box<dyn Any> = Box::new(String::from("x"));
    let err = map.set_dyn(Key::new("tags"), value.as_ref()).unwrap_err();
    assert!(matches!(err, MapError::TypeMismatch { found: UNNAMED_TYPE, .. }));
}

#[test]
fn test_resolution_is_by_text_not_by_storage() {
    let map = validated_map("leaky", &["alpha", "beta"]);
    let resolved = map.resolve(Key::new("beta")).unwrap();
    assert_eq!(resolved.position(), 1);
    assert!(map.contains(Key::new("alpha")));
}

#[test]
fn test_every_accessor_reports_the_map_name() {
    let map = settings();
    let missing = Key::new("timeout");
    assert_eq!(map.get_dyn(missing).unwrap_err().map(), "settings");
    assert_eq!(map.set(missing, &1_u32).unwrap_err().map(), "settings");
    assert_eq!(
        map.get::<u32>(missing).unwrap_err().to_string(),
        "key `timeout` is not declared in map `settings`"
    );
}
