//! Properties of the dynamic accessors.

use std::any::TypeId;

use keyed::{MapError, TypeDescriptor, ValidatedMap};
use proptest::prelude::*;

use super::common::{distinct_texts_strategy, leak_key, map_with_types};

/// The types a generated map may declare, with a value of each to offer `set`.
fn candidates() -> [TypeDescriptor; 4] {
    [
        TypeDescriptor::of::<u8>(),
        TypeDescriptor::of::<i64>(),
        TypeDescriptor::of::<bool>(),
        TypeDescriptor::of::<String>(),
    ]
}

fn offer(map: &ValidatedMap, text: &str, candidate: usize) -> Result<(), MapError> {
    let key = leak_key(text);
    match candidate {
        0 => map.set(key, &7_u8),
        1 => map.set(key, &-7_i64),
        2 => map.set(key, &true),
        _ => map.set(key, &String::from("seven")),
    }
}

fn typed_map() -> impl Strategy<Value = (Vec<String>, Vec<usize>)> {
    distinct_texts_strategy(8).prop_flat_map(|texts| {
        let len = texts.len();
        (Just(texts), prop::collection::vec(0usize..4, len))
    })
}

proptest! {
    /// Property: `set` succeeds exactly when the value has the declared type.
    #[test]
    fn prop_set_accepts_exactly_the_declared_type(
        (texts, types) in typed_map(),
        offered in 0usize..4,
    ) {
        let entries: Vec<(&str, TypeDescriptor)> = texts
            .iter()
            .zip(&types)
            .map(|(t, &ty)| (t.as_str(), candidates()[ty]))
            .collect();
        let map = map_with_types("typed", &entries).validate().unwrap();

        for (text, &declared) in texts.iter().zip(&types) {
            let result = offer(&map, text, offered);
            if declared == offered {
                prop_assert_eq!(result, Ok(()));
            } else {
                let is_mismatch = matches!(result, Err(MapError::TypeMismatch { .. }));
                prop_assert!(is_mismatch);
            }
        }
    }

    /// Property: `get_dyn` always yields a value of the declared type.
    #[test]
    fn prop_get_dyn_yields_declared_type((texts, types) in typed_map()) {
        let entries: Vec<(&str, TypeDescriptor)> = texts
            .iter()
            .zip(&types)
            .map(|(t, &ty)| (t.as_str(), candidates()[ty]))
            .collect();
        let map = map_with_types("typed", &entries).validate().unwrap();

        for (text, &declared) in texts.iter().zip(&types) {
            let value = map.get_dyn(leak_key(text)).unwrap();
            prop_assert_eq!((*value).type_id(), candidates()[declared].type_id());
            prop_assert_ne!((*value).type_id(), TypeId::of::<()>());
        }
    }
}
