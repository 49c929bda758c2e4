//! Properties of the index resolver.

use keyed::{position_of, MapError};
use proptest::prelude::*;

use super::common::{distinct_texts_strategy, key_text_strategy, leak_key, map_of, texts_of, type_for};

proptest! {
    /// Property: every bound key resolves to its own position and type.
    #[test]
    fn prop_bound_keys_resolve_to_declaration(texts in distinct_texts_strategy(12)) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let map = map_of("resolve", &refs).validate().unwrap();

        for (position, text) in texts_of(map.map()).into_iter().enumerate() {
            let resolved = map.resolve(leak_key(text)).unwrap();
            prop_assert_eq!(resolved.position(), position);
            prop_assert_eq!(resolved.ty(), &type_for(position));
            prop_assert_eq!(resolved.key().text(), text);
        }
    }

    /// Property: a key outside the map is never resolved.
    #[test]
    fn prop_absent_key_is_not_found(
        texts in distinct_texts_strategy(12),
        probe in key_text_strategy(),
    ) {
        prop_assume!(!texts.contains(&probe));
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let map = map_of("resolve", &refs).validate().unwrap();
        let key = leak_key(&probe);

        prop_assert_eq!(position_of(map.bindings(), key), None);
        prop_assert_eq!(
            map.resolve(key).unwrap_err(),
            MapError::KeyNotFound { map: "resolve", key }
        );
    }

    /// Property: resolution agrees with a linear search by text.
    #[test]
    fn prop_position_of_matches_linear_search(
        texts in prop::collection::vec(key_text_strategy(), 0..10),
        probe in key_text_strategy(),
    ) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let map = map_of("raw", &refs);
        let expected = texts.iter().position(|t| *t == probe);
        prop_assert_eq!(position_of(map.bindings(), leak_key(&probe)), expected);
    }
}
