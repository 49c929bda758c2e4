//! Properties of the uniqueness checker.

use keyed::{all_violations, first_violation, key_hash, MapError, ViolationKind};
use proptest::prelude::*;

use super::common::{distinct_texts_strategy, key_text_strategy, map_of, map_with_types, type_for};

/// Brute-force reference: any pair sharing text or hash.
fn has_conflict(texts: &[String]) -> bool {
    texts.iter().enumerate().any(|(i, a)| {
        texts[i + 1..]
            .iter()
            .any(|b| a == b || key_hash(a) == key_hash(b))
    })
}

fn refs(texts: &[String]) -> Vec<&str> {
    texts.iter().map(String::as_str).collect()
}

proptest! {
    /// Property: distinct, non-colliding keys always validate.
    #[test]
    fn prop_distinct_keys_validate(texts in distinct_texts_strategy(12)) {
        let map = map_of("distinct", &refs(&texts));
        prop_assert!(map.validate().is_ok());
        prop_assert!(all_violations(map.bindings()).is_empty());
    }

    /// Property: repeating any key rejects the map, whatever the types.
    #[test]
    fn prop_repeated_key_is_rejected(
        texts in distinct_texts_strategy(8),
        extra in key_text_strategy(),
        pick in any::<prop::sample::Index>(),
        ty in 0usize..5,
    ) {
        let mut texts = texts;
        texts.push(extra);
        let repeated = texts[pick.index(texts.len())].clone();

        let mut entries: Vec<(&str, keyed::TypeDescriptor)> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), type_for(i)))
            .collect();
        entries.push((repeated.as_str(), type_for(ty)));

        let map = map_with_types("repeated", &entries);
        let err = map.validate().unwrap_err();
        prop_assert!(matches!(err, MapError::DuplicateKey { .. }), "{err}");
    }

    /// Property: the checker rejects exactly the maps with a conflicting pair.
    #[test]
    fn prop_checker_matches_brute_force(texts in prop::collection::vec(key_text_strategy(), 0..10)) {
        let map = map_of("any", &refs(&texts));
        prop_assert_eq!(map.validate().is_err(), has_conflict(&texts));
        prop_assert_eq!(first_violation(map.bindings()).is_some(), has_conflict(&texts));
    }

    /// Property: the first violation is the first one listed, and duplicates
    /// are listed before collisions.
    #[test]
    fn prop_first_violation_leads_all_violations(
        texts in prop::collection::vec(key_text_strategy(), 0..10),
    ) {
        let map = map_of("any", &refs(&texts));
        let all = all_violations(map.bindings());
        prop_assert_eq!(all.first().copied(), first_violation(map.bindings()));

        let first_collision = all.iter().position(|v| v.kind == ViolationKind::HashCollision);
        if let Some(split) = first_collision {
            prop_assert!(all[split..].iter().all(|v| v.kind == ViolationKind::HashCollision));
        }
    }

    /// Property: validation is idempotent.
    #[test]
    fn prop_validation_is_idempotent(texts in prop::collection::vec(key_text_strategy(), 0..10)) {
        let map = map_of("twice", &refs(&texts));
        prop_assert_eq!(map.validate(), map.validate());
        if let Ok(validated) = map.validate() {
            prop_assert_eq!(validated.revalidate(), Ok(()));
        }
    }
}
