//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::HashSet;

use keyed::{key_hash, KeyMap, ValidatedMap};
use proptest::prelude::*;

// Re-export canonical test utilities from keyed::testing
pub use keyed::testing::{
    leak_key, leak_str, map_of, map_with_types, type_for, COLLIDING_PAIR,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short key-like texts, including the empty one.
pub fn key_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_]{0,8}").unwrap()
}

/// Texts that are pairwise distinct and pairwise hash-distinct.
pub fn distinct_texts_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(key_text_strategy(), 0..max)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_filter("texts must not collide", |texts| {
            let hashes: HashSet<u64> = texts.iter().map(|t| key_hash(t)).collect();
            hashes.len() == texts.len()
        })
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Build and validate a map over `texts`, panicking on rejection.
pub fn validated_map(name: &str, texts: &[&str]) -> ValidatedMap {
    map_of(name, texts)
        .validate()
        .unwrap_or_else(|err| panic!("{name} should validate: {err}"))
}

/// Texts of `map`, in declaration order.
pub fn texts_of(map: &KeyMap) -> Vec<&'static str> {
    map.keys().map(|key| key.text()).collect()
}
