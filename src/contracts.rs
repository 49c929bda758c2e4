// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the checker and resolver.
//!
//! Debug-mode assertions that re-check, from a different angle, what the
//! checker and resolver already promise. They are no-ops in release builds.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                          |
//! |----------------------------|---------------------------------------------------|
//! | `check_hashes_consistent`  | every key's cached hash equals `key_hash(text)`   |
//! | `check_map_unique`         | no duplicate text, no hash collision              |
//! | `check_resolution`         | resolved position holds the key, and is the first |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Self-check of the key hash and text equality.
/// If the hash drifts from its definition, the crate won't build.
const _: () = {
    // INVARIANT: hash("") = 5381
    assert!(key_hash("") == 5381);

    // INVARIANT: hash(c ++ rest) = code(c) + 33 * hash(rest)
    assert!(key_hash("a") == 97 + 33 * 5381);
    assert!(key_hash("is") == b'i' as u64 + 33 * key_hash("s"));

    // INVARIANT: key identity is text identity
    assert!(text_eq("world", "world"));
    assert!(!text_eq("world", "worl"));
    assert!(Key::new("world").same_as(&Key::new("world")));
};

use std::collections::HashMap;

use crate::binding::Binding;
use crate::key::{key_hash, text_eq, Key};

/// Check that each binding's cached hash matches its text.
///
/// # Panics (debug builds only)
/// Panics if a key was built with a stale hash.
#[inline]
pub fn check_hashes_consistent(bindings: &[Binding]) {
    for (i, binding) in bindings.iter().enumerate() {
        let key = binding.key();
        debug_assert_eq!(
            key.stable_hash(),
            key_hash(key.text()),
            "Contract violation: bindings[{}] key {:?} carries a stale hash",
            i,
            key.text()
        );
    }
}

/// Check that a map has neither duplicate keys nor hash collisions.
///
/// Uses a hash table instead of the pairwise scan, so it cross-checks the
/// checker rather than repeating it.
///
/// # Panics (debug builds only)
/// Panics naming the first offending key.
#[inline]
pub fn check_map_unique(bindings: &[Binding]) {
    if !cfg!(debug_assertions) {
        return;
    }
    let mut seen: HashMap<u64, &'static str> = HashMap::with_capacity(bindings.len());
    for (i, binding) in bindings.iter().enumerate() {
        let key = binding.key();
        if let Some(previous) = seen.insert(key.stable_hash(), key.text()) {
            panic!(
                "Contract violation: map not unique - bindings[{}] {:?} shares hash {:#x} with {:?}",
                i,
                key.text(),
                key.stable_hash(),
                previous
            );
        }
    }
}

/// Check that `position` is where `key` lives, and that no earlier binding
/// has the same text.
///
/// # Panics (debug builds only)
/// Panics if the resolver returned the wrong slot.
#[inline]
pub fn check_resolution(bindings: &[Binding], key: Key, position: usize) {
    debug_assert!(
        position < bindings.len(),
        "Contract violation: resolved position {} >= bindings.len() {}",
        position,
        bindings.len()
    );

    if position < bindings.len() {
        debug_assert!(
            bindings[position].key().same_as(&key),
            "Contract violation: bindings[{}] is {:?}, not {:?}",
            position,
            bindings[position].key().text(),
            key.text()
        );
        debug_assert!(
            !bindings[..position].iter().any(|b| b.key().same_as(&key)),
            "Contract violation: {:?} also bound before position {}",
            key.text(),
            position
        );
    }
}
