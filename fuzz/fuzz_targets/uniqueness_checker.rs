// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the uniqueness checker.
//!
//! Keys are drawn from a fixed vocabulary that holds colliding pairs and the
//! empty text, so the fuzzer spends its time on duplicate and collision
//! layouts instead of on finding a collision. The checker must reject exactly
//! the lists a brute-force pairwise comparison rejects, and must report
//! duplicates before collisions.

#![no_main]

use arbitrary::Arbitrary;
use keyed::{all_violations, first_violation, is_unique, Binding, Key, ViolationKind};
use libfuzzer_sys::fuzz_target;

/// Two colliding pairs: "Aa"/"b`" and "Ab"/"ba".
const VOCABULARY: &[&str] = &[
    "", "hello", "world", "is", "empty", "nowhere", "Aa", "b`", "Ab", "ba", "x", "héllo",
];

#[derive(Debug, Arbitrary)]
struct MapInput {
    picks: Vec<u8>,
}

fuzz_target!(|input: MapInput| {
    // Cap size: the checker is quadratic and maps are small
    let keys: Vec<Key> = input
        .picks
        .iter()
        .take(64)
        .map(|&pick| Key::new(VOCABULARY[pick as usize % VOCABULARY.len()]))
        .collect();
    let bindings: Vec<Binding> = keys.iter().map(|&key| Binding::of::<u8>(key)).collect();

    let duplicate = keys
        .iter()
        .enumerate()
        .any(|(i, a)| keys[i + 1..].iter().any(|b| a.text() == b.text()));
    let collision = keys.iter().enumerate().any(|(i, a)| {
        keys[i + 1..]
            .iter()
            .any(|b| a.text() != b.text() && a.stable_hash() == b.stable_hash())
    });

    // Property 1: verdict matches brute force
    let first = first_violation(&bindings);
    assert_eq!(is_unique(&bindings), !duplicate && !collision);
    match first.map(|v| v.kind) {
        None => assert!(!duplicate && !collision),
        Some(ViolationKind::DuplicateKey) => assert!(duplicate),
        Some(ViolationKind::HashCollision) => assert!(!duplicate && collision),
    }

    // Property 2: first_violation leads all_violations
    let all = all_violations(&bindings);
    assert_eq!(all.first().copied(), first);
    assert!(all.iter().all(|v| v.first < v.second));
    assert_eq!(
        all.iter().any(|v| v.kind == ViolationKind::DuplicateKey),
        duplicate
    );
});
