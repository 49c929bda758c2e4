// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the key hash.
//!
//! The iterative hash must agree with its recursive definition on any text,
//! and must wrap rather than overflow however long the text gets.

#![no_main]

use keyed::{key_hash, HASH_MULTIPLIER, HASH_SEED};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let hash = key_hash(text);

    // Peel one byte off the front
    // hash(c ++ rest) = c + 33 * hash(rest)
    if let Some((&first, _)) = text.as_bytes().split_first() {
        let rest = &text.as_bytes()[1..];
        let mut rest_hash = HASH_SEED;
        for &byte in rest.iter().rev() {
            rest_hash = (byte as u64).wrapping_add(rest_hash.wrapping_mul(HASH_MULTIPLIER));
        }
        assert_eq!(
            hash,
            (first as u64).wrapping_add(HASH_MULTIPLIER.wrapping_mul(rest_hash)),
            "hash of {:?} doesn't unfold from the left",
            text
        );
    } else {
        assert_eq!(hash, HASH_SEED);
    }
});
