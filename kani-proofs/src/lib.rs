// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the keyed hash and uniqueness checker.
//!
//! This standalone crate extracts the key hash and the pairwise checker, over
//! byte strings instead of `&str`, and proves them correct with Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Hash definition**: the iterative hash unfolds as c + 33 * hash(rest)
//! 2. **Identity**: equal text implies equal hash, so hash-first matching is sound
//! 3. **Checker**: a violation is reported iff some pair shares text or hash
//! 4. **Precedence**: if any pair shares text, a duplicate is reported

pub const HASH_SEED: u64 = 5381;
pub const HASH_MULTIPLIER: u64 = 33;

// ============================================================================
// KEY HASH (mirrors src/key.rs)
// ============================================================================

/// Stable key hash, evaluated right to left.
pub fn key_hash(bytes: &[u8]) -> u64 {
    let mut hash = HASH_SEED;
    let mut i = bytes.len();
    while i > 0 {
        i -= 1;
        hash = (bytes[i] as u64).wrapping_add(hash.wrapping_mul(HASH_MULTIPLIER));
    }
    hash
}

pub fn text_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Hash first, then text.
pub fn matches(a: &[u8], b: &[u8]) -> bool {
    key_hash(a) == key_hash(b) && text_eq(a, b)
}

// ============================================================================
// UNIQUENESS CHECKER (mirrors src/unique.rs)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    DuplicateKey,
    HashCollision,
}

fn conflicts(kind: ViolationKind, a: &[u8], b: &[u8]) -> bool {
    match kind {
        ViolationKind::DuplicateKey => matches(a, b),
        ViolationKind::HashCollision => key_hash(a) == key_hash(b) && !text_eq(a, b),
    }
}

fn first_pair(keys: &[&[u8]], kind: ViolationKind) -> Option<(usize, usize)> {
    let mut first = 0;
    while first < keys.len() {
        let mut second = first + 1;
        while second < keys.len() {
            if conflicts(kind, keys[first], keys[second]) {
                return Some((first, second));
            }
            second += 1;
        }
        first += 1;
    }
    None
}

/// Duplicates across all pairs first, then collisions.
pub fn first_violation(keys: &[&[u8]]) -> Option<(ViolationKind, usize, usize)> {
    if let Some((a, b)) = first_pair(keys, ViolationKind::DuplicateKey) {
        return Some((ViolationKind::DuplicateKey, a, b));
    }
    first_pair(keys, ViolationKind::HashCollision).map(|(a, b)| (ViolationKind::HashCollision, a, b))
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    const MAX_LEN: usize = 3;

    /// A symbolic byte string of length at most MAX_LEN.
    fn any_text(storage: &mut [u8; MAX_LEN]) -> &[u8] {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        for byte in storage.iter_mut() {
            *byte = kani::any();
        }
        &storage[..len]
    }

    /// Verify the iterative hash matches its recursive definition.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_hash_unfolds() {
        let mut storage = [0u8; MAX_LEN];
        let text = any_text(&mut storage);

        match text.split_first() {
            None => kani::assert(key_hash(text) == HASH_SEED, "hash of empty text is the seed"),
            Some((&c, rest)) => kani::assert(
                key_hash(text) == (c as u64).wrapping_add(HASH_MULTIPLIER.wrapping_mul(key_hash(rest))),
                "hash(c ++ rest) = c + 33 * hash(rest)",
            ),
        }
    }

    /// Verify equal text implies equal hash, so `matches` agrees with `text_eq`.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_matches_is_text_equality() {
        let mut a_storage = [0u8; MAX_LEN];
        let mut b_storage = [0u8; MAX_LEN];
        let a = any_text(&mut a_storage);
        let b = any_text(&mut b_storage);

        kani::assert(matches(a, b) == text_eq(a, b), "hash-first match is text equality");
        kani::assert(text_eq(a, b) == text_eq(b, a), "text equality is symmetric");
    }

    /// Verify the checker reports a violation iff some pair conflicts,
    /// and that duplicates take precedence.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_checker_complete_and_ordered() {
        let mut s0 = [0u8; MAX_LEN];
        let mut s1 = [0u8; MAX_LEN];
        let mut s2 = [0u8; MAX_LEN];
        let keys = [any_text(&mut s0), any_text(&mut s1), any_text(&mut s2)];

        let mut duplicate = false;
        let mut collision = false;
        for i in 0..keys.len() {
            for j in i + 1..keys.len() {
                if text_eq(keys[i], keys[j]) {
                    duplicate = true;
                } else if key_hash(keys[i]) == key_hash(keys[j]) {
                    collision = true;
                }
            }
        }

        match first_violation(&keys) {
            None => kani::assert(!duplicate && !collision, "no violation means no conflict"),
            Some((kind, first, second)) => {
                kani::assert(first < second, "pair is ordered");
                kani::assert(duplicate || collision, "violation means a conflict exists");
                kani::assert(
                    (kind == ViolationKind::DuplicateKey) == duplicate,
                    "duplicates are reported first",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_seed_and_step() {
        assert_eq!(key_hash(b""), 5381);
        assert_eq!(key_hash(b"a"), 97 + 33 * 5381);
    }

    #[test]
    fn test_checker_finds_collision() {
        let keys: [&[u8]; 2] = [b"Aa", b"b`"];
        assert_eq!(
            first_violation(&keys),
            Some((ViolationKind::HashCollision, 0, 1))
        );
    }

    #[test]
    fn test_duplicate_beats_collision() {
        let keys: [&[u8]; 4] = [b"Aa", b"b`", b"x", b"x"];
        assert_eq!(
            first_violation(&keys),
            Some((ViolationKind::DuplicateKey, 2, 3))
        );
    }
}
