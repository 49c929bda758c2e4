// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The uniqueness checker.
//!
//! A map is a multiset of `(key text, hash)` pairs. It is usable only if
//!
//! 1. no two bindings share key text, whatever their declared types, and
//! 2. no two bindings with different text share a hash.
//!
//! The scan is `const`, so the same code proves a static map at compile time
//! ([`assert_unique`] in a `const` item) and validates a dynamic map at
//! startup ([`check_unique`]). Duplicates are looked for across every pair
//! before collisions are, so a map with both reports the duplicate.
//!
//! Checking is pure: running it twice on the same bindings gives the same
//! answer and touches nothing.

use crate::binding::Binding;
use crate::error::MapError;
use crate::key::Key;
use crate::map::KeyMap;

/// Which uniqueness rule a pair of bindings broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Same key text.
    DuplicateKey,
    /// Same hash, different key text.
    HashCollision,
}

/// A pair of binding positions that breaks a uniqueness rule.
///
/// `first < second` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Violation {
    pub kind: ViolationKind,
    pub first: usize,
    pub second: usize,
}

impl Violation {
    /// Turn the violation into an error naming the offending keys of `map`.
    ///
    /// `None` if either position is out of range for `map`, which happens
    /// when the violation was found in some other map.
    pub fn into_error(self, map: &KeyMap) -> Option<MapError> {
        let bindings = map.bindings();
        let first = bindings.get(self.first)?.key();
        let second = bindings.get(self.second)?.key();
        let err = match self.kind {
            ViolationKind::DuplicateKey => MapError::DuplicateKey {
                map: map.name(),
                key: first,
                first: self.first,
                second: self.second,
            },
            ViolationKind::HashCollision => MapError::HashCollision {
                map: map.name(),
                first_key: first,
                second_key: second,
                hash: first.stable_hash(),
            },
        };
        Some(err)
    }
}

const fn conflicts(kind: ViolationKind, a: &Key, b: &Key) -> bool {
    match kind {
        ViolationKind::DuplicateKey => a.matches(b),
        ViolationKind::HashCollision => a.stable_hash() == b.stable_hash() && !a.same_as(b),
    }
}

const fn first_pair(bindings: &[Binding], kind: ViolationKind) -> Option<Violation> {
    let mut first = 0;
    while first < bindings.len() {
        let mut second = first + 1;
        while second < bindings.len() {
            if conflicts(kind, &bindings[first].key(), &bindings[second].key()) {
                return Some(Violation {
                    kind,
                    first,
                    second,
                });
            }
            second += 1;
        }
        first += 1;
    }
    None
}

/// The first violation in `bindings`, or `None` if the map is unique.
///
/// Stops at the first offending pair but never misses one: if any pair
/// violates a rule, some violation is returned.
pub const fn first_violation(bindings: &[Binding]) -> Option<Violation> {
    // INVARIANT: duplicates are reported before collisions
    match first_pair(bindings, ViolationKind::DuplicateKey) {
        Some(violation) => Some(violation),
        None => first_pair(bindings, ViolationKind::HashCollision),
    }
}

/// Whether `bindings` satisfies both uniqueness rules.
pub const fn is_unique(bindings: &[Binding]) -> bool {
    first_violation(bindings).is_none()
}

/// Every violating pair, duplicates first, for diagnostics.
pub fn all_violations(bindings: &[Binding]) -> Vec<Violation> {
    let mut found = Vec::new();
    for kind in [ViolationKind::DuplicateKey, ViolationKind::HashCollision] {
        for first in 0..bindings.len() {
            for second in first + 1..bindings.len() {
                if conflicts(kind, &bindings[first].key(), &bindings[second].key()) {
                    found.push(Violation {
                        kind,
                        first,
                        second,
                    });
                }
            }
        }
    }
    found
}

/// Validate `map`, reporting the first violation as an error.
pub fn check_unique(map: &KeyMap) -> Result<(), MapError> {
    // INVARIANT: positions from a scan of `map` are in range for `map`
    match first_violation(map.bindings()).and_then(|violation| violation.into_error(map)) {
        None => Ok(()),
        Some(err) => Err(err),
    }
}

/// Panic if `bindings` is not unique.
///
/// Meant for `const` items, where the panic stops the build:
///
/// ```compile_fail,E0080
/// use keyed::{assert_unique, Binding, Key};
///
/// const _: () = assert_unique(&[
///     Binding::of::<f32>(Key::new("world")),
///     Binding::of::<bool>(Key::new("world")),
/// ]);
///
/// fn main() {}
/// ```
pub const fn assert_unique(bindings: &[Binding]) {
    match first_violation(bindings) {
        None => {}
        Some(Violation {
            kind: ViolationKind::DuplicateKey,
            ..
        }) => panic!("map declares the same key more than once"),
        Some(Violation {
            kind: ViolationKind::HashCollision,
            ..
        }) => panic!("two distinct keys in the map share a hash"),
    }
}
