// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The key registry: interned text constants that name map entries.
//!
//! A [`Key`] is a `&'static str` plus a hash computed once, at compile time.
//! Identity is the text. Two keys declared at different sites with the same
//! text are the same key, which is exactly what the uniqueness checker needs
//! to catch aliasing like `World = "world"` next to `AnotherWorld = "world"`.
//!
//! # Hash
//!
//! ```text
//! hash("")          = 5381
//! hash(c ++ rest)   = code(c) + 33 * hash(rest)
//! ```
//!
//! `code(c)` is the unsigned value of each UTF-8 byte and the arithmetic wraps
//! modulo 2^64. The hash only accelerates comparisons and cross-checks the
//! vocabulary; equality is always decided by the text.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Hash of the empty key.
pub const HASH_SEED: u64 = 5381;

/// Multiplier applied to the hash of the remaining text.
pub const HASH_MULTIPLIER: u64 = 33;

/// Compute the stable key hash of `text`.
///
/// Evaluated right to left so the loop matches the recursive definition
/// without recursion.
pub const fn key_hash(text: &str) -> u64 {
    let bytes = text.as_bytes();
    let mut hash = HASH_SEED;
    let mut i = bytes.len();
    while i > 0 {
        i -= 1;
        hash = (bytes[i] as u64).wrapping_add(hash.wrapping_mul(HASH_MULTIPLIER));
    }
    hash
}

/// Byte-wise text equality, usable in `const` contexts.
pub const fn text_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
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

/// An immutable, interned map key.
#[derive(Clone, Copy)]
pub struct Key {
    text: &'static str,
    hash: u64,
}

impl Key {
    /// Intern `text` as a key. The hash is computed here, once.
    pub const fn new(text: &'static str) -> Self {
        Self {
            text,
            hash: key_hash(text),
        }
    }

    /// The key text.
    pub const fn text(&self) -> &'static str {
        self.text
    }

    /// The precomputed stable hash.
    pub const fn stable_hash(&self) -> u64 {
        self.hash
    }

    /// Whether both keys have identical text, wherever they were declared.
    pub const fn same_as(&self, other: &Key) -> bool {
        text_eq(self.text, other.text)
    }

    /// Text equality with the hash compared first.
    ///
    /// Equal text implies equal hash, so a hash mismatch settles the
    /// comparison without touching the bytes.
    pub const fn matches(&self, other: &Key) -> bool {
        self.hash == other.hash && self.same_as(other)
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({:?})", self.text)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// A zero-sized marker type standing for one key at the type level.
///
/// Implemented by the types that [`keys!`](crate::keys) declares. Maps built
/// with [`keymap!`](crate::keymap) are indexed by these markers.
pub trait StaticKey: 'static {
    /// The key this marker names.
    const KEY: Key;
}

/// Declare key marker types.
///
/// Each entry becomes a unit struct implementing [`StaticKey`]:
///
/// ```
/// use keyed::{keys, StaticKey};
///
/// keys! {
///     /// Greeting key.
///     pub Hello = "hello";
///     pub World = "world";
///     pub AnotherWorld = "world";
/// }
///
/// assert_eq!(Hello::KEY.text(), "hello");
/// // Different declarations, same key.
/// assert_eq!(World::KEY, AnotherWorld::KEY);
/// ```
#[macro_export]
macro_rules! keys {
    ($($(#[$meta:meta])* $vis:vis $name:ident = $text:literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $name;

            impl $crate::StaticKey for $name {
                const KEY: $crate::Key = $crate::Key::new($text);
            }
        )*
    };
}
