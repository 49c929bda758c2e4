// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by the dynamic tier.
//!
//! Every variant is a contract violation by whoever declared or used the map.
//! None of them is transient, so nothing here is meant to be retried. The
//! static tier reports the same four conditions as build failures instead.

use thiserror::Error;

use crate::key::Key;

/// A violated map contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Two bindings in one map share key text.
    #[error("duplicate key `{key}` in map `{map}` (bindings {first} and {second})")]
    DuplicateKey {
        map: &'static str,
        key: Key,
        first: usize,
        second: usize,
    },

    /// Two bindings share a hash but not key text.
    #[error(
        "hash collision in map `{map}`: `{first_key}` and `{second_key}` both hash to {hash:#018x}"
    )]
    HashCollision {
        map: &'static str,
        first_key: Key,
        second_key: Key,
        hash: u64,
    },

    /// The key exists but was never bound in this map.
    #[error("key `{key}` is not declared in map `{map}`")]
    KeyNotFound { map: &'static str, key: Key },

    /// A value's type differs from the key's declared type.
    #[error("key `{key}` in map `{map}` is declared as `{expected}`, got `{found}`")]
    TypeMismatch {
        map: &'static str,
        key: Key,
        expected: &'static str,
        found: &'static str,
    },
}

impl MapError {
    /// The name of the map the violation was found in.
    pub fn map(&self) -> &'static str {
        match self {
            MapError::DuplicateKey { map, .. }
            | MapError::HashCollision { map, .. }
            | MapError::KeyNotFound { map, .. }
            | MapError::TypeMismatch { map, .. } => *map,
        }
    }

    /// Whether this error is raised while validating a map, as opposed to
    /// while using one.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            MapError::DuplicateKey { .. } | MapError::HashCollision { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_key_and_map() {
        let err = MapError::KeyNotFound {
            map: "CompileTimeMap",
            key: Key::new("nowhere"),
        };
        assert_eq!(
            err.to_string(),
            "key `nowhere` is not declared in map `CompileTimeMap`"
        );
        assert_eq!(err.map(), "CompileTimeMap");
        assert!(!err.is_validation_error());
    }

    #[test]
    fn mismatch_message_names_both_types() {
        let err = MapError::TypeMismatch {
            map: "m",
            key: Key::new("is"),
            expected: "f64",
            found: "bool",
        };
        assert_eq!(
            err.to_string(),
            "key `is` in map `m` is declared as `f64`, got `bool`"
        );
    }

    #[test]
    fn collision_message_prints_hash_in_hex() {
        let err = MapError::HashCollision {
            map: "m",
            first_key: Key::new("a"),
            second_key: Key::new("b"),
            hash: 0xff,
        };
        assert!(err.to_string().ends_with("0x00000000000000ff"));
        assert!(err.is_validation_error());
    }
}
