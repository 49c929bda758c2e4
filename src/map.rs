// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Maps: named, ordered, immutable sequences of bindings.
//!
//! [`KeyMap`] is the raw declaration. It cannot be resolved against or
//! accessed. [`ValidatedMap`] wraps a `KeyMap` that passed the uniqueness
//! checker, and it is the only type that exposes resolution and accessors.
//! The transition is one-way: nothing turns a `ValidatedMap` back into an
//! unchecked one, and nothing mutates either after construction.
//!
//! | State        | Type           | How you get there                            |
//! |--------------|----------------|----------------------------------------------|
//! | Unvalidated  | `KeyMap`       | `KeyMap::new`                                |
//! | Validated    | `ValidatedMap` | `ValidatedMap::new` (run time, `Result`)     |
//! | Validated    | `ValidatedMap` | `ValidatedMap::new_const` (build time)       |

use tracing::info;

use crate::binding::Binding;
use crate::contracts;
use crate::error::MapError;
use crate::key::Key;
use crate::unique::{assert_unique, check_unique};

/// An unvalidated map declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    name: &'static str,
    bindings: &'static [Binding],
}

impl KeyMap {
    /// Declare a map. Nothing is checked yet.
    pub const fn new(name: &'static str, bindings: &'static [Binding]) -> Self {
        Self { name, bindings }
    }

    /// The map's name, used in diagnostics.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The bindings, in declaration order.
    pub const fn bindings(&self) -> &'static [Binding] {
        self.bindings
    }

    pub const fn len(&self) -> usize {
        self.bindings.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.bindings.iter().map(Binding::key)
    }

    /// Run the uniqueness checker. Shorthand for [`ValidatedMap::new`].
    pub fn validate(self) -> Result<ValidatedMap, MapError> {
        ValidatedMap::new(self)
    }
}

/// A map that passed the uniqueness checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMap {
    inner: KeyMap,
}

impl ValidatedMap {
    /// Validate `map` at run time.
    pub fn new(map: KeyMap) -> Result<Self, MapError> {
        check_unique(&map)?;
        contracts::check_hashes_consistent(map.bindings());
        contracts::check_map_unique(map.bindings());
        info!(map = map.name(), bindings = map.len(), "validated key map");
        Ok(Self { inner: map })
    }

    /// Validate `map` during constant evaluation.
    ///
    /// In a `const` item a violation stops the build. Called at run time it
    /// panics instead, which is the fatal path for startup validation.
    ///
    /// # Panics
    ///
    /// Panics if `map` has a duplicate key or a hash collision.
    pub const fn new_const(map: KeyMap) -> Self {
        assert_unique(map.bindings());
        Self { inner: map }
    }

    /// Re-run the checker. Always `Ok` for a map built through this type; the
    /// call has no side effects.
    pub fn revalidate(&self) -> Result<(), MapError> {
        check_unique(&self.inner)
    }

    /// The underlying declaration.
    pub const fn map(&self) -> &KeyMap {
        &self.inner
    }

    pub const fn name(&self) -> &'static str {
        self.inner.name()
    }

    pub const fn bindings(&self) -> &'static [Binding] {
        self.inner.bindings()
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Whether `key` is bound in this map.
    pub fn contains(&self, key: Key) -> bool {
        self.inner.keys().any(|bound| bound == key)
    }
}

impl TryFrom<KeyMap> for ValidatedMap {
    type Error = MapError;

    fn try_from(map: KeyMap) -> Result<Self, Self::Error> {
        Self::new(map)
    }
}
