// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index resolver: key -> (position, declared type).
//!
//! Resolution scans the bindings for the first entry whose key text equals
//! the query. On a validated map that entry is also the only one. The scan is
//! `const`, which is how static maps resolve their `Entry::POSITION` during
//! the build; the run-time flavour returns a short-lived [`Resolved`] that
//! borrows from the map and is rebuilt on every accessor call.
//!
//! Only [`ValidatedMap`] can be resolved against. A raw [`KeyMap`] has no
//! entry point here.
//!
//! [`KeyMap`]: crate::KeyMap

use std::any::TypeId;

use crate::binding::{Binding, TypeDescriptor};
use crate::contracts;
use crate::error::MapError;
use crate::key::Key;
use crate::map::ValidatedMap;

/// Position of `key` in `bindings`, by text.
pub const fn position_of(bindings: &[Binding], key: Key) -> Option<usize> {
    // INVARIANT: the first match wins; on a validated map it is the only one
    let mut position = 0;
    while position < bindings.len() {
        if bindings[position].key().matches(&key) {
            return Some(position);
        }
        position += 1;
    }
    None
}

/// Position of `key` in `bindings`, failing the build (or panicking at run
/// time) if the key is absent.
///
/// ```compile_fail,E0080
/// use keyed::{resolve_position, Binding, Key};
///
/// const BINDINGS: &[Binding] = &[Binding::of::<f64>(Key::new("is"))];
/// const _: usize = resolve_position(BINDINGS, Key::new("nowhere"));
///
/// fn main() {}
/// ```
pub const fn resolve_position(bindings: &[Binding], key: Key) -> usize {
    match position_of(bindings, key) {
        Some(position) => position,
        None => panic!("key is not declared in this map"),
    }
}

/// A key looked up in a validated map. Lives for one accessor call.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'m> {
    map: &'m ValidatedMap,
    key: Key,
    position: usize,
}

impl<'m> Resolved<'m> {
    /// The key as bound in the map.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The binding's position in declaration order.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The declared type.
    pub fn ty(&self) -> &'m TypeDescriptor {
        self.map.bindings()[self.position].ty()
    }

    /// The map the key was resolved in.
    pub fn map(&self) -> &'m ValidatedMap {
        self.map
    }

    /// Accept only the declared type.
    pub(crate) fn expect_type(&self, found: TypeId, found_name: &'static str) -> Result<(), MapError> {
        if self.ty().type_id() == found {
            Ok(())
        } else {
            Err(self.mismatch(found_name))
        }
    }

    pub(crate) fn mismatch(&self, found_name: &'static str) -> MapError {
        MapError::TypeMismatch {
            map: self.map.name(),
            key: self.key,
            expected: self.ty().name(),
            found: found_name,
        }
    }
}

/// Resolve `key` in `map`.
pub fn resolve(map: &ValidatedMap, key: Key) -> Result<Resolved<'_>, MapError> {
    let position = position_of(map.bindings(), key).ok_or(MapError::KeyNotFound {
        map: map.name(),
        key,
    })?;
    contracts::check_resolution(map.bindings(), key, position);
    Ok(Resolved {
        map,
        key: map.bindings()[position].key(),
        position,
    })
}

impl ValidatedMap {
    /// Resolve `key` in this map. See [`resolve`].
    pub fn resolve(&self, key: Key) -> Result<Resolved<'_>, MapError> {
        resolve(self, key)
    }
}
