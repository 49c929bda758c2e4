// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The accessor layer: `get` and `set` whose value type is fixed by the map.
//!
//! # Static tier
//!
//! A map declared with [`keymap!`](crate::keymap) implements [`Entry<K>`] for
//! every key marker `K` it binds. [`get`] and [`set`] go through that trait,
//! so the compiler does the resolving:
//!
//! - a key the map doesn't bind has no `Entry` impl, and the call doesn't
//!   compile;
//! - `get` returns exactly `Entry::Value`, nothing else can be asked for;
//! - `set` accepts `Entry::Value` by value or by shared reference and
//!   nothing else. See [`Admits`].
//!
//! ```
//! use keyed::demo::{CompileTimeMap, Is, True, World};
//! use keyed::{get, set};
//!
//! let ret: True = get::<World, CompileTimeMap>();
//! assert_eq!(ret, True);
//! set::<Is, CompileTimeMap>(5.0);
//! set::<Is, CompileTimeMap>(&5.0);
//! ```
//!
//! Wrong value type:
//!
//! ```compile_fail,E0277
//! use keyed::demo::{CompileTimeMap, Is};
//! keyed::set::<Is, CompileTimeMap>(true);
//! ```
//!
//! A smart pointer to the declared type is still a different type:
//!
//! ```compile_fail,E0277
//! use keyed::demo::{CompileTimeMap, Is};
//! keyed::set::<Is, CompileTimeMap>(Box::new(5.0));
//! ```
//!
//! ```compile_fail,E0277
//! use keyed::demo::{CompileTimeMap, Is};
//! keyed::set::<Is, CompileTimeMap>(std::sync::Arc::new(5.0));
//! ```
//!
//! Key not in the map:
//!
//! ```compile_fail,E0277
//! use keyed::demo::{CompileTimeMap, Nowhere};
//! keyed::set::<Nowhere, CompileTimeMap>(5.0);
//! ```
//!
//! Asking `get` for a different type:
//!
//! ```compile_fail,E0308
//! use keyed::demo::{CompileTimeMap, World};
//! let ret: bool = keyed::get::<World, CompileTimeMap>();
//! ```
//!
//! # Dynamic tier
//!
//! [`ValidatedMap`] carries the same contract with run-time type
//! descriptors. Every call resolves the key afresh and compares `TypeId`s
//! against the declaration, returning [`MapError::KeyNotFound`] or
//! [`MapError::TypeMismatch`] instead of failing the build.
//!
//! Neither tier stores anything: `get` hands back a default instance of the
//! declared type and `set` only checks the value it is given. Storage is
//! meant to be layered on top of this contract.

use std::any::{type_name, Any, TypeId};

use tracing::debug;

use crate::error::MapError;
use crate::key::{Key, StaticKey};
use crate::map::ValidatedMap;

/// Reported as the found type when a `&dyn Any` doesn't name itself.
pub const UNNAMED_TYPE: &str = "<dyn Any>";

/// A map type whose declaration was validated at build time.
pub trait Schema: 'static {
    /// The validated declaration backing this type.
    const MAP: ValidatedMap;
}

/// `Self` binds key `K` to `Value` at `POSITION`.
pub trait Entry<K: StaticKey>: Schema {
    /// The declared type.
    type Value: Default + 'static;

    /// Position of `K` in `Self::MAP`, resolved during the build.
    const POSITION: usize;
}

mod sealed {
    pub trait Sealed<T> {}

    impl<T> Sealed<T> for T {}
    impl<T> Sealed<T> for &T {}
}

/// Values the static [`set`] accepts for a key declared as `T`.
///
/// Exactly `T` and `&T`. Sealed, so no other wrapper (`Box<T>`, `Rc<T>`,
/// `Cow<'_, T>`, `&mut T`) is admitted.
pub trait Admits<T>: sealed::Sealed<T> {
    /// The value as the declared type.
    fn admitted(&self) -> &T;
}

impl<T> Admits<T> for T {
    fn admitted(&self) -> &T {
        self
    }
}

impl<T> Admits<T> for &T {
    fn admitted(&self) -> &T {
        self
    }
}

/// Read key `K` from map `M`.
///
/// Returns a default instance of the declared type.
pub fn get<K, M>() -> M::Value
where
    K: StaticKey,
    M: Entry<K>,
{
    debug!(key = %K::KEY, map = M::MAP.name(), position = M::POSITION, "get");
    M::Value::default()
}

/// Write key `K` in map `M`.
///
/// `value` must be the declared type, either owned or borrowed.
pub fn set<K, M>(value: impl Admits<M::Value>)
where
    K: StaticKey,
    M: Entry<K>,
{
    let _accepted: &M::Value = value.admitted();
    debug!(key = %K::KEY, map = M::MAP.name(), position = M::POSITION, "set");
}

impl ValidatedMap {
    /// A default instance of `key`'s declared type, type-erased.
    pub fn get_dyn(&self, key: Key) -> Result<Box<dyn Any + Send>, MapError> {
        let resolved = self.resolve(key)?;
        debug!(%key, map = self.name(), position = resolved.position(), "get");
        Ok(resolved.ty().make_default())
    }

    /// A default instance of `key`'s declared type, which must be `T`.
    pub fn get<T: Any>(&self, key: Key) -> Result<T, MapError> {
        let resolved = self.resolve(key)?;
        resolved.expect_type(TypeId::of::<T>(), type_name::<T>())?;
        debug!(%key, map = self.name(), position = resolved.position(), "get");
        resolved
            .ty()
            .make_default()
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| resolved.mismatch(type_name::<T>()))
    }

    /// Check `value` against `key`'s declared type.
    ///
    /// The value is taken by reference and that one reference is not part
    /// of the comparison: `V` must equal the declared type. Only one level
    /// is stripped, so `&&f64` checks `&f64` against the declaration and is
    /// a mismatch for a key declared `f64`.
    pub fn set<V: Any>(&self, key: Key, value: &V) -> Result<(), MapError> {
        self.admit(key, Any::type_id(value), type_name::<V>())
    }

    /// Check a type-erased value against `key`'s declared type.
    pub fn set_dyn(&self, key: Key, value: &dyn Any) -> Result<(), MapError> {
        self.admit(key, Any::type_id(value), UNNAMED_TYPE)
    }

    fn admit(&self, key: Key, found: TypeId, found_name: &'static str) -> Result<(), MapError> {
        let resolved = self.resolve(key)?;
        resolved.expect_type(found, found_name)?;
        debug!(%key, map = self.name(), position = resolved.position(), "set");
        Ok(())
    }
}
