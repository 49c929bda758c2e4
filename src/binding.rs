// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type bindings: one key paired with one declared type.
//!
//! A binding never holds a value. The declared type is carried as a
//! [`TypeDescriptor`], a bundle of function pointers that answer "which type"
//! and "make me a default one" on demand. Function pointers keep the whole
//! thing `const`-constructible, so bindings can live in `static` slices.

use std::any::{type_name, Any, TypeId};
use std::fmt;

use crate::key::Key;

fn boxed_default<T: Any + Default + Send>() -> Box<dyn Any + Send> {
    Box::new(T::default())
}

/// Runtime description of a declared type.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    make_default: fn() -> Box<dyn Any + Send>,
}

impl TypeDescriptor {
    /// Describe `T`.
    pub const fn of<T: Any + Default + Send>() -> Self {
        Self {
            type_id: TypeId::of::<T>,
            type_name: type_name::<T>,
            make_default: boxed_default::<T>,
        }
    }

    /// The declared type's `TypeId`.
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// The declared type's name, as reported by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Whether `T` is exactly the declared type.
    pub fn is<T: Any>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }

    /// A default-initialized instance of the declared type.
    pub fn make_default(&self) -> Box<dyn Any + Send> {
        (self.make_default)()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for TypeDescriptor {}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeDescriptor").field(&self.name()).finish()
    }
}

/// A `(key, declared type)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    key: Key,
    ty: TypeDescriptor,
}

impl Binding {
    /// Bind `key` to the type described by `ty`.
    pub const fn new(key: Key, ty: TypeDescriptor) -> Self {
        Self { key, ty }
    }

    /// Bind `key` to `T`.
    pub const fn of<T: Any + Default + Send>(key: Key) -> Self {
        Self::new(key, TypeDescriptor::of::<T>())
    }

    /// The bound key.
    pub const fn key(&self) -> Key {
        self.key
    }

    /// The declared type.
    pub const fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }
}
