// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit, integration, and fuzz tests.
//!
//! This module is always compiled but hidden from documentation. Maps built
//! here leak their storage, which is how arbitrary run-time text becomes the
//! `&'static` data a [`KeyMap`] borrows. Fine for tests, wrong for anything
//! long-running.

#![doc(hidden)]

use crate::binding::{Binding, TypeDescriptor};
use crate::key::Key;
use crate::map::KeyMap;

/// Two distinct texts with the same key hash: 65 + 33 * 97 == 98 + 33 * 96.
pub const COLLIDING_PAIR: (&str, &str) = ("Aa", "b`");

/// Give `text` a `'static` lifetime by leaking it.
pub fn leak_str(text: &str) -> &'static str {
    Box::leak(text.to_owned().into_boxed_str())
}

/// A key whose text lives in fresh storage, never shared with a literal.
pub fn leak_key(text: &str) -> Key {
    Key::new(leak_str(text))
}

/// One of a few distinct types, picked by `index`.
pub fn type_for(index: usize) -> TypeDescriptor {
    match index % 5 {
        0 => TypeDescriptor::of::<u8>(),
        1 => TypeDescriptor::of::<f32>(),
        2 => TypeDescriptor::of::<bool>(),
        3 => TypeDescriptor::of::<String>(),
        _ => TypeDescriptor::of::<Vec<u64>>(),
    }
}

/// Leak `bindings` into a `'static` slice.
pub fn leak_bindings(bindings: Vec<Binding>) -> &'static [Binding] {
    Box::leak(bindings.into_boxed_slice())
}

/// A map binding each text, in order, to a type picked by [`type_for`].
pub fn map_of(name: &str, texts: &[&str]) -> KeyMap {
    let bindings = texts
        .iter()
        .enumerate()
        .map(|(i, text)| Binding::new(leak_key(text), type_for(i)))
        .collect();
    KeyMap::new(leak_str(name), leak_bindings(bindings))
}

/// A map binding each `(text, type)` pair, in order.
pub fn map_with_types(name: &str, entries: &[(&str, TypeDescriptor)]) -> KeyMap {
    let bindings = entries
        .iter()
        .map(|&(text, ty)| Binding::new(leak_key(text), ty))
        .collect();
    KeyMap::new(leak_str(name), leak_bindings(bindings))
}
