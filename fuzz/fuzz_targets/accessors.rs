// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for resolution and the dynamic accessors.
//!
//! Probes the demonstration map with arbitrary keys and values. Accessors
//! must return errors, never panic, and must accept a value exactly when its
//! type is the declared one.

#![no_main]

use arbitrary::Arbitrary;
use keyed::demo::{True, DEMO_MAP};
use keyed::{Key, MapError, TypeDescriptor};
use libfuzzer_sys::fuzz_target;

const PROBES: &[&str] = &["hellow", "hello", "world", "is", "empty", "nowhere", "", "World", "b`"];

#[derive(Debug, Arbitrary)]
enum Value {
    Single(f32),
    Double(f64),
    Flag(bool),
    Sentinel,
    Text(String),
}

impl Value {
    fn descriptor(&self) -> TypeDescriptor {
        match self {
            Value::Single(_) => TypeDescriptor::of::<f32>(),
            Value::Double(_) => TypeDescriptor::of::<f64>(),
            Value::Flag(_) => TypeDescriptor::of::<bool>(),
            Value::Sentinel => TypeDescriptor::of::<True>(),
            Value::Text(_) => TypeDescriptor::of::<String>(),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct AccessInput {
    probes: Vec<(u8, Value)>,
}

fuzz_target!(|input: AccessInput| {
    let map = DEMO_MAP.validated();

    for (pick, value) in input.probes.iter().take(64) {
        let key = Key::new(PROBES[*pick as usize % PROBES.len()]);
        let declared = map
            .bindings()
            .iter()
            .find(|binding| binding.key() == key)
            .map(|binding| *binding.ty());

        let result = match value {
            Value::Single(v) => map.set(key, v),
            Value::Double(v) => map.set(key, v),
            Value::Flag(v) => map.set(key, v),
            Value::Sentinel => map.set(key, &True),
            Value::Text(v) => map.set(key, v),
        };

        match declared {
            None => assert!(matches!(result, Err(MapError::KeyNotFound { .. }))),
            Some(ty) if ty == value.descriptor() => assert_eq!(result, Ok(())),
            Some(_) => assert!(matches!(result, Err(MapError::TypeMismatch { .. }))),
        }

        if let Some(ty) = declared {
            let fresh = map.get_dyn(key).expect("declared key resolves");
            assert_eq!((*fresh).type_id(), ty.type_id());
        }
    }
});
