// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heterogeneous key/type tables checked before the program runs.
//!
//! A map here is a fixed list of `(key, type)` bindings. Keys are interned
//! text constants, types are any `Default + 'static` Rust type, and each key
//! may appear at most once. The crate guarantees three things about every map
//! you can actually use:
//!
//! 1. no key text is bound twice, and no two distinct keys share a hash;
//! 2. every key you read or write is bound in the map;
//! 3. the value you read or write has exactly the key's declared type.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   key.rs   │────▶│  binding.rs  │────▶│    map.rs    │
//! │ (Key, hash,│     │  (Binding,   │     │  (KeyMap ──▶ │
//! │  StaticKey)│     │  TypeDesc.)  │     │ ValidatedMap)│
//! └────────────┘     └──────────────┘     └──────────────┘
//!                                                │
//!        ┌───────────────────┬───────────────────┤
//!        ▼                   ▼                   ▼
//! ┌────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ unique.rs  │     │  resolve.rs  │────▶│  access.rs   │
//! │ (checker)  │     │ (key → slot) │     │ (get / set)  │
//! └────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Two tiers
//!
//! | Tier    | Declared with              | Violations surface as          |
//! |---------|----------------------------|--------------------------------|
//! | Static  | [`keys!`] + [`keymap!`]    | build failures                 |
//! | Dynamic | [`KeyMap`] + [`LazyMap`]   | [`MapError`] or a startup panic|
//!
//! Both tiers share the checker and the resolver, which are `const fn`s. The
//! static tier runs them during constant evaluation; the dynamic tier runs
//! them when a map is first validated.
//!
//! # Usage
//!
//! ```
//! use keyed::{get, keymap, keys, set};
//!
//! keys! {
//!     pub Port = "port";
//!     pub Host = "host";
//! }
//!
//! keymap! {
//!     pub Server {
//!         Port => u16,
//!         Host => String,
//!     }
//! }
//!
//! let port: u16 = get::<Port, Server>();
//! assert_eq!(port, 0);
//! set::<Host, Server>(String::from("localhost"));
//! ```

extern crate self as keyed;

mod access;
mod binding;
pub mod contracts;
pub mod demo;
mod error;
mod key;
mod lazy;
mod map;
mod resolve;
mod unique;

pub mod testing;

pub use access::{get, set, Admits, Entry, Schema, UNNAMED_TYPE};
pub use binding::{Binding, TypeDescriptor};
pub use error::MapError;
pub use key::{key_hash, text_eq, Key, StaticKey, HASH_MULTIPLIER, HASH_SEED};
pub use lazy::LazyMap;
pub use map::{KeyMap, ValidatedMap};
pub use resolve::{position_of, resolve, resolve_position, Resolved};
pub use unique::{
    all_violations, assert_unique, check_unique, first_violation, is_unique, Violation,
    ViolationKind,
};

pub use keyed_macros::keymap;
