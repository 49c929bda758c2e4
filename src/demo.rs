// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The demonstration vocabulary and maps used by the `keyed` binary.
//!
//! Six keys, one well-formed map, and two maps that must never validate:
//!
//! | Map                    | Bindings                                  | Verdict    |
//! |------------------------|-------------------------------------------|------------|
//! | [`CompileTimeMap`]     | hello: f32, world: True, is: f64, empty: bool | valid  |
//! | [`NON_UNIQUE_MAP`]     | world: f32, world (another): True         | duplicate  |
//! | [`OTHER_NON_UNIQUE_MAP`] | world: f32, world: True                 | duplicate  |
//!
//! `AnotherWorld` is a second marker for the text `"world"`, so the first
//! broken map repeats the key without repeating the marker.
//!
//! The broken maps exist as plain [`KeyMap`] values so the dynamic tier can
//! show their rejection. Declaring them with `keymap!` doesn't build:
//!
//! ```compile_fail,E0080
//! use keyed::demo::{AnotherWorld, True, World};
//! use keyed::keymap;
//!
//! keymap! {
//!     NonUnique {
//!         World => f32,
//!         AnotherWorld => True,
//!     }
//! }
//!
//! fn main() {}
//! ```
//!
//! The repeated marker is caught by `keymap!` itself and reported through
//! `compile_error!`, which carries no error code:
//!
//! ```compile_fail
//! use keyed::demo::{True, World};
//! use keyed::keymap;
//!
//! keymap! {
//!     OtherNonUnique {
//!         World => f32,
//!         World => True,
//!     }
//! }
//!
//! fn main() {}
//! ```
//!
//! Neither does reading a key the valid map doesn't bind:
//!
//! ```compile_fail,E0277
//! use keyed::demo::{CompileTimeMap, Nowhere};
//!
//! let _ = keyed::get::<Nowhere, CompileTimeMap>();
//! ```
//!
//! Or writing a value of the wrong type:
//!
//! ```compile_fail,E0277
//! use keyed::demo::{CompileTimeMap, Is};
//!
//! keyed::set::<Is, CompileTimeMap>(true);
//! ```

use crate::binding::Binding;
use crate::key::StaticKey;
use crate::lazy::LazyMap;
use crate::map::KeyMap;

crate::keys! {
    pub Hello = "hellow";
    pub World = "world";
    /// Same text as [`World`], declared separately.
    pub AnotherWorld = "world";
    pub Is = "is";
    pub Empty = "empty";
    /// Bound in no map.
    pub Nowhere = "nowhere";
}

/// Unit type standing for the boolean constant `true` at the type level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

crate::keymap! {
    /// The well-formed demonstration map.
    pub CompileTimeMap {
        Hello => f32,
        World => True,
        Is => f64,
        Empty => bool,
    }
}

/// `"world"` bound twice through two different markers.
pub const NON_UNIQUE_MAP: KeyMap = KeyMap::new(
    "NonUniqueMap",
    &[
        Binding::of::<f32>(World::KEY),
        Binding::of::<True>(AnotherWorld::KEY),
    ],
);

/// `"world"` bound twice through the same marker.
pub const OTHER_NON_UNIQUE_MAP: KeyMap = KeyMap::new(
    "OtherNonUniqueMap",
    &[
        Binding::of::<f32>(World::KEY),
        Binding::of::<True>(World::KEY),
    ],
);

/// [`CompileTimeMap`] for the dynamic tier, validated on first use.
pub static DEMO_MAP: LazyMap = LazyMap::new(CompileTimeMap::KEY_MAP);

/// Every demonstration declaration, valid or not, in display order.
pub fn declarations() -> [KeyMap; 3] {
    [CompileTimeMap::KEY_MAP, NON_UNIQUE_MAP, OTHER_NON_UNIQUE_MAP]
}
