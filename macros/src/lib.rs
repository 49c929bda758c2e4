// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Procedural macros for `keyed`.
//!
//! One macro, [`keymap!`], turns a list of `KeyMarker => Type` pairs into a
//! map type whose uniqueness is proved while the crate compiles. The macro
//! itself only catches the obvious mistake of naming the same marker twice.
//! Everything else (two markers spelling the same text, hash collisions,
//! lookups of keys the map doesn't bind) is left to `const` evaluation of the
//! code it emits, so the proof is the same one the run-time checker does.
//!
//! # Example
//!
//! ```ignore
//! use keyed::{keymap, keys};
//!
//! keys! {
//!     pub Hello = "hello";
//!     pub Is = "is";
//! }
//!
//! keymap! {
//!     /// Settings read by the greeter.
//!     pub Greeter {
//!         Hello => f32,
//!         Is => f64,
//!     }
//! }
//!
//! // Expands to, roughly:
//! //
//! // pub struct Greeter;
//! // impl Greeter {
//! //     pub const BINDINGS: &'static [keyed::Binding] = &[...];
//! //     pub const KEY_MAP: keyed::KeyMap = keyed::KeyMap::new("Greeter", Self::BINDINGS);
//! // }
//! // const _: () = keyed::assert_unique(Greeter::BINDINGS);
//! // impl keyed::Schema for Greeter { ... }
//! // impl keyed::Entry<Hello> for Greeter { type Value = f32; ... }
//! // impl keyed::Entry<Is> for Greeter { type Value = f64; ... }
//! ```

use proc_macro::TokenStream;

mod keymap;

/// Declare a map type checked at build time.
///
/// # Syntax
///
/// ```text
/// keymap! {
///     #[attributes]
///     <visibility> Name {
///         KeyMarker => Type,
///         ...
///     }
/// }
/// ```
///
/// Each `KeyMarker` must implement `keyed::StaticKey`, usually by way of
/// `keyed::keys!`. Each `Type` must be `Default + Send + 'static`.
///
/// # Generated Output
///
/// - A unit struct `Name` with `BINDINGS` and `KEY_MAP` associated consts
/// - A `const` item that fails the build if the map isn't unique
/// - `keyed::Schema` for `Name`
/// - `keyed::Entry<KeyMarker>` for `Name`, once per binding
#[proc_macro]
pub fn keymap(input: TokenStream) -> TokenStream {
    keymap::expand(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
