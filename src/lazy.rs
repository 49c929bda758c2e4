// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validate-once holders for maps that are checked at startup.
//!
//! When a map can't be proved in a `const` item, it still has to be checked
//! exactly once, before anything uses it. [`LazyMap`] sits in a `static`,
//! runs the uniqueness checker on first access (however many threads race to
//! get there), and caches the outcome. A failed check is fatal: every access
//! panics with the same error, so no caller ever sees a half-validated map.
//!
//! ```
//! use keyed::{Binding, Key, KeyMap, LazyMap};
//!
//! static SETTINGS: LazyMap = LazyMap::new(KeyMap::new(
//!     "settings",
//!     &[
//!         Binding::of::<u32>(Key::new("retries")),
//!         Binding::of::<bool>(Key::new("verbose")),
//!     ],
//! ));
//!
//! let retries: u32 = SETTINGS.get(Key::new("retries")).unwrap();
//! assert_eq!(retries, 0);
//! ```

use std::ops::Deref;
use std::sync::OnceLock;

use tracing::error;

use crate::error::MapError;
use crate::map::{KeyMap, ValidatedMap};

/// A map declaration validated on first use.
#[derive(Debug)]
pub struct LazyMap {
    declared: KeyMap,
    validated: OnceLock<Result<ValidatedMap, MapError>>,
}

impl LazyMap {
    pub const fn new(declared: KeyMap) -> Self {
        Self {
            declared,
            validated: OnceLock::new(),
        }
    }

    /// The declaration, whether or not it has been validated.
    pub const fn declared(&self) -> &KeyMap {
        &self.declared
    }

    /// Validate if needed and return the outcome without panicking.
    pub fn try_validated(&self) -> Result<&ValidatedMap, &MapError> {
        // INVARIANT: the checker runs at most once per LazyMap
        self.validated
            .get_or_init(|| ValidatedMap::new(self.declared))
            .as_ref()
    }

    /// Validate if needed and return the map.
    ///
    /// # Panics
    ///
    /// Panics if the declaration has a duplicate key or a hash collision.
    pub fn validated(&self) -> &ValidatedMap {
        match self.try_validated() {
            Ok(map) => map,
            Err(err) => {
                error!(map = self.declared.name(), %err, "key map failed validation");
                panic!("key map `{}` failed validation: {err}", self.declared.name())
            }
        }
    }

    /// Whether validation has already run.
    pub fn is_initialized(&self) -> bool {
        self.validated.get().is_some()
    }
}

impl Deref for LazyMap {
    type Target = ValidatedMap;

    fn deref(&self) -> &ValidatedMap {
        self.validated()
    }
}
