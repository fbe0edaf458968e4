// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment stores read by the accessors.
//!
//! # Architecture
//!
//! ```text
//! ReadEnv (trait: var(key) -> Result<String, VarError>)
//!   |
//!   +-- SystemEnv   process environment, zero-sized
//!   +-- Env         copy-on-write BTreeMap<String, String>
//!   +-- &E / Box<E> / Arc<E>
//! ```
//!
//! - **Presence matters**: an unset key (`NotPresent`) differs from an empty value
//! - **Read-only**: accessors never mutate the store

pub mod container;
pub mod system;

#[cfg(test)]
mod tests;

use std::env::VarError;
use std::sync::Arc;

pub use container::Env;
pub use system::SystemEnv;

/// Read access to a string-keyed environment.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site.
pub trait ReadEnv {
    /// Looks up `key`.
    ///
    /// # Errors
    ///
    /// Returns [`VarError::NotPresent`] if the key is unset and
    /// [`VarError::NotUnicode`] if the value is not valid unicode.
    fn var(&self, key: &str) -> Result<String, VarError>;

    /// Returns true if `key` is set, whatever its value.
    fn contains(&self, key: &str) -> bool {
        !matches!(self.var(key), Err(VarError::NotPresent))
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for Box<E> {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for Arc<E> {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

/// Captures the current process environment.
///
/// Entries whose name or value is not valid unicode are skipped.
#[must_use]
pub fn current_env() -> Env {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
