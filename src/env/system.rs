// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process environment store.

use std::env::{self, VarError};

use super::ReadEnv;

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        // Keys containing '=' or NUL can never name a variable.
        if key.is_empty() || key.contains(['=', '\0']) {
            return Err(VarError::NotPresent);
        }
        env::var(key)
    }
}
