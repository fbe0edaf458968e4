// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed accessors over an environment store.
//!
//! # Lookup Pipeline
//!
//! ```text
//! accessor(name, [allowed], [default])
//!        |
//!   name empty? ---------------------> ArgumentError::EmptyName
//!        |
//!   env.var(name)
//!   |           |              |
//!   Ok(raw)     NotPresent     NotUnicode
//!   |           |              |
//!   coerce      default?       ValueError
//!   |           |      |
//!   T or        T      UnsetVariableError
//!   ValueError
//! ```
//!
//! Defaults are returned as given; they are never coerced. Every call re-reads
//! the store.
//!
//! # Example
//!
//! ```
//! use envvar_rs::accessor::Accessors;
//! use envvar_rs::env::Env;
//!
//! let env = Env::new().with("PORT", "8080").with("MODE", "prod");
//! let vars = Accessors::new(env);
//!
//! assert_eq!(vars.number("PORT")?, 8080.0);
//! assert_eq!(vars.one_of("MODE", &["dev", "prod"])?, "prod");
//! assert!(!vars.boolean_or("VERBOSE", false)?);
//! # Ok::<(), envvar_rs::error::EnvVarError>(())
//! ```

pub(crate) mod coerce;


use std::env::VarError;

use tracing::{debug, trace};

use crate::env::{ReadEnv, SystemEnv};
use crate::error::{ArgumentError, EnvResult, EnvVarError, ValueReason};

/// Typed accessors bound to an environment store.
#[derive(Debug, Clone, Default)]
pub struct Accessors<E> {
    env: E,
}

impl Accessors<SystemEnv> {
    /// Accessors over the process environment.
    #[must_use]
    pub const fn system() -> Self {
        Self { env: SystemEnv }
    }
}

impl<E: ReadEnv> Accessors<E> {
    #[must_use]
    pub const fn new(env: E) -> Self {
        Self { env }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn env(&self) -> &E {
        &self.env
    }

    /// Returns the value of `name` verbatim.
    ///
    /// # Errors
    ///
    /// [`EnvVarError::Unset`] if the variable is not set.
    pub fn string(&self, name: &str) -> EnvResult<String> {
        self.read(name, "string", None, Ok)
    }

    /// Returns the value of `name` verbatim, or `default` if it is not set.
    ///
    /// # Errors
    ///
    /// Only for an empty `name` or a non-unicode value.
    pub fn string_or(&self, name: &str, default: impl Into<String>) -> EnvResult<String> {
        self.read(name, "string", Some(default.into()), Ok)
    }

    /// Returns the value of `name` parsed as a number.
    ///
    /// # Errors
    ///
    /// [`EnvVarError::Unset`] if the variable is not set, [`EnvVarError::Value`]
    /// if it does not represent a number.
    pub fn number(&self, name: &str) -> EnvResult<f64> {
        self.read(name, "number", None, |raw| coerce::number(&raw))
    }

    /// Like [`number`](Self::number), falling back to `default` when unset.
    ///
    /// # Errors
    ///
    /// [`EnvVarError::Value`] if the variable is set but not a number.
    pub fn number_or(&self, name: &str, default: f64) -> EnvResult<f64> {
        self.read(name, "number", Some(default), |raw| coerce::number(&raw))
    }

    /// Returns the value of `name`, which must be `"true"` or `"false"`.
    ///
    /// # Errors
    ///
    /// [`EnvVarError::Unset`] if the variable is not set, [`EnvVarError::Value`]
    /// for any other value.
    pub fn boolean(&self, name: &str) -> EnvResult<bool> {
        self.read(name, "boolean", None, |raw| coerce::boolean(&raw))
    }

    /// Like [`boolean`](Self::boolean), falling back to `default` when unset.
    ///
    /// # Errors
    ///
    /// [`EnvVarError::Value`] if the variable is set to anything but `"true"`
    /// or `"false"`.
    pub fn boolean_or(&self, name: &str, default: bool) -> EnvResult<bool> {
        self.read(name, "boolean", Some(default), |raw| coerce::boolean(&raw))
    }

    /// Returns the value of `name`, provided it is one of `allowed`.
    ///
    /// # Errors
    ///
    /// [`EnvVarError::Unset`] if the variable is not set, [`EnvVarError::Value`]
    /// if its value is not in `allowed`.
    pub fn one_of<S: AsRef<str>>(&self, name: &str, allowed: &[S]) -> EnvResult<String> {
        self.read(name, "enum", None, |raw| coerce::one_of(raw, allowed))
    }

    /// Like [`one_of`](Self::one_of), falling back to `default` when unset.
    ///
    /// The default is not required to be a member of `allowed`.
    ///
    /// # Errors
    ///
    /// [`EnvVarError::Value`] if the variable is set to a value outside `allowed`.
    pub fn one_of_or<S: AsRef<str>>(
        &self,
        name: &str,
        allowed: &[S],
        default: impl Into<String>,
    ) -> EnvResult<String> {
        self.read(name, "enum", Some(default.into()), |raw| {
            coerce::one_of(raw, allowed)
        })
    }

    fn read<T>(
        &self,
        name: &str,
        accessor: &'static str,
        default: Option<T>,
        coerce: impl FnOnce(String) -> Result<T, ValueReason>,
    ) -> EnvResult<T> {
        if name.is_empty() {
            return Err(ArgumentError::EmptyName.into());
        }

        match self.env.var(name) {
            Ok(raw) => {
                trace!(var = name, accessor, "Coercing environment variable");
                coerce(raw).map_err(|reason| EnvVarError::value(name, reason))
            }
            Err(VarError::NotPresent) => match default {
                Some(value) => {
                    debug!(var = name, accessor, "Variable not set, using default");
                    Ok(value)
                }
                None => Err(EnvVarError::unset(name)),
            },
            Err(VarError::NotUnicode(_)) => {
                Err(EnvVarError::value(name, ValueReason::NotUnicode))
            }
        }
    }
}

/// Reads `name` from the process environment as a string.
///
/// # Errors
///
/// See [`Accessors::string`].
pub fn string(name: &str) -> EnvResult<String> {
    Accessors::system().string(name)
}

/// Reads `name` from the process environment as a string, with a default.
///
/// # Errors
///
/// See [`Accessors::string_or`].
pub fn string_or(name: &str, default: impl Into<String>) -> EnvResult<String> {
    Accessors::system().string_or(name, default)
}

/// Reads `name` from the process environment as a number.
///
/// # Errors
///
/// See [`Accessors::number`].
pub fn number(name: &str) -> EnvResult<f64> {
    Accessors::system().number(name)
}

/// Reads `name` from the process environment as a number, with a default.
///
/// # Errors
///
/// See [`Accessors::number_or`].
pub fn number_or(name: &str, default: f64) -> EnvResult<f64> {
    Accessors::system().number_or(name, default)
}

/// Reads `name` from the process environment as a boolean.
///
/// # Errors
///
/// See [`Accessors::boolean`].
pub fn boolean(name: &str) -> EnvResult<bool> {
    Accessors::system().boolean(name)
}

/// Reads `name` from the process environment as a boolean, with a default.
///
/// # Errors
///
/// See [`Accessors::boolean_or`].
pub fn boolean_or(name: &str, default: bool) -> EnvResult<bool> {
    Accessors::system().boolean_or(name, default)
}

/// Reads `name` from the process environment, restricted to `allowed`.
///
/// # Errors
///
/// See [`Accessors::one_of`].
pub fn one_of<S: AsRef<str>>(name: &str, allowed: &[S]) -> EnvResult<String> {
    Accessors::system().one_of(name, allowed)
}

/// Reads `name` from the process environment, restricted to `allowed`, with a default.
///
/// # Errors
///
/// See [`Accessors::one_of_or`].
pub fn one_of_or<S: AsRef<str>>(
    name: &str,
    allowed: &[S],
    default: impl Into<String>,
) -> EnvResult<String> {
    Accessors::system().one_of_or(name, allowed, default)
}
