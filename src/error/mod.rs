// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 EnvVarError
//!                      |
//!   +--------+---------+----------+-------+-------+
//!   |        |         |          |       |       |
//!   v        v         v          v       v       v
//! Argument TypeMismatch EnumMembers Unset  Value
//!   |
//! TooFew, TooMany, EmptyName
//!
//! ErrorKind: Argument | TypeMismatch | UnsetVariable | Value
//! ```
//!
//! Caller-contract violations (`Argument`, `TypeMismatch`, `EnumMembers`) are
//! raised before the environment is read. `Unset` and `Value` describe the
//! environment itself.

use std::fmt;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvVarError`].
pub type EnvResult<T> = std::result::Result<T, EnvVarError>;

/// Error raised by an accessor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvVarError {
    /// The accessor was called with a malformed argument list.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// A default value (or the variable name itself) has the wrong type.
    #[error("Default value of environment variable \"{name}\" is not of type {expected}")]
    TypeMismatch { name: String, expected: &'static str },

    /// An allowed set contains a member that is not a string.
    #[error("Enumerated types must consist solely of string values")]
    EnumMembers,

    /// The variable is absent and no default was supplied.
    #[error("No environment variable named \"{name}\"")]
    Unset { name: String },

    /// The variable is present but its value failed coercion.
    #[error("Value of environment variable \"{name}\" {reason}")]
    Value { name: String, reason: ValueReason },
}

/// Malformed accessor invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Too few arguments")]
    TooFew,

    #[error("Too many arguments")]
    TooMany,

    #[error("Variable name must be a non-empty string")]
    EmptyName,
}

/// Why a present value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueReason {
    /// Not exactly `"true"` or `"false"`.
    NotBoolean,
    /// Not a numeric literal.
    NotNumber,
    /// Not a member of the allowed set (kept in caller order).
    NotOneOf(Vec<String>),
    /// Raw bytes are not valid unicode.
    NotUnicode,
}

impl fmt::Display for ValueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotBoolean => write!(f, "is neither \"true\" nor \"false\""),
            Self::NotNumber => write!(f, "does not represent a number"),
            Self::NotOneOf(allowed) => write!(f, "is not one of ({})", allowed.join(" | ")),
            Self::NotUnicode => write!(f, "is not valid unicode"),
        }
    }
}

/// Coarse classification of an [`EnvVarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Argument,
    TypeMismatch,
    UnsetVariable,
    Value,
}

impl ErrorKind {
    /// Name of the error kind as used in messages and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Argument => "ArgumentError",
            Self::TypeMismatch => "TypeMismatchError",
            Self::UnsetVariable => "UnsetVariableError",
            Self::Value => "ValueError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EnvVarError {
    /// Builds an [`EnvVarError::Unset`].
    pub fn unset(name: impl Into<String>) -> Self {
        Self::Unset { name: name.into() }
    }

    /// Builds an [`EnvVarError::Value`].
    pub fn value(name: impl Into<String>, reason: ValueReason) -> Self {
        Self::Value {
            name: name.into(),
            reason,
        }
    }

    /// Builds an [`EnvVarError::TypeMismatch`].
    pub fn type_mismatch(name: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Argument(_) => ErrorKind::Argument,
            Self::TypeMismatch { .. } | Self::EnumMembers => ErrorKind::TypeMismatch,
            Self::Unset { .. } => ErrorKind::UnsetVariable,
            Self::Value { .. } => ErrorKind::Value,
        }
    }

    /// Name of the offending variable, when the error concerns one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { name, .. } | Self::Unset { name } | Self::Value { name, .. } => {
                Some(name)
            }
            Self::Argument(_) | Self::EnumMembers => None,
        }
    }

    /// Returns true for errors caused by the caller rather than the environment.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Argument | ErrorKind::TypeMismatch)
    }
}
