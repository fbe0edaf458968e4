// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Runtime-typed accessor calls.
//!
//! For callers whose arguments are only known at runtime (scripting bindings,
//! declarative schemas). The typed API in [`crate::accessor`] rules out these
//! mistakes at compile time; here they are checked in order:
//!
//! ```text
//! invoke(env, kind, args)
//!   1. arity          1..=2  (enum 2..=3)     TooFew / TooMany
//!   2. name           non-empty String        EmptyName
//!   3. allowed set    List of String (enum)   EnumMembers
//!   4. default type   Boolean/Number/String   TypeMismatch
//!   5. lookup + coercion via Accessors
//! ```


use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::accessor::Accessors;
use crate::env::ReadEnv;
use crate::error::{ArgumentError, EnvResult, EnvVarError};

/// A dynamically typed accessor argument or result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
}

impl Value {
    /// Type name used in [`EnvVarError::TypeMismatch`] messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Boolean",
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::List(_) => "Array",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_infinite() => {
                f.write_str(if n.is_sign_positive() { "Infinity" } else { "-Infinity" })
            }
            Self::Number(n) if n.is_nan() => f.write_str("NaN"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<serde_json::Value> for Value {
    /// The JSON value that has no counterpart (null, objects).
    type Error = serde_json::Value;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::Bool(b) => Ok(Self::Bool(b)),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .ok_or(serde_json::Value::Number(n)),
            serde_json::Value::String(s) => Ok(Self::String(s)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            serde_json::Value::Null | serde_json::Value::Object(_) => Err(json),
        }
    }
}

/// Which accessor a dynamic call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    String,
    Number,
    Boolean,
    #[serde(alias = "one_of", alias = "oneOf")]
    Enum,
}

impl AccessorKind {
    /// Accepted argument counts, name included.
    #[must_use]
    pub const fn arity(self) -> RangeInclusive<usize> {
        match self {
            Self::String | Self::Number | Self::Boolean => 1..=2,
            Self::Enum => 2..=3,
        }
    }

    /// Type name a default value must have.
    #[must_use]
    pub const fn default_type(self) -> &'static str {
        match self {
            Self::String | Self::Enum => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calls the `kind` accessor with runtime-typed `args` against `env`.
///
/// `args` is `[name, default?]`, or `[name, allowed, default?]` for
/// [`AccessorKind::Enum`].
///
/// # Errors
///
/// Caller-contract violations ([`EnvVarError::Argument`],
/// [`EnvVarError::EnumMembers`], [`EnvVarError::TypeMismatch`]) are reported
/// before `env` is read; afterwards the accessor's own errors apply.
pub fn invoke<E: ReadEnv>(env: &E, kind: AccessorKind, args: &[Value]) -> EnvResult<Value> {
    let arity = kind.arity();
    if args.len() < *arity.start() {
        return Err(ArgumentError::TooFew.into());
    }
    if args.len() > *arity.end() {
        return Err(ArgumentError::TooMany.into());
    }

    let name = match args.first().and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ArgumentError::EmptyName.into()),
    };

    let vars = Accessors::new(env);
    match kind {
        AccessorKind::String => {
            let default = typed_default(name, kind, args.get(1), Value::as_str)?;
            match default {
                Some(d) => vars.string_or(name, d),
                None => vars.string(name),
            }
            .map(Value::String)
        }
        AccessorKind::Number => {
            let default = typed_default(name, kind, args.get(1), Value::as_f64)?;
            match default {
                Some(d) => vars.number_or(name, d),
                None => vars.number(name),
            }
            .map(Value::Number)
        }
        AccessorKind::Boolean => {
            let default = typed_default(name, kind, args.get(1), Value::as_bool)?;
            match default {
                Some(d) => vars.boolean_or(name, d),
                None => vars.boolean(name),
            }
            .map(Value::Bool)
        }
        AccessorKind::Enum => {
            let allowed = allowed_set(args.get(1))?;
            let default = typed_default(name, kind, args.get(2), Value::as_str)?;
            match default {
                Some(d) => vars.one_of_or(name, &allowed, d),
                None => vars.one_of(name, &allowed),
            }
            .map(Value::String)
        }
    }
}

fn typed_default<'a, T>(
    name: &str,
    kind: AccessorKind,
    default: Option<&'a Value>,
    extract: impl Fn(&'a Value) -> Option<T>,
) -> EnvResult<Option<T>> {
    default
        .map(|value| {
            extract(value).ok_or_else(|| EnvVarError::type_mismatch(name, kind.default_type()))
        })
        .transpose()
}

fn allowed_set(allowed: Option<&Value>) -> EnvResult<Vec<&str>> {
    allowed
        .and_then(Value::as_list)
        .ok_or(EnvVarError::EnumMembers)?
        .iter()
        .map(|member| member.as_str().ok_or(EnvVarError::EnumMembers))
        .collect()
}
