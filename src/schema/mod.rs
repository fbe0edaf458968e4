// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declarative environment schemas.
//!
//! # Schema File
//!
//! ```toml
//! prefix = "APP_"          # prepended to every name
//!
//! [[vars]]
//! name = "PORT"            # reads APP_PORT
//! type = "number"
//! default = 8080
//! description = "Port to listen on"
//!
//! [[vars]]
//! name = "MODE"
//! type = "enum"            # or "one_of"
//! allowed = ["dev", "prod"]
//! ```
//!
//! # Resolution
//!
//! ```text
//! Schema::resolve(env)
//!   for each VarSpec:  dynamic::invoke(env, kind, [name, allowed?, default?])
//!        |                         |
//!     Ok(Value)                Err(EnvVarError)
//!        v                         v
//!     Resolved               SchemaErrors (all of them, in declaration order)
//! ```

pub mod loader;


use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::fmt::{self, Write as _};
use std::path::Path;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::dynamic::{AccessorKind, Value, invoke};
use crate::env::ReadEnv;
use crate::error::{EnvVarError, Result};

pub use loader::{SchemaLoader, SchemaSource};

/// A set of environment variables to resolve together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Schema {
    /// Prepended to every variable name on lookup.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    /// Declared variables, in declaration order.
    pub vars: Vec<VarSpec>,
}

/// One declared variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(deny_unknown_fields)]
pub struct VarSpec {
    /// Name without the schema prefix.
    #[builder(into)]
    pub name: String,
    /// Accessor used to read it.
    #[serde(rename = "type")]
    pub kind: AccessorKind,
    /// Allowed set, for [`AccessorKind::Enum`] only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub allowed: Option<Value>,
    /// Returned when the variable is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,
}

impl VarSpec {
    /// Arguments for [`invoke`]: `[name, allowed?, default?]`.
    #[must_use]
    pub fn args(&self, prefix: &str) -> Vec<Value> {
        let mut args = vec![Value::String(format!("{prefix}{}", self.name))];
        args.extend(self.allowed.iter().cloned());
        args.extend(self.default.iter().cloned());
        args
    }

    /// Returns true if resolving fails when the variable is unset.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

impl Schema {
    /// Create a new schema loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envvar_rs::schema::Schema;
    ///
    /// let schema = Schema::builder()
    ///     .add_toml_file("env.schema.toml")
    ///     .add_toml_file_optional("env.schema.local.toml")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> SchemaLoader {
        SchemaLoader::new()
    }

    /// Load a schema from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not describe a valid schema.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load a schema from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not describe
    /// a valid schema.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks the schema's shape.
    ///
    /// Value types (defaults, allowed members) are checked at resolve time,
    /// where they surface as [`EnvVarError`]s.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty or declared twice, an enum lacks
    /// `allowed`, or a non-enum declares `allowed`.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, var) in self.vars.iter().enumerate() {
            if var.name.is_empty() {
                anyhow::bail!("variable #{} has an empty name", index + 1);
            }
            if !seen.insert(var.name.as_str()) {
                anyhow::bail!("variable '{}' is declared more than once", var.name);
            }
            match (var.kind, &var.allowed) {
                (AccessorKind::Enum, None) => {
                    anyhow::bail!("enum variable '{}' has no 'allowed' list", var.name);
                }
                (AccessorKind::String | AccessorKind::Number | AccessorKind::Boolean, Some(_)) => {
                    anyhow::bail!(
                        "'allowed' is only valid for enum variables, but '{}' is {}",
                        var.name,
                        var.kind
                    );
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Resolves every declared variable against `env`.
    ///
    /// # Errors
    ///
    /// Returns every variable's error, not just the first.
    pub fn resolve<E: ReadEnv>(&self, env: &E) -> std::result::Result<Resolved, SchemaErrors> {
        let mut values = BTreeMap::new();
        let mut errors = Vec::new();

        for var in &self.vars {
            match invoke(env, var.kind, &var.args(&self.prefix)) {
                Ok(value) => {
                    values.insert(var.name.clone(), value);
                }
                Err(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            tracing::debug!(vars = values.len(), "Resolved environment schema");
            Ok(Resolved { values })
        } else {
            tracing::debug!(errors = errors.len(), "Environment schema failed to resolve");
            Err(SchemaErrors(errors))
        }
    }

    /// Renders a `.env.example` template documenting every variable.
    ///
    /// Defaults and allowed members that are not plain tokens are
    /// double-quoted, so each variable stays on a single line.
    #[must_use]
    pub fn env_example(&self) -> String {
        let mut out = String::new();
        for (i, var) in self.vars.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if let Some(description) = &var.description {
                let lines = description
                    .split(['\n', '\r', '\u{2028}', '\u{2029}'])
                    .filter(|line| !line.is_empty());
                for line in lines {
                    let _ = writeln!(out, "# {line}");
                }
            }
            match var.allowed.as_ref().and_then(Value::as_list) {
                Some(allowed) => {
                    let members: Vec<String> = allowed
                        .iter()
                        .map(|member| dotenv_value(&member.to_string()).into_owned())
                        .collect();
                    let _ = writeln!(out, "# type: {} ({})", var.kind, members.join(" | "));
                }
                None => {
                    let _ = writeln!(out, "# type: {}", var.kind);
                }
            }
            match &var.default {
                Some(default) => {
                    let default = dotenv_value(&default.to_string()).into_owned();
                    let _ = writeln!(out, "{}{}={default}", self.prefix, var.name);
                }
                None => {
                    let _ = writeln!(out, "# required");
                    let _ = writeln!(out, "{}{}=", self.prefix, var.name);
                }
            }
        }
        out
    }
}

/// Renders a value for a dotenv line, double-quoting anything beyond a plain
/// token so that it stays on one line and cannot start a comment.
fn dotenv_value(raw: &str) -> Cow<'_, str> {
    let plain = !raw.is_empty()
        && raw.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '@' | '+' | ',')
        });
    if plain {
        return Cow::Borrowed(raw);
    }

    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for c in raw.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') => {
                quoted.extend(c.escape_unicode());
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Values of a successfully resolved [`Schema`], keyed by unprefixed name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Resolved {
    values: BTreeMap<String, Value>,
}

impl Resolved {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    #[must_use]
    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.values
    }
}

/// Every error raised while resolving a [`Schema`], in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaErrors(Vec<EnvVarError>);

impl SchemaErrors {
    #[must_use]
    pub fn errors(&self) -> &[EnvVarError] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<EnvVarError> {
        self.0
    }
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}
