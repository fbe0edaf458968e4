// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schema loading from layered TOML sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! SchemaLoader::new()
//!   .add_toml_file(base)              SchemaSource::File
//!   .add_toml_file_optional(local)    SchemaSource::OptionalFile
//!   .add_toml_str(inline)             SchemaSource::Inline
//!   .set("prefix", ..)
//!        |
//!        v
//!    build() --> Schema (validated)
//!        |
//!     errors name every source: "... from base.toml, local.toml (optional)"
//! ```
//!
//! Later sources override earlier ones key by key; a later `vars` array
//! replaces an earlier one as a whole.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};

use super::Schema;
use crate::error::Result;

/// Where a layer of a schema came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// A file that must exist.
    File(PathBuf),
    /// A file that is skipped when missing.
    OptionalFile(PathBuf),
    /// TOML passed as a string.
    Inline,
}

impl fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::OptionalFile(path) => write!(f, "{} (optional)", path.display()),
            Self::Inline => f.write_str("<inline>"),
        }
    }
}

/// Builder for loading a [`Schema`] from multiple sources.
pub struct SchemaLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    sources: Vec<SchemaSource>,
}

impl SchemaLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            sources: Vec::new(),
        }
    }

    /// Layers a schema file that must exist.
    ///
    /// The file is read by `build()`, which fails if it is missing or is not
    /// valid TOML.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        self.layer(
            File::from(path).format(FileFormat::Toml).required(true),
            SchemaSource::File(path.to_path_buf()),
        )
    }

    /// Layers a schema file that is skipped when missing, such as a local
    /// override next to a checked-in schema.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        self.layer(
            File::from(path).format(FileFormat::Toml).required(false),
            SchemaSource::OptionalFile(path.to_path_buf()),
        )
    }

    /// Layers an inline TOML schema.
    #[must_use]
    pub fn add_toml_str(self, content: &str) -> Self {
        self.layer(
            File::from_str(content, FileFormat::Toml),
            SchemaSource::Inline,
        )
    }

    fn layer<S>(mut self, source: S, origin: SchemaSource) -> Self
    where
        S: config::Source + Send + Sync + 'static,
    {
        self.builder = self.builder.add_source(source);
        self.sources.push(origin);
        self
    }

    /// Sets a top-level override such as `prefix`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid schema override '{key}'"))?;
        Ok(self)
    }

    /// Sources added so far, in layering order.
    #[must_use]
    pub fn sources(&self) -> &[SchemaSource] {
        &self.sources
    }

    /// Merges all sources into a validated schema.
    ///
    /// # Errors
    ///
    /// Returns an error naming every source if:
    /// - A required schema file is missing.
    /// - A source has invalid TOML syntax.
    /// - The merged document does not match the `Schema` structure.
    /// - The schema fails validation (see [`Schema::validate`]).
    pub fn build(self) -> Result<Schema> {
        let origin = describe(&self.sources);

        let schema: Schema = self
            .builder
            .build()
            .and_then(config::Config::try_deserialize)
            .with_context(|| format!("failed to load schema from {origin}"))?;
        schema
            .validate()
            .with_context(|| format!("invalid schema in {origin}"))?;

        tracing::debug!(vars = schema.vars.len(), sources = %origin, "Loaded environment schema");
        Ok(schema)
    }
}

impl Default for SchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(sources: &[SchemaSource]) -> String {
    if sources.is_empty() {
        return "no sources".to_string();
    }
    sources
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
