// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!        string / number / boolean / one_of   (+ *_or defaults)
//!                           |
//!              ,------------+------------,
//!              v                         v
//!          accessor                  dynamic
//!     Accessors<E>, coerce     Value, arity & type checks
//!              |                         |
//!              |                      schema
//!              |                TOML (config), resolve all
//!              +------------+------------+
//!                           v
//!                          env
//!              ReadEnv: SystemEnv | Env (in-memory)
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```no_run
//! let port = envvar_rs::number_or("PORT", 8080.0)?;
//! let mode = envvar_rs::one_of("MODE", &["development", "production"])?;
//! let debug = envvar_rs::boolean_or("DEBUG", false)?;
//! let url = envvar_rs::string("DATABASE_URL")?;
//! # Ok::<(), envvar_rs::EnvVarError>(())
//! ```

pub mod accessor;
pub mod dynamic;
pub mod env;
pub mod error;
pub mod logging;
pub mod schema;

#[cfg(test)]
mod test_utils;

pub use accessor::{
    Accessors, boolean, boolean_or, number, number_or, one_of, one_of_or, string, string_or,
};
pub use error::{ArgumentError, EnvResult, EnvVarError, ErrorKind, ValueReason};
