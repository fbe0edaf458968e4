// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the typed and dynamic accessors.
//!
//! Runs the accessors against in-memory stores with realistic service settings.

use envvar_rs::dynamic::{AccessorKind, Value, invoke};
use envvar_rs::env::Env;
use envvar_rs::{Accessors, ArgumentError, EnvVarError, ErrorKind};

fn service_env() -> Env {
    Env::new()
        .with("PORT", "8443")
        .with("RATIO", "0.75")
        .with("TLS", "true")
        .with("LOG_FORMAT", "json")
        .with("GREETING", "")
}

// =============================================================================
// Typed accessors
// =============================================================================

#[test]
fn accessors_read_service_settings() {
    let vars = Accessors::new(service_env());

    assert_eq!(vars.number("PORT"), Ok(8443.0));
    assert_eq!(vars.number("RATIO"), Ok(0.75));
    assert_eq!(vars.boolean("TLS"), Ok(true));
    assert_eq!(
        vars.one_of("LOG_FORMAT", &["json", "text"]).as_deref(),
        Ok("json")
    );
    assert_eq!(vars.string("GREETING").as_deref(), Ok(""));
}

#[test]
fn accessors_fall_back_to_defaults() {
    let vars = Accessors::new(service_env());

    assert_eq!(vars.number_or("WORKERS", 4.0), Ok(4.0));
    assert_eq!(vars.boolean_or("DEBUG", false), Ok(false));
    assert_eq!(vars.string_or("HOST", "0.0.0.0").as_deref(), Ok("0.0.0.0"));
    assert_eq!(
        vars.one_of_or("COLOR", &["auto", "always", "never"], "auto")
            .as_deref(),
        Ok("auto")
    );
}

#[test]
fn accessors_ignore_defaults_when_set() {
    let vars = Accessors::new(service_env());

    assert_eq!(vars.number_or("PORT", 80.0), Ok(8443.0));
    assert_eq!(vars.boolean_or("TLS", false), Ok(true));
    assert_eq!(vars.string_or("GREETING", "hello").as_deref(), Ok(""));
}

#[test]
fn accessors_report_missing_settings() {
    let vars = Accessors::new(service_env());

    let errors = [
        vars.string("DATABASE_URL").unwrap_err(),
        vars.number("TIMEOUT").unwrap_err(),
        vars.boolean("CACHE").unwrap_err(),
        vars.one_of("REGION", &["eu", "us"]).unwrap_err(),
    ];
    for err in errors {
        assert_eq!(err.kind(), ErrorKind::UnsetVariable);
        let name = err.name().unwrap_or_default();
        assert!(err.to_string().contains(name), "{err}");
    }
}

#[test]
fn accessors_report_malformed_settings() {
    let env = service_env()
        .with("PORT", "8443/tcp")
        .with("TLS", "on")
        .with("LOG_FORMAT", "JSON");
    let vars = Accessors::new(env);

    insta::assert_snapshot!(
        vars.number("PORT").unwrap_err().to_string(),
        @r#"Value of environment variable "PORT" does not represent a number"#
    );
    insta::assert_snapshot!(
        vars.boolean_or("TLS", true).unwrap_err().to_string(),
        @r#"Value of environment variable "TLS" is neither "true" nor "false""#
    );
    insta::assert_snapshot!(
        vars.one_of("LOG_FORMAT", &["json", "text"]).unwrap_err().to_string(),
        @r#"Value of environment variable "LOG_FORMAT" is not one of (json | text)"#
    );
}

// =============================================================================
// Dynamic accessors
// =============================================================================

#[test]
fn dynamic_matches_typed_results() {
    let env = service_env();
    let vars = Accessors::new(&env);

    assert_eq!(
        invoke(&env, AccessorKind::Number, &["PORT".into()]),
        vars.number("PORT").map(Value::Number)
    );
    assert_eq!(
        invoke(&env, AccessorKind::Boolean, &["DEBUG".into(), true.into()]),
        vars.boolean_or("DEBUG", true).map(Value::Bool)
    );
    assert_eq!(
        invoke(
            &env,
            AccessorKind::Enum,
            &["LOG_FORMAT".into(), Value::from(vec!["json", "text"])]
        ),
        Ok(Value::from("json"))
    );
}

#[test]
fn dynamic_contract_violations_ignore_environment_state() {
    for env in [Env::new(), service_env()] {
        assert_eq!(
            invoke(&env, AccessorKind::Number, &[]),
            Err(EnvVarError::Argument(ArgumentError::TooFew))
        );
        assert_eq!(
            invoke(
                &env,
                AccessorKind::Number,
                &["PORT".into(), 1.into(), 2.into()]
            ),
            Err(EnvVarError::Argument(ArgumentError::TooMany))
        );
        assert_eq!(
            invoke(&env, AccessorKind::Number, &["PORT".into(), "80".into()]),
            Err(EnvVarError::type_mismatch("PORT", "Number"))
        );
        assert_eq!(
            invoke(
                &env,
                AccessorKind::Enum,
                &["LOG_FORMAT".into(), Value::List(vec![1.into()]), "json".into()]
            ),
            Err(EnvVarError::EnumMembers)
        );
    }
}

#[test]
fn dynamic_args_from_json() {
    let env = service_env();
    let args: Vec<Value> = serde_json::from_str(r#"["LOG_FORMAT", ["json", "text"], "text"]"#)
        .expect("valid json");
    assert_eq!(
        invoke(&env, AccessorKind::Enum, &args),
        Ok(Value::from("json"))
    );
}
