// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use std::collections::BTreeMap;
use std::env::VarError;
use std::sync::Arc;

use super::{Env, ReadEnv, SystemEnv, current_env};

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    insta::assert_yaml_snapshot!(
        vec![
            ("get_FOO", env.get("FOO")),
            ("get_foo_lowercase", env.get("foo")),
            ("get_NOTEXIST", env.get("NOTEXIST")),
        ],
        @r#"
    - - get_FOO
      - bar
    - - get_foo_lowercase
      - ~
    - - get_NOTEXIST
      - ~
    "#
    );
}

#[test]
fn test_env_presence_vs_empty() {
    let env = Env::new().with("EMPTY", "");

    assert_eq!(env.var("EMPTY"), Ok(String::new()));
    assert!(env.contains("EMPTY"));
    assert_eq!(env.var("MISSING"), Err(VarError::NotPresent));
    assert!(!env.contains("MISSING"));
}

#[test]
fn test_env_copy_on_write() {
    let mut env1 = Env::new();
    env1.set("KEY1", "value1");

    let mut env2 = env1.clone();
    assert!(env1.shares_storage_with(&env2));

    env2.set("KEY2", "value2");
    assert!(!env1.shares_storage_with(&env2));

    assert_eq!(env1.get("KEY1"), Some("value1"));
    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), Some("value1"));
    assert_eq!(env2.get("KEY2"), Some("value2"));
}

#[test]
fn test_env_remove_missing_keeps_storage_shared() {
    let env1 = Env::new().with("A", "1");
    let mut env2 = env1.clone();

    env2.remove("B");
    assert!(env1.shares_storage_with(&env2));

    env2.remove("A");
    assert!(env2.is_empty());
    assert_eq!(env1.len(), 1);
}

#[test]
fn test_env_from_map_and_iter() {
    let mut map = BTreeMap::new();
    map.insert("KEY2".to_string(), "value2".to_string());
    map.insert("KEY1".to_string(), "value1".to_string());

    let env = Env::from_map(map.clone());
    assert_eq!(env.len(), 2);
    assert_eq!(env.to_map(), map);

    let collected: Vec<_> = env.iter().collect();
    assert_eq!(collected, [("KEY1", "value1"), ("KEY2", "value2")]);

    let from_pairs: Env = [("KEY1", "value1"), ("KEY2", "value2")].into_iter().collect();
    assert_eq!(from_pairs, env);
}

#[test]
fn test_read_env_forwarding() {
    fn lookup<E: ReadEnv>(env: E) -> Result<String, VarError> {
        env.var("K")
    }

    let env = Env::new().with("K", "v");
    assert_eq!(lookup(&env).as_deref(), Ok("v"));
    assert_eq!(lookup(Box::new(env.clone())).as_deref(), Ok("v"));
    assert_eq!(lookup(Arc::new(env)).as_deref(), Ok("v"));
}

#[test]
fn test_system_env_delegation() {
    let std_result = std::env::var("PATH");
    let provider_result = SystemEnv.var("PATH");
    assert_eq!(std_result.is_ok(), provider_result.is_ok());
}

#[test]
fn test_system_env_rejects_malformed_keys() {
    assert_eq!(SystemEnv.var(""), Err(VarError::NotPresent));
    assert_eq!(SystemEnv.var("A=B"), Err(VarError::NotPresent));
    assert_eq!(SystemEnv.var("A\0B"), Err(VarError::NotPresent));
}

#[test]
fn test_current_env() {
    let env = current_env();
    assert!(
        env.get("PATH").is_some() || env.get("Path").is_some(),
        "PATH should exist in current environment"
    );
}
