#![allow(clippy::unwrap_used, clippy::expect_used)]

use screendiff_core::logging_facility::Profile;
use screendiff_core::{EnvironmentConfig, ExErrorKind, Side};
use std::collections::HashMap;
use std::path::PathBuf;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn required() -> Vec<(&'static str, &'static str)> {
    vec![
        ("SCREENDIFF_CURRENT_MAIN_APP_ID", "101"),
        ("SCREENDIFF_CURRENT_SUB_APP_ID", "102"),
        ("SCREENDIFF_PREVIEW_MAIN_APP_ID", "201"),
        ("SCREENDIFF_PREVIEW_SUB_APP_ID", "202"),
    ]
}

#[test]
fn test_defaults_apply() {
    let config = EnvironmentConfig::from_vars(vars(&required())).unwrap();
    assert_eq!(config.current_main_app_id, 101);
    assert_eq!(config.preview_sub_app_id, 202);
    assert!(config.ignore_script_contents);
    assert_eq!(config.artifact_root, PathBuf::from("out"));
    assert_eq!(config.log_profile, Profile::Development);
}

#[test]
fn test_overrides_apply() {
    let mut pairs = required();
    pairs.push(("SCREENDIFF_IGNORE_SCRIPT_CONTENTS", "false"));
    pairs.push(("SCREENDIFF_ARTIFACT_ROOT", "/var/screendiff"));
    pairs.push(("SCREENDIFF_LOG_PROFILE", "production"));
    let config = EnvironmentConfig::from_vars(vars(&pairs)).unwrap();
    assert!(!config.ignore_script_contents);
    assert_eq!(config.artifact_root, PathBuf::from("/var/screendiff"));
    assert_eq!(config.log_profile, Profile::Production);
}

#[test]
fn test_missing_app_id_is_invalid_config() {
    let pairs: Vec<_> = required()
        .into_iter()
        .filter(|(k, _)| *k != "SCREENDIFF_PREVIEW_MAIN_APP_ID")
        .collect();
    let err = EnvironmentConfig::from_vars(vars(&pairs)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    assert_eq!(err.key(), Some("preview_main_app_id"));
}

#[test]
fn test_non_numeric_app_id_is_invalid_config() {
    let mut pairs = required();
    pairs[0] = ("SCREENDIFF_CURRENT_MAIN_APP_ID", "main");
    let err = EnvironmentConfig::from_vars(vars(&pairs)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
}

#[test]
fn test_zero_app_id_is_rejected() {
    let mut pairs = required();
    pairs[1] = ("SCREENDIFF_CURRENT_SUB_APP_ID", "0");
    let err = EnvironmentConfig::from_vars(vars(&pairs)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    assert!(err.message().contains("current_sub_app_id"));
}

#[test]
fn test_context_per_side() {
    let config = EnvironmentConfig::from_vars(vars(&required())).unwrap();

    let current = config.context(Side::Current);
    assert_eq!(current.side(), Side::Current);
    assert_eq!((current.main_app_id(), current.sub_app_id()), (101, 102));

    let preview = config.context(Side::Preview);
    assert_eq!((preview.main_app_id(), preview.sub_app_id()), (201, 202));
    assert!(preview.ignore_script_contents());
}
