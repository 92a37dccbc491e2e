use billstack::error::ConfigError;
use billstack::{ChartConfig, Profile};
use std::fs;
use tempfile::tempdir;

#[test]
fn partial_json_keeps_classic_defaults() {
    let cfg =
        ChartConfig::from_json_str(r#"{ "vertical_step": 8, "shadow": { "enabled": false } }"#)
            .unwrap();
    assert_eq!(cfg.vertical_step, 8);
    assert!(!cfg.shadow.enabled);
    assert_eq!(cfg.shadow.max_alpha, 40);
    assert_eq!(cfg.sprite_width, Profile::Classic.config().sprite_width);
}

#[test]
fn config_round_trips_through_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.json");
    let bold = Profile::Bold.config();
    fs::write(&path, serde_json::to_string_pretty(&bold).unwrap()).unwrap();
    assert_eq!(ChartConfig::from_json_file(&path).unwrap(), bold);
}

#[test]
fn invalid_values_are_rejected() {
    let err = ChartConfig::from_json_str(r#"{ "sprite_height": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = ChartConfig::from_json_str(r#"{ "sprite_width": "wide" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn missing_file_names_the_path() {
    let err = ChartConfig::from_json_file("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
