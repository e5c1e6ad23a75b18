use std::fs;

use crate::cli_context::{CliContext, CliContextBuilder};
use crate::config::load_config_from;
use crate::engine::{RepeatPolicy, WheelSettings};
use crate::error::WheelError;

#[test]
fn test_cli_context_new() {
    let context = CliContext::new();
    assert!(!context.has_credentials());
    assert_eq!(context.wheel_settings(), WheelSettings::default());
}

#[test]
fn test_cli_context_builder() {
    let context = CliContextBuilder::new()
        .with_store("https://example.supabase.co", "anon-key")
        .build();

    assert!(context.is_ok());
    let mut context = context.unwrap();

    assert!(context.has_credentials());
    let credentials = context.credentials().unwrap();
    assert_eq!(credentials.url, "https://example.supabase.co");
    assert_eq!(credentials.api_key, "anon-key");
}

#[test]
fn test_store_client_is_reused() {
    let mut context = CliContextBuilder::new()
        .with_store("https://example.supabase.co", "anon-key")
        .build()
        .unwrap();

    let first = context.store().unwrap();
    let second = context.store().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(first.base_url(), "https://example.supabase.co");
}

#[test]
fn test_room_slug_prefers_explicit_room() {
    let context = CliContextBuilder::new()
        .with_store("https://example.supabase.co", "anon-key")
        .with_default_room("core")
        .build()
        .unwrap();

    assert_eq!(context.room_slug(Some("platform")).unwrap(), "platform");
    assert_eq!(context.room_slug(None).unwrap(), "core");
}

#[test]
fn test_room_slug_without_default() {
    let context = CliContextBuilder::new()
        .with_store("https://example.supabase.co", "anon-key")
        .build()
        .unwrap();

    match context.room_slug(None) {
        Err(WheelError::InvalidInput(msg)) => assert!(msg.contains("wheel use")),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_spin_settings_are_validated() {
    let settings = WheelSettings {
        min_rotations: 9,
        max_rotations: 3,
        ..WheelSettings::default()
    };
    let context = CliContextBuilder::new()
        .with_store("https://example.supabase.co", "anon-key")
        .with_wheel_settings(settings)
        .build()
        .unwrap();
    assert!(matches!(context.spin_settings(), Err(WheelError::ConfigError(_))));
    assert_eq!(context.wheel_settings(), settings);

    let settings = WheelSettings {
        repeat_policy: RepeatPolicy::ExcludeLastWinner,
        ..WheelSettings::default()
    };
    let context = CliContextBuilder::new()
        .with_store("https://example.supabase.co", "anon-key")
        .with_wheel_settings(settings)
        .build()
        .unwrap();
    assert_eq!(context.spin_settings().unwrap().repeat_policy, RepeatPolicy::ExcludeLastWinner);
}

const SAVED_CONFIG: &str = r#"{
  "store_url": "https://example.supabase.co",
  "api_key": "secret-key",
  "default_room": "core"
}"#;

#[test]
fn test_unparsable_config_is_an_error_and_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let broken = r#"{"store_url": "https://example.supabase.co", "api_key": "secret-key", "wheel": {"max_rotations": "8"}}"#;
    fs::write(&path, broken).unwrap();

    match CliContext::load_from(&path) {
        Err(WheelError::ConfigError(msg)) => assert!(msg.contains(&path.display().to_string())),
        Err(other) => panic!("Expected ConfigError, got {:?}", other),
        Ok(_) => panic!("Expected ConfigError, got a context"),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), broken);
}

#[test]
fn test_saving_keeps_store_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, SAVED_CONFIG).unwrap();

    let mut context = CliContext::load_from(&path).unwrap();
    context.set_default_room("platform").unwrap();

    let saved = load_config_from(&path).unwrap();
    assert_eq!(saved.default_room.as_deref(), Some("platform"));
    assert_eq!(saved.store_url.as_deref(), Some("https://example.supabase.co"));
    assert_eq!(saved.api_key.as_deref(), Some("secret-key"));
}

#[test]
fn test_bad_wheel_section_only_blocks_spins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"api_key": "secret-key", "wheel": {"min_rotations": 9, "max_rotations": 3}}"#,
    )
    .unwrap();

    let context = CliContext::load_from(&path).unwrap();
    assert_eq!(context.config().api_key.as_deref(), Some("secret-key"));
    assert_eq!(context.wheel_settings().min_rotations, 9);
    assert!(matches!(context.spin_settings(), Err(WheelError::ConfigError(_))));
}
