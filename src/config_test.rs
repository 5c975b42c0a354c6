//! 接続設定解決のユニットテスト

use crate::config::{FileConfig, Settings, DEFAULT_BASE_URL};
use crate::error::BhqError;
use serial_test::serial;
use std::time::Duration;

fn clear_env() {
    for key in ["BHQ_URL", "BHQ_TOKEN_ID", "BHQ_TOKEN_KEY", "BHQ_RATE_LIMIT"] {
        std::env::remove_var(key);
    }
}

fn file_config(url: Option<&str>, token_id: Option<&str>, token_key: Option<&str>) -> FileConfig {
    FileConfig {
        url: url.map(str::to_string),
        token_id: token_id.map(str::to_string),
        token_key: token_key.map(str::to_string),
        rate_limit: None,
    }
}

#[test]
#[serial]
fn flags_take_highest_priority() {
    clear_env();
    std::env::set_var("BHQ_URL", "http://env:1234");

    let file = file_config(Some("http://file:5678"), Some("file-id"), Some("file-key"));
    let settings = Settings::resolve(
        Some("http://flag:9999".to_string()),
        Some("flag-id".to_string()),
        Some("flag-key".to_string()),
        Some(1.5),
        &file,
    )
    .unwrap();

    assert_eq!(settings.base_url, "http://flag:9999");
    assert_eq!(settings.credentials.token_id, "flag-id");
    assert_eq!(settings.credentials.token_key, "flag-key");
    assert_eq!(settings.rate_limit, Duration::from_secs_f64(1.5));

    clear_env();
}

#[test]
#[serial]
fn env_beats_config_file() {
    clear_env();
    std::env::set_var("BHQ_URL", "http://env:1234");
    std::env::set_var("BHQ_TOKEN_ID", "env-id");
    std::env::set_var("BHQ_TOKEN_KEY", "env-key");
    std::env::set_var("BHQ_RATE_LIMIT", "2");

    let mut file = file_config(Some("http://file:5678"), Some("file-id"), Some("file-key"));
    file.rate_limit = Some(9.0);

    let settings = Settings::resolve(None, None, None, None, &file).unwrap();

    assert_eq!(settings.base_url, "http://env:1234");
    assert_eq!(settings.credentials.token_id, "env-id");
    assert_eq!(settings.credentials.token_key, "env-key");
    assert_eq!(settings.rate_limit, Duration::from_secs(2));

    clear_env();
}

#[test]
#[serial]
fn config_file_beats_default() {
    clear_env();

    let mut file = file_config(Some("http://file:5678"), Some("file-id"), Some("file-key"));
    file.rate_limit = Some(0.1);

    let settings = Settings::resolve(None, None, None, None, &file).unwrap();

    assert_eq!(settings.base_url, "http://file:5678");
    assert_eq!(settings.rate_limit, Duration::from_secs_f64(0.1));
}

#[test]
#[serial]
fn defaults_apply_when_nothing_is_configured() {
    clear_env();

    let file = file_config(None, Some("id"), Some("key"));
    let settings = Settings::resolve(None, None, None, None, &file).unwrap();

    assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    assert_eq!(settings.rate_limit, Duration::from_millis(500));
}

#[test]
#[serial]
fn missing_token_id_is_config_error() {
    clear_env();

    let file = file_config(None, None, Some("key"));
    let err = Settings::resolve(None, None, None, None, &file).unwrap_err();

    assert!(matches!(err, BhqError::Config(_)));
    assert!(err.to_string().contains("token ID"));
}

#[test]
#[serial]
fn missing_token_key_is_config_error() {
    clear_env();

    let file = file_config(None, Some("id"), None);
    let err = Settings::resolve(None, None, None, None, &file).unwrap_err();

    assert!(matches!(err, BhqError::Config(_)));
    assert!(err.to_string().contains("token key"));
}

#[test]
#[serial]
fn negative_rate_limit_is_rejected() {
    clear_env();

    let file = file_config(None, Some("id"), Some("key"));
    let err = Settings::resolve(None, None, None, Some(-1.0), &file).unwrap_err();

    assert!(matches!(err, BhqError::Config(_)));
}

#[test]
#[serial]
fn unparseable_rate_limit_env_is_config_error() {
    clear_env();
    std::env::set_var("BHQ_RATE_LIMIT", "half a second");

    let file = file_config(None, Some("id"), Some("key"));
    let err = Settings::resolve(None, None, None, None, &file).unwrap_err();

    assert!(matches!(err, BhqError::Config(_)));

    clear_env();
}

#[test]
#[serial]
fn trailing_slash_is_stripped_from_url() {
    clear_env();

    let file = file_config(None, Some("id"), Some("key"));
    let settings = Settings::resolve(
        Some("http://bloodhound:8080/".to_string()),
        None,
        None,
        None,
        &file,
    )
    .unwrap();

    assert_eq!(settings.base_url, "http://bloodhound:8080");
}

#[test]
fn config_file_parses_toml() {
    let raw = r#"
url = "http://bloodhound:8080"
token_id = "abc"
token_key = "def"
rate_limit = 1.0
"#;
    let file: FileConfig = toml::from_str(raw).unwrap();

    assert_eq!(file.url.as_deref(), Some("http://bloodhound:8080"));
    assert_eq!(file.token_id.as_deref(), Some("abc"));
    assert_eq!(file.token_key.as_deref(), Some("def"));
    assert_eq!(file.rate_limit, Some(1.0));
}

#[test]
fn partial_config_file_is_accepted() {
    let file: FileConfig = toml::from_str("token_id = \"abc\"").unwrap();

    assert_eq!(file.token_id.as_deref(), Some("abc"));
    assert!(file.url.is_none());
    assert!(file.token_key.is_none());
    assert!(file.rate_limit.is_none());
}
