//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_listkit_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("listkit") && path_str.ends_with("config.toml"),
        "Path should contain 'listkit' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_listkit_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("listkit.log"),
        "Default log path should end with 'listkit.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp_config(
        "listkit_test_config.toml",
        r#"
span = 2.5
item_height = 4
item_spacing = 1
line_spacing = 2
page_indicator = "overlay"
default_item_kind = "card"
cache_dir = "/tmp/listkit-cache"
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.span, Some(2.5));
    assert_eq!(config.item_height, Some(4.0));
    assert_eq!(config.item_spacing, Some(1.0));
    assert_eq!(config.line_spacing, Some(2.0));
    assert_eq!(config.page_indicator, Some(PageIndicatorPlacement::Overlay));
    assert_eq!(config.default_item_kind, Some("card".to_string()));
    assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/listkit-cache")));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp_config("listkit_test_invalid.toml", "span = [unclosed");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should return ParseError, got: {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "Unknown fields should be rejected");
}

#[test]
fn config_file_rejects_unknown_page_indicator() {
    let result: Result<ConfigFile, _> = toml::from_str("page_indicator = \"above\"");
    assert!(result.is_err());
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        span: Some(3.0),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();
    assert_eq!(resolved.span, 3.0);
    assert_eq!(resolved.item_height, defaults.item_height);
    assert_eq!(resolved.page_indicator, None);
    assert_eq!(resolved.default_item_kind, defaults.default_item_kind);
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn config_file_log_path_overrides_default() {
    let custom_path = PathBuf::from("/custom/path/to/app.log");
    let config_file = ConfigFile {
        log_file_path: Some(custom_path.clone()),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    assert_eq!(resolved.log_file_path, custom_path);
}

#[test]
fn resolved_layout_carries_all_fields() {
    let resolved = ResolvedConfig {
        span: 2.0,
        item_height: 5.0,
        item_spacing: 1.0,
        line_spacing: 2.0,
        page_indicator: Some(PageIndicatorPlacement::Below),
        ..ResolvedConfig::default()
    };
    let layout = resolved.layout();
    assert_eq!(layout.span, 2.0);
    assert_eq!(layout.item_height, 5.0);
    assert_eq!(layout.item_spacing, 1.0);
    assert_eq!(layout.line_spacing, 2.0);
    assert_eq!(layout.page_indicator, Some(PageIndicatorPlacement::Below));
}

#[test]
fn apply_to_process_seeds_default_layout() {
    defaults::reset();
    let resolved = ResolvedConfig {
        span: 4.0,
        default_item_kind: "tile".to_string(),
        ..ResolvedConfig::default()
    };
    resolved.apply_to_process();

    let current = defaults::current();
    assert_eq!(current.default_layout.span, 4.0);
    assert_eq!(current.default_item_kind, "tile");
    defaults::reset();
}

#[test]
#[serial(listkit_cache_dir)]
fn apply_env_overrides_respects_listkit_cache_dir() {
    env::set_var(CACHE_DIR_ENV, "/tmp/from-env");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(CACHE_DIR_ENV);

    assert_eq!(resolved.cache_dir, Some(PathBuf::from("/tmp/from-env")));
}

#[test]
#[serial(listkit_cache_dir)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    env::remove_var(CACHE_DIR_ENV);
    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(listkit_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let explicit = write_temp_config("listkit_test_explicit.toml", "span = 1.0");
    let from_env = write_temp_config("listkit_test_env_ignored.toml", "span = 9.0");
    env::set_var(CONFIG_ENV, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("explicit config loads")
        .expect("explicit config exists");
    env::remove_var(CONFIG_ENV);

    assert_eq!(config.span, Some(1.0));
    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(listkit_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let from_env = write_temp_config("listkit_test_env.toml", "item_height = 7");
    env::set_var(CONFIG_ENV, &from_env);

    let config = load_config_with_precedence(None)
        .expect("env config loads")
        .expect("env config exists");
    env::remove_var(CONFIG_ENV);

    assert_eq!(config.item_height, Some(7.0));
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(listkit_config)]
fn load_config_with_precedence_rejects_empty_env_path() {
    env::set_var(CONFIG_ENV, "");
    let result = load_config_with_precedence(None);
    env::remove_var(CONFIG_ENV);

    assert!(matches!(result, Err(ConfigError::InvalidPath(_))));
}

#[test]
fn apply_cli_overrides_replaces_span_and_indicator() {
    let resolved = apply_cli_overrides(
        ResolvedConfig::default(),
        Some(2.0),
        Some(PageIndicatorPlacement::Overlay),
    );
    assert_eq!(resolved.span, 2.0);
    assert_eq!(resolved.page_indicator, Some(PageIndicatorPlacement::Overlay));
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
#[serial(listkit_cache_dir)]
fn precedence_chain_file_then_env_then_cli() {
    let file = ConfigFile {
        span: Some(2.0),
        page_indicator: Some(PageIndicatorPlacement::Below),
        cache_dir: Some(PathBuf::from("/tmp/from-file")),
        ..ConfigFile::default()
    };
    env::set_var(CACHE_DIR_ENV, "/tmp/from-env");

    let resolved = apply_cli_overrides(
        apply_env_overrides(merge_config(Some(file))),
        Some(3.0),
        None,
    );
    env::remove_var(CACHE_DIR_ENV);

    assert_eq!(resolved.span, 3.0);
    assert_eq!(resolved.page_indicator, Some(PageIndicatorPlacement::Below));
    assert_eq!(resolved.cache_dir, Some(PathBuf::from("/tmp/from-env")));
}
