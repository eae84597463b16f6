//! Configuration resolution tests
//!
//! - Priority order: overrides > config file > compiled defaults
//! - Connection string composition
//! - TOML parsing and missing-file handling

use showbill_common::config::{
    CompiledDefaults, ConfigOverrides, LoggingConfig, ServiceConfig, TomlConfig, DEFAULT_PORT,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn defaults() -> CompiledDefaults {
    CompiledDefaults {
        host: "0.0.0.0".into(),
        port: DEFAULT_PORT,
        db_dir: PathBuf::from("/var/lib/showbill"),
        db_name: "showbill".into(),
        log_level: "info".into(),
    }
}

#[test]
fn test_compiled_defaults_for_current_platform() {
    let defaults = CompiledDefaults::for_current_platform();
    assert_eq!(defaults.port, 5000);
    assert_eq!(defaults.db_name, "showbill");
    assert_eq!(defaults.log_level, "info");
    assert!(!defaults.db_dir.as_os_str().is_empty());
}

#[test]
fn test_defaults_only() {
    let config =
        ServiceConfig::resolve(ConfigOverrides::default(), TomlConfig::default(), defaults())
            .unwrap();

    assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    assert_eq!(
        config.database.connection_url(),
        "sqlite:///var/lib/showbill/showbill.db"
    );
    assert_eq!(config.log_level, "info");
    assert!(config.log_file.is_none());
}

#[test]
fn test_file_beats_defaults_and_overrides_beat_file() {
    let file = TomlConfig {
        host: Some("127.0.0.1".into()),
        port: Some(8080),
        db_name: Some("fromfile".into()),
        logging: LoggingConfig {
            level: Some("debug".into()),
            file: Some(PathBuf::from("/tmp/showbill.log")),
        },
        ..Default::default()
    };
    let overrides = ConfigOverrides {
        port: Some(9000),
        db_dir: Some(PathBuf::from("/srv/data")),
        ..Default::default()
    };

    let config = ServiceConfig::resolve(overrides, file, defaults()).unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9000);
    assert_eq!(config.database.database_path(), PathBuf::from("/srv/data/fromfile.db"));
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/showbill.log")));
}

#[test]
fn test_full_database_url_wins() {
    let overrides = ConfigOverrides {
        database_url: Some("sqlite://relative.db".into()),
        db_name: Some("ignored".into()),
        ..Default::default()
    };

    let config = ServiceConfig::resolve(overrides, TomlConfig::default(), defaults()).unwrap();
    assert_eq!(config.database.connection_url(), "sqlite://relative.db");
}

#[test]
fn test_invalid_database_name_rejected() {
    for name in ["", "  ", "../escape", "a\\b"] {
        let overrides = ConfigOverrides {
            db_name: Some(name.into()),
            ..Default::default()
        };
        let result = ServiceConfig::resolve(overrides, TomlConfig::default(), defaults());
        assert!(result.is_err(), "name {:?} should be rejected", name);
    }
}

#[test]
fn test_toml_parsing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
host = "127.0.0.1"
port = 5725
db_dir = "/data"

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let config = TomlConfig::load(&path).unwrap();
    assert_eq!(config.host.as_deref(), Some("127.0.0.1"));
    assert_eq!(config.port, Some(5725));
    assert_eq!(config.db_dir, Some(PathBuf::from("/data")));
    assert_eq!(config.db_name, None);
    assert_eq!(config.logging.level.as_deref(), Some("warn"));
}

#[test]
fn test_missing_toml_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = TomlConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TomlConfig::default());
}

#[test]
fn test_malformed_toml_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"not a number\"").unwrap();

    let err = TomlConfig::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"), "got {}", err);
}
