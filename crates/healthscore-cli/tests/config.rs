use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use healthscore_cli::config::{HealthscoreConfig, LogFormat, load_config, parse_config};
use healthscore_cli::logging::with_startup_logging;

#[test]
fn empty_object_gets_defaults() {
    let config = parse_config("{}").expect("parses");
    assert_eq!(config.config_version, 1);
    assert_eq!(config.definitions_dir, None);
    assert!(config.include_builtin);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn v0_config_is_migrated() {
    let config = parse_config(r#"{"assessments_dir": "/srv/defs", "log_format": "json"}"#)
        .expect("parses");
    assert_eq!(config.config_version, 1);
    assert_eq!(config.definitions_dir, Some(PathBuf::from("/srv/defs")));
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn current_config_is_read_as_is() {
    let config = parse_config(
        r#"{"config_version": 1, "definitions_dir": "defs", "include_builtin": false}"#,
    )
    .expect("parses");
    assert_eq!(config.definitions_dir, Some(PathBuf::from("defs")));
    assert!(!config.include_builtin);
}

#[test]
fn newer_config_is_refused() {
    let err = parse_config(r#"{"config_version": 99}"#).expect_err("too new");
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_refused() {
    assert!(parse_config("[1, 2]").is_err());
}

#[test]
fn explicit_config_file_is_loaded() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"config_version": 1, "log_format": "json"}"#).expect("write");
    assert_eq!(load_config(Some(&path)).expect("loads").log_format, LogFormat::Json);
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert!(load_config(Some(&dir.path().join("absent.json"))).is_err());
}

#[test]
fn flag_beats_environment_beats_file() {
    let config = HealthscoreConfig {
        definitions_dir: Some(PathBuf::from("from-file")),
        ..HealthscoreConfig::default()
    };

    assert_eq!(
        config.definitions_dir(Some(Path::new("from-flag")), Some("from-env")),
        Some(PathBuf::from("from-flag"))
    );
    assert_eq!(
        config.definitions_dir(None, Some("from-env")),
        Some(PathBuf::from("from-env"))
    );
    assert_eq!(
        config.definitions_dir(None, Some("")),
        Some(PathBuf::from("from-file"))
    );
    assert_eq!(
        HealthscoreConfig::default().definitions_dir(None, None),
        None
    );
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn migration_is_logged_before_the_configured_subscriber_exists() {
    let captured = Captured::default();
    let writer = captured.clone();

    let config = with_startup_logging(move || writer.clone(), || {
        parse_config(r#"{"assessments_dir": "defs"}"#)
    })
    .expect("parses");
    assert_eq!(config.definitions_dir, Some(PathBuf::from("defs")));

    let logged = String::from_utf8(captured.0.lock().expect("lock").clone()).expect("utf-8");
    assert!(logged.contains("migrated config v0"), "{logged}");
}
