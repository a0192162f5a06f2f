//! Tests for loading ServerConfig from files

use enrollment_server::config::{LogFormat, ServerConfig};
use std::io::Write;

fn config_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_toml() {
    let file = config_file(
        ".toml",
        r#"
host = "127.0.0.1"
port = 8081
log_level = "debug"
log_format = "json"
seed_data = false
"#,
    );

    let config = ServerConfig::load_from(file.path()).unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8081);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(!config.seed_data);
}

#[test]
fn test_load_from_partial_yaml() {
    let file = config_file(".yaml", "port: 9000\n");

    let config = ServerConfig::load_from(file.path()).unwrap();

    assert_eq!(config.port, 9000);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(config.seed_data);
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ServerConfig::load_from(dir.path().join("absent.toml"));

    assert!(result.is_err());
}

#[test]
fn test_load_from_invalid_port() {
    let file = config_file(".toml", "port = \"not-a-port\"\n");

    assert!(ServerConfig::load_from(file.path()).is_err());
}

fn config_dir(file_name: &str, contents: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("config")).unwrap();
    std::fs::write(dir.path().join("config").join(file_name), contents).unwrap();
    dir
}

#[test]
fn test_load_with_base_reads_config_dir() {
    let dir = config_dir("server.toml", "port = 8200\nseed_data = false\n");

    let config = ServerConfig::load_with_base(dir.path()).unwrap();

    assert_eq!(config.port, 8200);
    assert!(!config.seed_data);
}

#[test]
fn test_load_with_base_without_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = ServerConfig::load_with_base(dir.path()).unwrap();

    assert_eq!(config.port, 3000);
    assert_eq!(config.host, "0.0.0.0");
}

#[test]
fn test_load_with_base_malformed_file_is_an_error() {
    let dir = config_dir("server.toml", "port = [\n");

    assert!(ServerConfig::load_with_base(dir.path()).is_err());
}
