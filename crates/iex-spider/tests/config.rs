use iex_spider::api::Host;
use iex_spider::config;
use iex_spider::Error;
use std::path::PathBuf;

fn settings(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn reads_token_from_iexcloud_section() {
    let (_dir, path) = settings("[iexcloud]\napikey = pk_0123456789abcdef\n");
    let credential = config::load(&path).unwrap();
    assert_eq!(credential.token(), "pk_0123456789abcdef");
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = config::load(dir.path().join("config.ini")).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn missing_key_is_a_config_error() {
    let (_dir, path) = settings("[iexcloud]\nother = value\n");
    assert!(matches!(config::load(&path), Err(Error::Config(_))));

    let (_dir, path) = settings("[provider]\napikey = pk_0123456789abcdef\n");
    assert!(matches!(config::load(&path), Err(Error::Config(_))));
}

#[test]
fn empty_token_routes_to_sandbox() {
    let (_dir, path) = settings("[iexcloud]\napikey =\n");
    let credential = config::load(&path).unwrap();
    assert_eq!(credential.token(), "");
    assert_eq!(Host::for_token(credential.token()), Host::Sandbox);
}
