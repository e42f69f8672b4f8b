//! Tests for configuration loading.

use cube_draft::{API_URL_ENV, BotStrategy, DEFAULT_API_URL, DraftConfig};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = DraftConfig::default();
    assert_eq!(config.api_url(), DEFAULT_API_URL);
    assert_eq!(*config.num_bots(), 7);
    assert_eq!(*config.bot_strategy(), BotStrategy::Random);
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_load_full_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
api_url = "http://cube.local:8080/api"
num_bots = 3
bot_strategy = "scored"
request_timeout_secs = 5
seed = 42
"#
    )
    .expect("write config");

    let config = DraftConfig::from_file(file.path()).expect("config parses");
    assert_eq!(config.api_url(), "http://cube.local:8080/api");
    assert_eq!(*config.num_bots(), 3);
    assert_eq!(*config.bot_strategy(), BotStrategy::Scored);
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_partial_file_uses_defaults() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "num_bots = 5").expect("write config");

    let config = DraftConfig::from_file(file.path()).expect("config parses");
    assert_eq!(*config.num_bots(), 5);
    assert_eq!(config.api_url(), DEFAULT_API_URL);
    assert_eq!(*config.bot_strategy(), BotStrategy::Random);
}

#[test]
fn test_invalid_file_is_error() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "num_bots = \"many\"").expect("write config");

    let err = DraftConfig::from_file(file.path()).expect_err("invalid config");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = DraftConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, DraftConfig::default());
}

#[test]
fn test_env_and_overrides() {
    // SAFETY: the only test in this binary touching the environment.
    unsafe { std::env::set_var(API_URL_ENV, "http://env.example/api") };
    let config = DraftConfig::default().apply_env();
    unsafe { std::env::remove_var(API_URL_ENV) };
    assert_eq!(config.api_url(), "http://env.example/api");

    let config = config
        .with_api_url("http://cli.example/api")
        .with_num_bots(3)
        .with_bot_strategy(BotStrategy::Scored)
        .with_seed(9);
    assert_eq!(config.api_url(), "http://cli.example/api");
    assert_eq!(*config.num_bots(), 3);
    assert_eq!(*config.bot_strategy(), BotStrategy::Scored);
    assert_eq!(*config.seed(), Some(9));
}
