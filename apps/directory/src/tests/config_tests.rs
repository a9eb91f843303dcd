use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("user_directory_{name}_{suffix}.toml"));
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn defaults_match_client_constants() {
    let settings = Settings::default();
    assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(settings.timeout_ms, 10_000);
    assert_eq!(settings.log_filter, "info");

    let client = settings.client_config().expect("client config");
    assert_eq!(client, ClientConfig::default());
}

#[test]
fn missing_default_file_is_not_an_error() {
    let missing = env::temp_dir().join("user_directory_definitely_missing.toml");
    assert!(read_file_settings(&missing, false).expect("optional").is_none());
}

#[test]
fn missing_explicit_file_is_an_error() {
    let missing = env::temp_dir().join("user_directory_definitely_missing.toml");
    let err =
        load_settings_with(Some(missing.as_path()), no_env).expect_err("explicit file required");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn file_values_override_defaults() {
    let path = temp_config(
        "file_override",
        "endpoint = \"http://127.0.0.1:9000/users\"\ntimeout_ms = 2500\n",
    );

    let settings = load_settings_with(Some(path.as_path()), no_env).expect("load");
    assert_eq!(settings.endpoint, "http://127.0.0.1:9000/users");
    assert_eq!(settings.timeout_ms, 2500);
    assert_eq!(settings.log_filter, "info");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn env_overrides_file() {
    let path = temp_config("env_override", "timeout_ms = 2500\nlog_filter = \"warn\"\n");
    let vars = HashMap::from([
        ("APP__TIMEOUT_MS", "750"),
        ("APP__LOG_FILTER", "client_core=debug"),
    ]);

    let settings = load_settings_with(Some(path.as_path()), |key| {
        vars.get(key).map(|v| v.to_string())
    })
    .expect("load");
    assert_eq!(settings.timeout_ms, 750);
    assert_eq!(settings.log_filter, "client_core=debug");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn unknown_file_keys_are_rejected() {
    let path = temp_config("unknown_key", "size = 10\n");
    let err =
        load_settings_with(Some(path.as_path()), no_env).expect_err("size is not configurable");
    assert!(err.to_string().contains("failed to parse config file"));
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn non_numeric_timeout_env_is_an_error() {
    let mut settings = Settings::default();
    let err = settings
        .apply_env(|key| (key == "APP__TIMEOUT_MS").then(|| "soon".to_string()))
        .expect_err("must reject");
    assert!(err.to_string().contains("APP__TIMEOUT_MS"));
}

#[test]
fn client_config_rejects_bad_endpoint_and_zero_timeout() {
    let bad_url = Settings {
        endpoint: "not a url".into(),
        ..Settings::default()
    };
    assert!(bad_url.client_config().is_err());

    let zero_timeout = Settings {
        timeout_ms: 0,
        ..Settings::default()
    };
    assert!(zero_timeout.client_config().is_err());
}
