use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use client_core::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "directory.toml";

/// Development overrides for the data client and logging. The batch size is
/// not among them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    endpoint: Option<String>,
    timeout_ms: Option<u64>,
    log_filter: Option<String>,
}

impl Settings {
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let endpoint = Url::parse(&self.endpoint)
            .with_context(|| format!("invalid endpoint url '{}'", self.endpoint))?;
        if self.timeout_ms == 0 {
            bail!("timeout_ms must be greater than zero");
        }
        Ok(ClientConfig::new(endpoint).with_timeout(Duration::from_millis(self.timeout_ms)))
    }

    fn apply_file(&mut self, file: FileSettings) {
        if let Some(v) = file.endpoint {
            self.endpoint = v;
        }
        if let Some(v) = file.timeout_ms {
            self.timeout_ms = v;
        }
        if let Some(v) = file.log_filter {
            self.log_filter = v;
        }
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(v) = var("APP__ENDPOINT") {
            self.endpoint = v;
        }
        if let Some(v) = var("APP__TIMEOUT_MS") {
            self.timeout_ms = v
                .trim()
                .parse()
                .with_context(|| format!("APP__TIMEOUT_MS is not a number: '{v}'"))?;
        }
        if let Some(v) = var("APP__LOG_FILTER") {
            self.log_filter = v;
        }
        Ok(())
    }
}

/// Defaults, then the config file, then `APP__*` environment variables.
///
/// An explicitly named file must exist; the default `directory.toml` is
/// optional.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with(config_path, |key| std::env::var(key).ok())
}

fn load_settings_with(
    config_path: Option<&Path>,
    var: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match config_path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    if let Some(file) = read_file_settings(&path, required)? {
        settings.apply_file(file);
    }

    settings.apply_env(var)?;
    Ok(settings)
}

fn read_file_settings(path: &Path, required: bool) -> anyhow::Result<Option<FileSettings>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    };
    let file = toml::from_str::<FileSettings>(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    Ok(Some(file))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
