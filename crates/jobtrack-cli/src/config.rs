// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_VERSION: i64 = 1;
const APP_NAME: &str = "jobtrack";
const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT: &str = "10s";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: Server::default(),
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Some(DEFAULT_TIMEOUT.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub show_stats: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            show_stats: Some(true),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("JOBTRACK_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set JOBTRACK_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [server] and [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(base_url) = &self.server.base_url
            && base_url.trim().is_empty()
        {
            bail!(
                "server.base_url in {} must not be empty; remove the key to use the default",
                path.display()
            );
        }

        if let Some(timeout) = &self.server.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "server.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        Ok(())
    }

    /// Resolved server URL. An explicit [server] entry wins over the
    /// JOBTRACK_SERVER_URL environment variable.
    pub fn server_url(&self) -> String {
        if let Some(url) = &self.server.base_url {
            return url.trim_end_matches('/').to_owned();
        }
        if let Ok(url) = env::var("JOBTRACK_SERVER_URL")
            && !url.trim().is_empty()
        {
            return url.trim_end_matches('/').to_owned();
        }
        DEFAULT_BASE_URL.to_owned()
    }

    pub fn timeout(&self) -> Result<Duration> {
        parse_duration(self.server.timeout.as_deref().unwrap_or(DEFAULT_TIMEOUT))
    }

    pub fn show_stats(&self) -> bool {
        self.ui.show_stats.unwrap_or(true)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# jobtrack config\n# Place this file at: {}\n\nversion = 1\n\n[server]\n# Where the tracker server listens. JOBTRACK_SERVER_URL overrides the default\n# but not an explicit value here.\nbase_url = \"{}\"\ntimeout = \"{}\"\n\n[ui]\nshow_stats = true\n",
            path.display(),
            DEFAULT_BASE_URL,
            DEFAULT_TIMEOUT,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 5s)")
}

#[cfg(test)]
mod tests {
    use super::{Config, parse_duration};
    use anyhow::Result;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("JOBTRACK_SERVER_URL");
        }
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert_eq!(config.server_url(), "http://localhost:5000");
        assert_eq!(config.timeout()?, Duration::from_secs(10));
        assert!(config.show_stats());
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[server]\nbase_url = \"http://localhost:5000\"\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[server] and [ui]"));
        Ok(())
    }

    #[test]
    fn versioned_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[server]\nbase_url = \"http://tracker.local:8080\"\ntimeout = \"2s\"\n[ui]\nshow_stats = false\n",
        )?;

        let config = Config::load(&path)?;
        assert_eq!(config.server_url(), "http://tracker.local:8080");
        assert_eq!(config.timeout()?, Duration::from_secs(2));
        assert!(!config.show_stats());
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("JOBTRACK_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("JOBTRACK_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_config_toml_suffix_when_no_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("JOBTRACK_CONFIG_PATH");
        }
        let path = Config::default_path()?;
        assert!(path.ends_with("config.toml"));
        Ok(())
    }

    #[test]
    fn server_url_prefers_config_over_env_override() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) =
            write_config("version = 1\n[server]\nbase_url = \"http://from-config:5000\"\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("JOBTRACK_SERVER_URL", "http://from-env:5000");
        }
        let config = Config::load(&path)?;
        let resolved = config.server_url();
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("JOBTRACK_SERVER_URL");
        }
        assert_eq!(resolved, "http://from-config:5000");
        Ok(())
    }

    #[test]
    fn server_url_uses_env_override_when_config_is_silent() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("JOBTRACK_SERVER_URL", "http://from-env:5000/");
        }
        let config = Config::load(&path)?;
        let resolved = config.server_url();
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("JOBTRACK_SERVER_URL");
        }
        assert_eq!(resolved, "http://from-env:5000");
        Ok(())
    }

    #[test]
    fn server_url_trims_trailing_slashes() -> Result<()> {
        let (_temp, path) =
            write_config("version = 1\n[server]\nbase_url = \"http://tracker.local:8080///\"\n")?;
        let config = Config::load(&path)?;
        assert_eq!(config.server_url(), "http://tracker.local:8080");
        Ok(())
    }

    #[test]
    fn empty_base_url_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[server]\nbase_url = \"\"\n")?;
        let error = Config::load(&path).expect_err("empty base_url should fail");
        assert!(error.to_string().contains("must not be empty"));
        Ok(())
    }

    #[test]
    fn timeout_parses_ms_seconds_and_minutes() -> Result<()> {
        assert_eq!(parse_duration("500ms")?, Duration::from_millis(500));
        assert_eq!(parse_duration("5s")?, Duration::from_secs(5));
        assert_eq!(parse_duration("2m")?, Duration::from_secs(120));
        Ok(())
    }

    #[test]
    fn timeout_rejects_invalid_duration() {
        let error = parse_duration("oops").expect_err("invalid duration should fail");
        let message = error.to_string();
        assert!(
            message.contains("invalid duration") || message.contains("invalid timeout duration"),
            "unexpected message: {message}"
        );
    }

    #[test]
    fn timeout_rejects_non_positive_values_in_config() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[server]\ntimeout = \"0s\"\n")?;
        let error = Config::load(&path).expect_err("zero timeout should fail");
        assert!(error.to_string().contains("must be positive"));
        Ok(())
    }

    #[test]
    fn example_config_includes_required_sections() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[server]"));
        assert!(example.contains("[ui]"));
        assert!(example.contains("show_stats = true"));
        Ok(())
    }
}
