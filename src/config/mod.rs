//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Display name for sessions opened without an explicit name.
    #[serde(default = "default_session_name")]
    pub session_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            session_name: default_session_name(),
        }
    }
}

fn default_port() -> u16 {
    8098
}

fn default_session_name() -> String {
    "listener".to_string()
}

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "wavescout.json";

/// Get config directory (WAVESCOUT_CONFIG_DIR, XDG, or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WAVESCOUT_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/wavescout");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("wavescout");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/wavescout");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("wavescout");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

/// Load configuration: config file first, then env var overrides.
pub fn load_config() -> Result<Config> {
    let path = get_config_dir().join(CONFIG_FILE);
    let mut config = if path.exists() {
        let raw = std::fs::read_to_string(&path)?;
        serde_json::from_str(&raw)?
    } else {
        Config::default()
    };

    if let Ok(port) = std::env::var("PORT") {
        match port.parse() {
            Ok(port) => config.port = port,
            Err(_) => tracing::warn!("Ignoring unparseable PORT value: {}", port),
        }
    }

    if let Ok(name) = std::env::var("WAVESCOUT_SESSION_NAME") {
        if !name.is_empty() {
            config.session_name = name;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn defaults_without_file_or_env() {
        env::set_var("WAVESCOUT_CONFIG_DIR", "/tmp/wavescout-test-nonexistent");
        env::remove_var("PORT");
        env::remove_var("WAVESCOUT_SESSION_NAME");

        let config = load_config().expect("config should load");

        env::remove_var("WAVESCOUT_CONFIG_DIR");

        assert_eq!(config.port, 8098);
        assert_eq!(config.session_name, "listener");
    }

    #[test]
    #[serial]
    fn config_file_supplies_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"port": 9000, "session_name": "dj"}"#,
        )
        .expect("write config");
        env::set_var("WAVESCOUT_CONFIG_DIR", dir.path());
        env::remove_var("PORT");
        env::remove_var("WAVESCOUT_SESSION_NAME");

        let config = load_config().expect("config should load");

        env::remove_var("WAVESCOUT_CONFIG_DIR");

        assert_eq!(config.port, 9000);
        assert_eq!(config.session_name, "dj");
    }

    #[test]
    #[serial]
    fn env_overrides_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"port": 9000}"#)
            .expect("write config");
        env::set_var("WAVESCOUT_CONFIG_DIR", dir.path());
        env::set_var("PORT", "9100");
        env::set_var("WAVESCOUT_SESSION_NAME", "selector");

        let config = load_config().expect("config should load");

        env::remove_var("WAVESCOUT_CONFIG_DIR");
        env::remove_var("PORT");
        env::remove_var("WAVESCOUT_SESSION_NAME");

        assert_eq!(config.port, 9100);
        assert_eq!(config.session_name, "selector");
    }

    #[test]
    #[serial]
    fn unparseable_port_is_ignored() {
        env::set_var("WAVESCOUT_CONFIG_DIR", "/tmp/wavescout-test-nonexistent");
        env::set_var("PORT", "not-a-port");

        let config = load_config().expect("config should load");

        env::remove_var("WAVESCOUT_CONFIG_DIR");
        env::remove_var("PORT");

        assert_eq!(config.port, 8098);
    }
}
