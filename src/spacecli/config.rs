//! Keyed configuration sections, loaded once before dispatch.
//!
//! The default provider reads a TOML file next to the executable
//! (`<program>.toml`); [`CONFIG_ENV`] points somewhere else. Tables become
//! sections, keys outside any table land in the unnamed section `""`, and
//! every value is kept as a string. Nested tables flatten into dotted keys.

use crate::error::{CliError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_ENV: &str = "SPACECLI_CONFIG";
const CONFIG_EXT: &str = "toml";

pub type Section = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    sections: BTreeMap<String, Section>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key).map(String::as_str)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Parses TOML text into sections.
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        let table: toml::Table = text.parse()?;
        let mut config = Config::new();
        for (key, value) in table {
            match value {
                toml::Value::Table(section) => flatten(&mut config, &key, "", section),
                other => config.insert("", &key, stringify(other)),
            }
        }
        Ok(config)
    }
}

fn flatten(config: &mut Config, section: &str, prefix: &str, table: toml::Table) {
    for (key, value) in table {
        let key = format!("{}{}", prefix, key);
        match value {
            toml::Value::Table(nested) => flatten(config, section, &format!("{}.", key), nested),
            other => config.insert(section, &key, stringify(other)),
        }
    }
}

fn stringify(value: toml::Value) -> String {
    match value {
        toml::Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Source of configuration for a run.
pub trait ConfigProvider {
    /// Loads configuration from `path`; `Ok(None)` when there is nothing there.
    fn load(&self, path: &Path) -> Result<Option<Config>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlConfig;

impl ConfigProvider for TomlConfig {
    fn load(&self, path: &Path) -> Result<Option<Config>> {
        if !path.is_file() {
            debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let config = Config::from_toml(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        debug!(path = %path.display(), sections = config.sections.len(), "loaded config");
        Ok(Some(config))
    }
}

/// Config file location for a program: [`CONFIG_ENV`] if set, else the
/// program path with a `.toml` extension.
pub fn config_path(script: &str) -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => Path::new(script).with_extension(CONFIG_EXT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
name = "demo"

[database]
host = "localhost"
port = 5432
debug = true

[database.pool]
size = 4
"#;

    #[test]
    fn tables_become_sections() {
        let config = Config::from_toml(SAMPLE).unwrap();
        assert_eq!(config.get("", "name"), Some("demo"));
        assert_eq!(config.get("database", "host"), Some("localhost"));
        assert_eq!(config.get("database", "port"), Some("5432"));
        assert_eq!(config.get("database", "debug"), Some("true"));
        assert_eq!(config.get("database", "pool.size"), Some("4"));
        assert_eq!(config.get("database", "missing"), None);
        assert_eq!(config.section("nope"), None);
    }

    #[test]
    fn empty_text_is_empty_config() {
        assert!(Config::from_toml("").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = TomlConfig.load(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn loads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = TomlConfig.load(file.path()).unwrap().unwrap();
        assert_eq!(config.get("database", "host"), Some("localhost"));
    }

    #[test]
    fn invalid_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[broken\nkey = ").unwrap();

        match TomlConfig.load(file.path()) {
            Err(CliError::Config { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn path_follows_program_name() {
        if std::env::var_os(CONFIG_ENV).is_none() {
            assert_eq!(
                config_path("/usr/local/bin/demo"),
                PathBuf::from("/usr/local/bin/demo.toml")
            );
            assert_eq!(config_path("./demo.exe"), PathBuf::from("./demo.toml"));
        }
    }
}
