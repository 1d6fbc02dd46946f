//! Configuration management for gitbind
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Environment variables (GITBIND_*)
//! 2. Config file (~/.config/gitbind/config.toml)
//! 3. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::message::DEFAULT_COMMENT_CHAR;
use crate::{Error, Result};

/// Commit-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CommitConfig {
    /// Clean up commit messages before committing
    pub cleanup: bool,

    /// Drop comment lines during cleanup
    pub strip_comments: bool,

    /// Comment marker used during cleanup
    pub comment_char: char,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            cleanup: false,
            strip_comments: true,
            comment_char: DEFAULT_COMMENT_CHAR,
        }
    }
}

/// A single revision walk ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Topological,
    Time,
    Reverse,
}

impl std::str::FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "topological" => Ok(SortKey::Topological),
            "time" => Ok(SortKey::Time),
            "reverse" => Ok(SortKey::Reverse),
            other => Err(Error::Config(format!("Unknown sort order: {}", other))),
        }
    }
}

/// Revision walk configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Orderings combined for every walk; empty uses libgit2's default
    pub sorting: Vec<SortKey>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub commit: CommitConfig,
    pub walker: WalkerConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/gitbind/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gitbind").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - GITBIND_CLEANUP: `true`/`false`, clean up commit messages
    /// - GITBIND_COMMENT_CHAR: comment marker for cleanup
    /// - GITBIND_SORT: comma separated walk orderings, e.g. `time,reverse`
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(cleanup) = var("GITBIND_CLEANUP") {
            self.commit.cleanup = cleanup
                .parse()
                .map_err(|_| Error::Config(format!("GITBIND_CLEANUP must be true or false, got {:?}", cleanup)))?;
        }

        if let Some(comment_char) = var("GITBIND_COMMENT_CHAR") {
            let mut chars = comment_char.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => self.commit.comment_char = c,
                _ => {
                    return Err(Error::Config(format!(
                        "GITBIND_COMMENT_CHAR must be a single character, got {:?}",
                        comment_char
                    )))
                }
            }
        }

        if let Some(sort) = var("GITBIND_SORT") {
            self.walker.sorting = sort
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(str::parse)
                .collect::<Result<_>>()?;
        }

        Ok(self)
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: env > config file > defaults
    pub fn load_with_overrides() -> Result<Self> {
        Self::load()?.with_env_overrides()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.commit.cleanup);
        assert_eq!(config.commit.comment_char, '#');
        assert!(config.walker.sorting.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[commit]
cleanup = true
comment_char = ";"

[walker]
sorting = ["topological", "reverse"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.commit.cleanup);
        assert!(config.commit.strip_comments);
        assert_eq!(config.commit.comment_char, ';');
        assert_eq!(
            config.walker.sorting,
            vec![SortKey::Topological, SortKey::Reverse]
        );
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[walker]
sorting = ["time"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.commit, CommitConfig::default());
        assert_eq!(config.walker.sorting, vec![SortKey::Time]);
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[commit]\ncleanup = true\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert!(config.commit.cleanup);
    }

    #[test]
    fn test_load_from_bad_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[commit\n").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::load_from_file(&temp.path().join("missing.toml")),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default()
            .with_overrides(vars(&[
                ("GITBIND_CLEANUP", "true"),
                ("GITBIND_COMMENT_CHAR", "!"),
                ("GITBIND_SORT", "time, reverse"),
            ]))
            .unwrap();

        assert!(config.commit.cleanup);
        assert_eq!(config.commit.comment_char, '!');
        assert_eq!(config.walker.sorting, vec![SortKey::Time, SortKey::Reverse]);
    }

    #[test]
    fn test_bad_env_overrides() {
        assert!(Config::default()
            .with_overrides(vars(&[("GITBIND_COMMENT_CHAR", "##")]))
            .is_err());
        assert!(Config::default()
            .with_overrides(vars(&[("GITBIND_SORT", "sideways")]))
            .is_err());
        assert!(Config::default()
            .with_overrides(vars(&[("GITBIND_CLEANUP", "maybe")]))
            .is_err());
    }
}
