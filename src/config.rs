use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::level_table::{LevelTable, LevelTableError};

pub const MAX_LETTERS_PER_ROUND: usize = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("letters_per_round must be at least 1")]
    NoLetters,
    #[error("letters_per_round must be at most {MAX_LETTERS_PER_ROUND}, got {0}")]
    TooManyLetters(usize),
    #[error("invalid level table: {0}")]
    Levels(#[from] LevelTableError),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_letters_per_round")]
    pub letters_per_round: usize,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_start_level")]
    pub start_level: usize,
    /// Custom level table. The built-in Hebrew table is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<String>>,
}

fn default_letters_per_round() -> usize {
    20
}
fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_start_level() -> usize {
    0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            letters_per_round: default_letters_per_round(),
            theme: default_theme(),
            start_level: default_start_level(),
            levels: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keyladder")
    }

    pub fn level_table(&self) -> Result<LevelTable, ConfigError> {
        match &self.levels {
            Some(chunks) => Ok(LevelTable::new(chunks.iter().cloned())?),
            None => Ok(LevelTable::hebrew()),
        }
    }

    pub fn validate(&self) -> Result<LevelTable, ConfigError> {
        if self.letters_per_round == 0 {
            return Err(ConfigError::NoLetters);
        }
        if self.letters_per_round > MAX_LETTERS_PER_ROUND {
            return Err(ConfigError::TooManyLetters(self.letters_per_round));
        }
        self.level_table()
    }

    /// Clamp `start_level` into the table, which may be shorter than the saved value.
    pub fn normalize(&mut self, table: &LevelTable) {
        self.start_level = table.clamp_level(self.start_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.letters_per_round, 20);
        assert_eq!(config.theme, "terminal-default");
        assert_eq!(config.start_level, 0);
        assert!(config.levels.is_none());
    }

    #[test]
    fn test_config_partial_fields() {
        let toml_str = r#"
letters_per_round = 8
levels = ["asdf", "jkl;", "gh"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.letters_per_round, 8);
        assert_eq!(config.theme, "terminal-default");
        let table = config.validate().unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.cumulative_set(1), "asdfjkl;");
    }

    #[test]
    fn test_validate_rejects_zero_letters() {
        let config = Config {
            letters_per_round: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoLetters)));
    }

    #[test]
    fn test_validate_bounds_letters_per_round() {
        let at_limit = Config {
            letters_per_round: MAX_LETTERS_PER_ROUND,
            ..Config::default()
        };
        assert!(at_limit.validate().is_ok());

        for letters in [MAX_LETTERS_PER_ROUND + 1, usize::MAX / 2 + 1, usize::MAX] {
            let config = Config {
                letters_per_round: letters,
                ..Config::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::TooManyLetters(n)) if n == letters
            ));
        }
    }

    #[test]
    fn test_validate_rejects_bad_table() {
        let config = Config {
            levels: Some(vec!["ab".to_string(), String::new(), "cd".to_string()]),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Levels(LevelTableError::EmptyChunk(1)))
        ));
    }

    #[test]
    fn test_normalize_clamps_start_level() {
        let mut config = Config {
            start_level: 40,
            ..Config::default()
        };
        let table = config.validate().unwrap();
        config.normalize(&table);
        assert_eq!(config.start_level, 15);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.letters_per_round, 20);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            letters_per_round: 12,
            start_level: 3,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.letters_per_round, 12);
        assert_eq!(loaded.start_level, 3);
        assert!(loaded.levels.is_none());
    }
}
