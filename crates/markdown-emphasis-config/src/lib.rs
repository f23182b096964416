use markdown_emphasis_engine::{InlineParser, MAX_NESTING_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid max_nesting_depth in {config_path}: must be at least 1")]
    InvalidLimit { config_path: PathBuf },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Deepest allowed emphasis nesting. 1 forbids emphasis inside emphasis.
    pub max_nesting_depth: usize,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if config.parser.max_nesting_depth == 0 {
            return Err(ConfigError::InvalidLimit {
                config_path: config_path.to_path_buf(),
            });
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-emphasis");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Builds a parser honouring these settings.
    pub fn inline_parser(&self) -> InlineParser {
        InlineParser::with_max_nesting_depth(self.parser.max_nesting_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown_emphasis_engine::ParseError;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/markdown-emphasis/config.toml"));
    }

    #[test]
    fn test_default_allows_full_nesting() {
        let config = Config::default();
        assert_eq!(config.parser.max_nesting_depth, MAX_NESTING_DEPTH);
        assert!(config.inline_parser().parse("||~~**a *b***~~||").is_ok());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            parser: ParserSettings {
                max_nesting_depth: 2,
            },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = toml::from_str("[parser]\n").unwrap();
        assert_eq!(config.parser.max_nesting_depth, MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");
        let test_config = Config {
            parser: ParserSettings {
                max_nesting_depth: 1,
            },
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_loaded_limit_reaches_parser() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[parser]\nmax_nesting_depth = 1\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        let result = config.inline_parser().parse("**bold and *italic***");

        assert_eq!(
            result,
            Err(ParseError::ExcessiveNesting { depth: 2, limit: 1 })
        );
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[parser]\nmax_nesting_depth = 0\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLimit { .. }));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[parser\nmax_nesting_depth = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().starts_with("Failed to parse config file at"));
    }

    #[test]
    fn test_unreadable_path_is_read_error() {
        // A directory exists but can't be read as a file
        let temp_dir = TempDir::new().unwrap();

        let err = Config::load_from_path(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigReadError { .. }));
    }
}
