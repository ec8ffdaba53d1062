use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
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
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown output format '{0}' (expected styled, markup or json)")]
pub struct UnknownFormat(pub String);

/// How rendered messages are written when printing to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal styling: bold inline code, framed code blocks.
    #[default]
    Styled,
    /// Backtick markup rebuilt from the segments.
    Markup,
    /// Render groups as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "styled" => Ok(Self::Styled),
            "markup" => Ok(Self::Markup),
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Styled => "styled",
            Self::Markup => "markup",
            Self::Json => "json",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder of saved messages to browse when no files are given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages_path: Option<PathBuf>,
    pub format: OutputFormat,
    /// Show the language tag above code blocks.
    pub show_language: bool,
    /// Header used for code blocks without a language tag.
    pub code_block_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_path: None,
            format: OutputFormat::default(),
            show_language: true,
            code_block_label: "code".to_string(),
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

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded messages path
        config.messages_path = config
            .messages_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

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
        let config_dir = shellexpand::tilde("~/.config/chatmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/chatmark/config.toml"));
    }

    #[test]
    fn test_defaults_from_empty_file() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.format, OutputFormat::Styled);
        assert!(config.show_language);
        assert_eq!(config.code_block_label, "code");
        assert!(config.messages_path.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("format = \"json\"\n").unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.show_language);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            messages_path: Some(PathBuf::from("/tmp/chat-logs")),
            format: OutputFormat::Markup,
            show_language: false,
            code_block_label: "snippet".to_string(),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.messages_path, deserialized.messages_path);
        assert_eq!(original.format, deserialized.format);
        assert_eq!(original.show_language, deserialized.show_language);
        assert_eq!(original.code_block_label, deserialized.code_block_label);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("styled".parse::<OutputFormat>(), Ok(OutputFormat::Styled));
        assert_eq!(" JSON ".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("markup".parse::<OutputFormat>(), Ok(OutputFormat::Markup));
        assert_eq!(
            "html".parse::<OutputFormat>(),
            Err(UnknownFormat("html".to_string()))
        );
    }

    #[test]
    fn test_output_format_display_parses_back() {
        for format in [OutputFormat::Styled, OutputFormat::Markup, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_unknown_format_in_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "format = \"html\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("CHATMARK_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$CHATMARK_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("CHATMARK_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
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
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            messages_path: Some(PathBuf::from("/tmp/chat-logs")),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        assert!(config_file.exists(), "Config file should exist");

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded_config.messages_path, test_config.messages_path);
        assert_eq!(loaded_config.format, test_config.format);
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("CHATMARK_LOGS", "/custom/logs");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "messages_path = \"$CHATMARK_LOGS/chat\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.messages_path, Some(PathBuf::from("/custom/logs/chat")));

        unsafe {
            env::remove_var("CHATMARK_LOGS");
        }
    }
}
