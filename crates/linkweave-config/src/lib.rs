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

    #[error("Invalid exclude pattern {pattern:?}: {source}")]
    ExcludePatternError {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub notes_path: PathBuf,
    /// Glob patterns (relative to the notes root) for notes that should
    /// not be linked into or out of.
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub linking: LinkingSettings,
}

/// The `[linking]` table: policy switches passed through to the engine.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkingSettings {
    pub first_only: bool,
    pub smart_mode: bool,
    pub capital_links: bool,
    pub word_start_only: bool,
    pub word_end_only: bool,
    pub black_list: Vec<String>,
}

impl Default for LinkingSettings {
    fn default() -> Self {
        Self {
            first_only: false,
            smart_mode: true,
            capital_links: true,
            word_start_only: true,
            word_end_only: false,
            black_list: Vec::new(),
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

        // Expand shell variables and tilde in the loaded notes path
        config.notes_path = Self::expand_path(&config.notes_path).unwrap_or(config.notes_path);

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
        let config_dir = shellexpand::tilde("~/.config/linkweave");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Compiles the exclude globs, failing on the first invalid pattern.
    pub fn exclude_patterns(&self) -> Result<Vec<glob::Pattern>, ConfigError> {
        self.exclude
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|source| ConfigError::ExcludePatternError {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect()
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
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/linkweave/config.toml"));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load_from_path(dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_minimal_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "notes_path = \"/tmp/notes\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(config.notes_path, PathBuf::from("/tmp/notes"));
        assert!(config.exclude.is_empty());
        assert!(config.linking.smart_mode);
        assert!(!config.linking.first_only);
    }

    #[test]
    fn test_load_full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
notes_path = "/tmp/notes"
exclude = ["journal/*"]

[linking]
first_only = true
smart_mode = false
capital_links = false
word_end_only = true
black_list = ["Home"]
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(config.exclude, vec!["journal/*"]);
        assert!(config.linking.first_only);
        assert!(!config.linking.smart_mode);
        assert!(!config.linking.capital_links);
        assert!(config.linking.word_start_only); // defaulted
        assert!(config.linking.word_end_only);
        assert_eq!(config.linking.black_list, vec!["Home"]);
    }

    #[test]
    fn test_parse_error_carries_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [").unwrap();

        match Config::load_from_path(&path) {
            Err(ConfigError::ConfigParseError { config_path, .. }) => {
                assert_eq!(config_path, path);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let original = Config {
            notes_path: PathBuf::from("/tmp/test-notes"),
            exclude: vec!["archive/*".to_string()],
            linking: LinkingSettings {
                first_only: true,
                ..LinkingSettings::default()
            },
        };

        original.save_to_path(&path).unwrap();
        let reloaded = Config::load_from_path(&path).unwrap().unwrap();

        assert_eq!(reloaded.notes_path, original.notes_path);
        assert_eq!(reloaded.exclude, original.exclude);
        assert!(reloaded.linking.first_only);
    }

    #[test]
    fn test_exclude_patterns_compile() {
        let config = Config {
            notes_path: PathBuf::from("/tmp"),
            exclude: vec!["journal/*".to_string(), "*.draft.md".to_string()],
            linking: LinkingSettings::default(),
        };
        let patterns = config.exclude_patterns().unwrap();
        assert!(patterns[0].matches("journal/2026-01-01.md"));
        assert!(patterns[1].matches("notes.draft.md"));
        assert!(!patterns[0].matches("notes/real.md"));
    }

    #[test]
    fn test_invalid_exclude_pattern_errors() {
        let config = Config {
            notes_path: PathBuf::from("/tmp"),
            exclude: vec!["bad[pattern".to_string()],
            linking: LinkingSettings::default(),
        };
        match config.exclude_patterns() {
            Err(ConfigError::ExcludePatternError { pattern, .. }) => {
                assert_eq!(pattern, "bad[pattern");
            }
            other => panic!("expected pattern error, got {other:?}"),
        }
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("test/path"));
    }
}
