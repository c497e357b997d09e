use std::path::Path;

use crate::error::ConfigError;

/// Which strategy drives an AI-controlled side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Minimax,
    Greedy,
    Random,
}

/// Settings for AI-controlled sides.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Strategy assigned when a side is handed to the AI.
    pub strategy: Strategy,
    /// Minimax lookahead in plies. The search is exhaustive, so each extra
    /// ply multiplies the work by seven.
    pub search_depth: u32,
    /// Pause before an AI move is applied, so the move is visible.
    pub move_delay_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            strategy: Strategy::Minimax,
            search_depth: 3,
            move_delay_ms: 500,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.search_depth == 0 {
            return Err(ConfigError::Validation(
                "ai.search_depth must be >= 1".into(),
            ));
        }
        // Unpruned minimax visits 7^depth positions; past depth 8 a move
        // takes longer than anyone will wait
        if self.ai.search_depth > 8 {
            return Err(ConfigError::Validation(
                "ai.search_depth must be <= 8".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[ai]
search_depth = 5
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ai.search_depth, 5);
        // Other fields should be defaults
        assert_eq!(config.ai.strategy, Strategy::Minimax);
        assert_eq!(config.ai.move_delay_ms, 500);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ai.search_depth, 3);
        assert_eq!(config.ai.strategy, Strategy::Minimax);
    }

    #[test]
    fn test_strategy_names_are_lowercase() {
        let toml_str = r#"
[ai]
strategy = "greedy"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ai.strategy, Strategy::Greedy);
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.ai.search_depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_depth() {
        let mut config = AppConfig::default();
        config.ai.search_depth = 9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.ai.search_depth, 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ai]
strategy = "random"
search_depth = 2
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ai.strategy, Strategy::Random);
        assert_eq!(config.ai.search_depth, 2);
        // Others are defaults
        assert_eq!(config.ai.move_delay_ms, 500);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[ai]\nsearch_depth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
