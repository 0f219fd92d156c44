use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Catalog path used when neither a flag nor a config file names one
pub const DEFAULT_SOURCE: &str = "data/exercises.json";

/// Load environment variables from .env files
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.exercisectl/.env
pub fn load_dotenv() -> Result<()> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(format!("current directory ({})", path.display()));
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            // dotenvy never overwrites variables that are already set
            match dotenvy::from_path(&env_file) {
                Ok(()) => loaded_from.push(format!("~/.exercisectl/.env ({})", env_file.display())),
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }

    if loaded_from.is_empty() {
        debug!("No .env files found, using environment variables only");
    } else {
        debug!("Loaded environment from: {}", loaded_from.join(", "));
    }

    Ok(())
}

/// Get the exercisectl config directory path (~/.exercisectl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".exercisectl"))
}

// ============================================================================
// TOML Configuration
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExercisectlConfig {
    #[serde(default)]
    pub import: ImportConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImportConfig {
    /// Catalog document to load
    #[serde(default)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Pool size; unset falls back to [`crate::db::DEFAULT_MAX_CONNECTIONS`]
    #[serde(default)]
    pub max_connections: Option<u32>,
}

impl DatabaseConfig {
    pub fn max_connections(&self) -> u32 {
        self.max_connections
            .unwrap_or(crate::db::DEFAULT_MAX_CONNECTIONS)
    }
}

impl ExercisectlConfig {
    /// Load config from TOML files
    ///
    /// Priority order (highest to lowest):
    /// 1. ./exercisectl.toml
    /// 2. ~/.exercisectl/config.toml
    /// 3. Built-in defaults
    ///
    /// Unreadable or invalid files are logged and skipped.
    pub fn load() -> Self {
        let mut config = ExercisectlConfig::default();

        if let Some(global) = config_dir().map(|d| d.join("config.toml")) {
            if let Some(global_config) = Self::read_optional(&global) {
                config = global_config;
            }
        }

        if let Some(local_config) = Self::read_optional(Path::new("exercisectl.toml")) {
            config = Self::merge(config, local_config);
        }

        config
    }

    /// Parse a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn read_optional(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::from_path(path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        }
    }

    /// Merge two configs (right overrides left)
    fn merge(mut base: Self, overlay: Self) -> Self {
        if overlay.import.source.is_some() {
            base.import.source = overlay.import.source;
        }
        if overlay.database.max_connections.is_some() {
            base.database.max_connections = overlay.database.max_connections;
        }
        base
    }

    /// Source path: explicit flag, then config, then [`DEFAULT_SOURCE`].
    pub fn source_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.import.source.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_dir_returns_path() {
        if let Some(path) = config_dir() {
            assert!(path.ends_with(".exercisectl"));
        }
    }

    #[test]
    fn test_load_dotenv_doesnt_panic() {
        assert!(load_dotenv().is_ok());
    }

    #[test]
    fn test_config_defaults() {
        let config = ExercisectlConfig::default();
        assert_eq!(config.database.max_connections(), 5);
        assert!(config.import.source.is_none());
        assert_eq!(config.source_path(None), PathBuf::from(DEFAULT_SOURCE));
    }

    #[test]
    fn test_source_path_precedence() {
        let mut config = ExercisectlConfig::default();
        config.import.source = Some(PathBuf::from("from-config.json"));

        assert_eq!(config.source_path(None), PathBuf::from("from-config.json"));
        assert_eq!(
            config.source_path(Some(PathBuf::from("from-flag.json"))),
            PathBuf::from("from-flag.json")
        );
    }

    #[test]
    fn test_from_path_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[import]\nsource = \"seed/exercises.json\"").unwrap();
        file.flush().unwrap();

        let config = ExercisectlConfig::from_path(file.path()).unwrap();
        assert_eq!(config.import.source, Some(PathBuf::from("seed/exercises.json")));
        assert_eq!(config.database.max_connections, None);
        assert_eq!(config.database.max_connections(), 5);
    }

    #[test]
    fn test_from_path_rejects_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[database]\nmax_connections = \"many\"").unwrap();
        file.flush().unwrap();

        assert!(ExercisectlConfig::from_path(file.path()).is_err());
    }

    #[test]
    fn test_merge_keeps_base_source_when_overlay_unset() {
        let mut base = ExercisectlConfig::default();
        base.import.source = Some(PathBuf::from("global.json"));
        let mut overlay = ExercisectlConfig::default();
        overlay.database.max_connections = Some(2);

        let merged = ExercisectlConfig::merge(base, overlay);
        assert_eq!(merged.import.source, Some(PathBuf::from("global.json")));
        assert_eq!(merged.database.max_connections(), 2);
    }

    #[test]
    fn test_merge_keeps_base_pool_size_when_overlay_unset() {
        let mut global = ExercisectlConfig::default();
        global.database.max_connections = Some(2);
        let local: ExercisectlConfig =
            toml::from_str("[import]\nsource = \"local.json\"\n").unwrap();

        let merged = ExercisectlConfig::merge(global, local);
        assert_eq!(merged.import.source, Some(PathBuf::from("local.json")));
        assert_eq!(merged.database.max_connections(), 2);
    }

    #[test]
    fn test_config_load_doesnt_panic() {
        let _ = ExercisectlConfig::load();
    }
}
