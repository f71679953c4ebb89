use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file looked up next to the input.
pub const CONFIG_FILE_NAME: &str = "plusconfig.json";

/// Optional behaviour switches read from `plusconfig.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Follow every `wires` group instead of only the first one.
    pub use_all_wires: bool,
    /// Enumerate arbitrary (possibly disconnected) subsets.
    pub allow_disconnected: bool,
    /// Emit debug diagnostics.
    pub verbose_debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_all_wires: false,
            allow_disconnected: false,
            verbose_debug: true,
        }
    }
}

impl Config {
    /// Locate the configuration file for an input path.
    ///
    /// Looks in this order:
    /// 1. `<input>/plusconfig.json` when `input` is a directory,
    ///    `<input parent>/plusconfig.json` otherwise
    /// 2. `./plusconfig.json` in the current directory
    ///
    /// The second candidate is returned even if it does not exist; loading
    /// a missing file yields the defaults.
    pub fn resolve_path(input: &Path) -> PathBuf {
        let beside_input = if input.is_dir() {
            input.join(CONFIG_FILE_NAME)
        } else {
            input
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(CONFIG_FILE_NAME)
        };

        if beside_input.exists() {
            return beside_input;
        }

        std::env::current_dir()
            .map(|cwd| cwd.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Strictly load configuration from file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let value: JsonValue = serde_json::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        // A derived struct also deserializes from a sequence.
        if !value.is_object() {
            bail!("{} is not a JSON object", path.display());
        }

        let config = Config::deserialize(value)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults.
    ///
    /// A missing file silently yields the defaults; any other failure is
    /// logged as a warning before falling back.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{:#}; using default configuration", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.use_all_wires);
        assert!(!config.allow_disconnected);
        assert!(config.verbose_debug);
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{"use_all_wires": true, "allow_disconnected": true, "verbose_debug": false}"#,
        )
        .unwrap();

        let config = Config::load_or_default(&path);
        assert!(config.use_all_wires);
        assert!(config.allow_disconnected);
        assert!(!config.verbose_debug);
    }

    #[test]
    fn test_missing_fields_keep_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"allow_disconnected": true, "comment": "ignored"}"#).unwrap();

        let config = Config::load_or_default(&path);
        assert!(!config.use_all_wires);
        assert!(config.allow_disconnected);
        assert!(config.verbose_debug);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&temp_dir.path().join("nope.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        assert!(Config::from_file(&path).is_err());
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        fs::write(&path, "[true, false]").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("not a JSON object"));
        assert_eq!(Config::load_or_default(&path), Config::default());

        for scalar in ["true", "null", "\"use_all_wires\""] {
            fs::write(&path, scalar).unwrap();
            assert!(Config::from_file(&path).is_err(), "accepted {}", scalar);
        }

        fs::write(&path, r#"{"use_all_wires": "yes"}"#).unwrap();
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_resolve_path_for_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{}").unwrap();

        assert_eq!(Config::resolve_path(temp_dir.path()), path);
    }

    #[test]
    fn test_resolve_path_for_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{}").unwrap();
        let input = temp_dir.path().join("flows.json");
        fs::write(&input, "[]").unwrap();

        assert_eq!(Config::resolve_path(&input), path);
    }

    #[test]
    fn test_resolve_path_falls_back_to_cwd() {
        let temp_dir = TempDir::new().unwrap();
        let resolved = Config::resolve_path(temp_dir.path());
        assert_eq!(resolved.file_name().unwrap(), CONFIG_FILE_NAME);
        assert_ne!(resolved.parent().unwrap(), temp_dir.path());
    }
}
