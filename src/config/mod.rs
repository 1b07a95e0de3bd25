pub mod schema;

pub use schema::ToolConfig;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File name looked up inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Default config location (`<config dir>/schema-to-tool/config.toml`).
pub fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "schema-to-tool")
        .map(|d| d.config_dir().join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

/// Expand `~` in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Load config from the given path, or return defaults.
pub fn load_config(path: &Path) -> Result<ToolConfig> {
    if path.exists() {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ToolConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config (TOML) {}", path.display()))?;
        Ok(config)
    } else {
        Ok(ToolConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolFormat;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ToolConfig::default());
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "format = \"anthropic\"\nnormalize_names = true\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.format, Some(ToolFormat::Anthropic));
        assert!(config.convert_options().normalize_names);
        assert_eq!(config.indent, 2);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_bad_format_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "format = \"yaml\"\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(expand_path("/etc/x.toml"), PathBuf::from("/etc/x.toml"));
    }
}
