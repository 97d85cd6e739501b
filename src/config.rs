use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, Result};

pub const APP_NAME: &str = "glyphtree";

/// `~/.config/glyphtree`, or the platform equivalent.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub show_hidden: bool,
    /// Percent of the screen width given to the tree.
    pub tree_width: u16,
    pub dirs_first: bool,
    /// Palette overrides, field name to `#rrggbb`.
    pub theme: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            show_hidden: false,
            tree_width: 40,
            dirs_first: true,
            theme: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load `path`, or the default location when `None`. A missing file gives
    /// the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match config_dir() {
                Some(d) => d.join("config.toml"),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.tree_width = config.tree_width.clamp(10, 90);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn fields_and_theme_table() {
        let c = Config::parse(
            r##"
            show_hidden = true
            tree_width = 55
            [theme]
            fg = "#ffffff"
            "##,
        )
        .unwrap();
        assert!(c.show_hidden);
        assert!(c.dirs_first);
        assert_eq!(c.tree_width, 55);
        assert_eq!(c.theme.get("fg").map(String::as_str), Some("#ffffff"));
    }

    #[test]
    fn tree_width_is_clamped() {
        assert_eq!(Config::parse("tree_width = 0").unwrap().tree_width, 10);
        assert_eq!(Config::parse("tree_width = 100").unwrap().tree_width, 90);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            Config::parse("colour = 1"),
            Err(AppError::ConfigParse(_))
        ));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let c = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(c, Config::default());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "dirs_first = false\n").unwrap();
        assert!(!Config::load(Some(&path)).unwrap().dirs_first);
    }
}
