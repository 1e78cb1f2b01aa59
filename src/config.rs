use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{ColorPalette, PaletteEntry, PaletteError, SwitchPolicy};
use crate::persistence::{config_file, read_if_exists};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid palette in config")]
    Palette(#[from] PaletteError),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// What happens to an unsaved task title when editing moves to another task
    #[serde(default)]
    pub edit_switch: SwitchPolicy,

    /// Log filter used when TODOLISTS_LOG is unset. Default: "info"
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Replaces the built-in palette when non-empty
    #[serde(default)]
    pub palette: Vec<PaletteEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            edit_switch: SwitchPolicy::default(),
            log_level: default_log_level(),
            palette: Vec::new(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Palette from config, or the built-in one when none is configured
    pub fn color_palette(&self) -> Result<ColorPalette, PaletteError> {
        if self.palette.is_empty() {
            Ok(ColorPalette::default())
        } else {
            ColorPalette::from_entries(self.palette.clone())
        }
    }
}

/// Load config from `<data_dir>/config.toml` (or return defaults if it doesn't exist)
pub fn load(data_dir: &Path) -> Result<Config, ConfigError> {
    let path = config_file(data_dir);
    let Some(content) = read_if_exists(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?
    else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })?;
    // Palette errors are reported at load
    config.color_palette()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(dir.path()).unwrap();
        assert_eq!(config.edit_switch, SwitchPolicy::Commit);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.color_palette().unwrap(), ColorPalette::default());
    }

    #[test]
    fn test_full_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            config_file(dir.path()),
            r##"
edit_switch = "discard"
log_level = "debug"

[[palette]]
key = "mint"
start = "#99F2C8"
end = "#1F4037"

[[palette]]
key = "plum"
start = "#5B2C6F"
end = "#6E8B3D"
"##,
        )
        .unwrap();

        let config = load(dir.path()).unwrap();
        assert_eq!(config.edit_switch, SwitchPolicy::Discard);
        assert_eq!(config.log_level, "debug");
        let palette = config.color_palette().unwrap();
        assert_eq!(palette.keys().collect::<Vec<_>>(), vec!["mint", "plum"]);
    }

    #[test]
    fn test_bad_palette_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            config_file(dir.path()),
            r##"
[[palette]]
key = "mint"
start = "green"
end = "#1F4037"
"##,
        )
        .unwrap();

        assert!(matches!(load(dir.path()), Err(ConfigError::Palette(_))));
    }

    #[test]
    fn test_unparseable_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(config_file(dir.path()), "edit_switch = [").unwrap();
        assert!(matches!(load(dir.path()), Err(ConfigError::Parse { .. })));

        fs::write(config_file(dir.path()), "unknown_key = 1").unwrap();
        assert!(matches!(load(dir.path()), Err(ConfigError::Parse { .. })));
    }
}
