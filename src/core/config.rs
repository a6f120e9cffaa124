//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.charsheet/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::character::Character;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CharsheetConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub defaults: StartingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub characters_dir: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

/// Overrides for the blank sheet a session starts with.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct StartingConfig {
    pub name: Option<String>,
    pub race: Option<String>,
    pub class: Option<String>,
    pub background: Option<String>,
    pub gold: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CHARACTERS_DIR: &str = "characters";
pub const DEFAULT_DATA_DIR: &str = ".";

pub const ENV_CHARACTERS_DIR: &str = "CHARSHEET_CHARACTERS_DIR";
pub const ENV_DATA_DIR: &str = "CHARSHEET_DATA_DIR";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Where character files are saved and loaded.
    pub characters_dir: PathBuf,
    /// Where the `srd_*.json` reference files live.
    pub data_dir: PathBuf,
    pub starting: StartingConfig,
}

impl ResolvedConfig {
    /// The document a fresh session starts with.
    pub fn starting_character(&self) -> Character {
        let mut character = Character::default();
        if let Some(name) = &self.starting.name {
            character.name = name.clone();
        }
        if let Some(race) = &self.starting.race {
            character.race = race.clone();
        }
        if let Some(class) = &self.starting.class {
            character.class = class.clone();
        }
        if let Some(background) = &self.starting.background {
            character.background = background.clone();
        }
        if let Some(gold) = self.starting.gold {
            character.currency.gp = gold;
        }
        character
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.charsheet/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".charsheet").join("config.toml"))
}

/// Load config from `~/.charsheet/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CharsheetConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CharsheetConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CharsheetConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CharsheetConfig::default());
    }

    let contents = fs::read_to_string(&path)?;
    let config: CharsheetConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Character Sheet Editor Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# characters_dir = "characters"      # Or set CHARSHEET_CHARACTERS_DIR
# data_dir = "."                     # Folder holding srd_*.json; or CHARSHEET_DATA_DIR

# [defaults]
# name = "New Character"
# race = "Human"
# class = "Fighter"
# background = "Acolyte"
# gold = 15
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_characters_dir` and `cli_data_dir` are from CLI flags (None = not specified).
pub fn resolve(
    config: &CharsheetConfig,
    cli_characters_dir: Option<&Path>,
    cli_data_dir: Option<&Path>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_characters_dir, cli_data_dir, |key| {
        std::env::var(key).ok()
    })
}

fn resolve_with_env(
    config: &CharsheetConfig,
    cli_characters_dir: Option<&Path>,
    cli_data_dir: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Characters dir: CLI → env → config → default
    let characters_dir = cli_characters_dir
        .map(Path::to_path_buf)
        .or_else(|| env(ENV_CHARACTERS_DIR).map(PathBuf::from))
        .or_else(|| config.general.characters_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CHARACTERS_DIR));

    // Data dir: CLI → env → config → default
    let data_dir = cli_data_dir
        .map(Path::to_path_buf)
        .or_else(|| env(ENV_DATA_DIR).map(PathBuf::from))
        .or_else(|| config.general.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

    ResolvedConfig {
        characters_dir,
        data_dir,
        starting: config.defaults.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config: CharsheetConfig = toml::from_str("").unwrap();
        assert!(config.general.characters_dir.is_none());
        assert!(config.defaults.gold.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: CharsheetConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.data_dir.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&CharsheetConfig::default(), None, None, no_env);
        assert_eq!(resolved.characters_dir, PathBuf::from(DEFAULT_CHARACTERS_DIR));
        assert_eq!(resolved.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(resolved.starting_character(), Character::default());
    }

    #[test]
    fn test_env_beats_file_and_cli_beats_env() {
        let config = CharsheetConfig {
            general: GeneralConfig {
                characters_dir: Some(PathBuf::from("from-file")),
                data_dir: Some(PathBuf::from("data-from-file")),
            },
            ..Default::default()
        };
        let env = |key: &str| (key == ENV_CHARACTERS_DIR).then(|| "from-env".to_string());

        let resolved = resolve_with_env(&config, None, None, env);
        assert_eq!(resolved.characters_dir, PathBuf::from("from-env"));
        assert_eq!(resolved.data_dir, PathBuf::from("data-from-file"));

        let resolved = resolve_with_env(&config, Some(Path::new("from-cli")), None, env);
        assert_eq!(resolved.characters_dir, PathBuf::from("from-cli"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override the class and gold; everything else stays default
        let toml_str = r#"
[defaults]
class = "Wizard"
gold = 40
"#;
        let config: CharsheetConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve_with_env(&config, None, None, no_env);
        let character = resolved.starting_character();
        assert_eq!(character.class, "Wizard");
        assert_eq!(character.currency.gp, 40);
        assert_eq!(character.name, "New Character");
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let err = toml::from_str::<CharsheetConfig>("[general]\ndata_dir = 3").unwrap_err();
        let err = ConfigError::from(err);
        assert!(err.to_string().starts_with("config parse error"));
    }
}
