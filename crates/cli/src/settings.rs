//! Game rules from an optional TOML file, with command-line overrides on top.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use maze_core::GameConfig;

pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
    let config: GameConfig = toml::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

pub fn apply_overrides(mut config: GameConfig, players: Option<u8>) -> Result<GameConfig> {
    if let Some(players) = players {
        config.player_count = players;
    }
    config.validate().wrap_err("Invalid game configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_means_default_rules() {
        assert_eq!(load_config(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn player_override_replaces_the_file_value() {
        let config = apply_overrides(GameConfig::default(), Some(4)).unwrap();
        assert_eq!(config.player_count, 4);
        assert!(apply_overrides(GameConfig::default(), Some(0)).is_err());
    }
}
