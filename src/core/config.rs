//! Game configuration with documented defaults
//!
//! Values can come from a TOML file; anything missing falls back to the
//! defaults below.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{Result, WarError};
use crate::core::types::{ArmyColor, COLOR_CAPACITY};

/// Configuration for a game session
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of territories on the map, fixed for the session
    pub territory_count: usize,

    /// Faces on each combat die
    ///
    /// Both sides roll one value in `1..=die_sides`.
    pub die_sides: u32,

    /// The human player's army color
    ///
    /// Conquest missions count territories of this color.
    pub player_color: String,

    /// Enemy targeted by the destroy-army mission when the map offers no
    /// other enemy color to bind at draw time
    pub enemy_color: String,

    /// Wait for Enter after each menu action so results can be read
    pub pause_after_action: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            territory_count: 5,
            die_sides: 6,
            player_color: "Blue".to_string(),
            enemy_color: "Red".to_string(),
            pause_after_action: false,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            WarError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the game cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.territory_count == 0 {
            return Err(WarError::Config("territory_count must be at least 1".into()));
        }
        if self.die_sides < 2 {
            return Err(WarError::Config(format!(
                "die_sides must be at least 2 (got {})",
                self.die_sides
            )));
        }
        let player = ArmyColor::new(&self.player_color).map_err(|e| {
            WarError::Config(format!("player_color: {e} (at most {} characters)", COLOR_CAPACITY))
        })?;
        ArmyColor::new(&self.enemy_color).map_err(|e| {
            WarError::Config(format!("enemy_color: {e} (at most {} characters)", COLOR_CAPACITY))
        })?;
        if player.same_as(&self.enemy_color) {
            return Err(WarError::Config(format!(
                "enemy_color cannot be the player's own color ({})",
                self.player_color
            )));
        }
        Ok(())
    }

    /// Validated player color
    pub fn player_army(&self) -> Result<ArmyColor> {
        ArmyColor::new(&self.player_color)
    }

    /// Validated fallback enemy color
    pub fn enemy_army(&self) -> Result<ArmyColor> {
        ArmyColor::new(&self.enemy_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.territory_count, 5);
        assert_eq!(config.die_sides, 6);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml("die_sides = 10\nplayer_color = \"Green\"").unwrap();
        assert_eq!(config.die_sides, 10);
        assert_eq!(config.player_color, "Green");
        assert_eq!(config.territory_count, 5);
        assert_eq!(config.enemy_color, "Red");
    }

    #[test]
    fn test_rejects_zero_territories() {
        let result = GameConfig::from_toml("territory_count = 0");
        assert!(matches!(result, Err(WarError::Config(_))));
    }

    #[test]
    fn test_rejects_one_sided_die() {
        let config = GameConfig { die_sides: 1, ..GameConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_enemy_equal_to_player() {
        let config = GameConfig {
            player_color: "Red".into(),
            enemy_color: "red".into(),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = GameConfig::from_toml("territory_count = \"five\"");
        assert!(matches!(result, Err(WarError::ConfigParse(_))));
    }
}
