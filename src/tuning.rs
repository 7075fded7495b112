//! Data-driven game balance
//!
//! Every gameplay number lives here, defaulting to the values in
//! [`crate::consts`]. A page can override any subset of them with a JSON
//! document; missing fields keep their defaults.

use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Playfield dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayfieldTuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

/// Player size, speed and resting height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,
    /// Units moved per tick while a direction is held
    pub speed: f32,
    /// Distance from the playfield bottom to the player's top edge
    pub bottom_offset: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            bottom_offset: PLAYER_BOTTOM_OFFSET,
        }
    }
}

/// Shape and entry of newly spawned obstacles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleTuning {
    pub height: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub spawn_y: f32,
    pub speed_jitter: f32,
}

impl Default for ObstacleTuning {
    fn default() -> Self {
        Self {
            height: OBSTACLE_HEIGHT,
            min_width: OBSTACLE_MIN_WIDTH,
            max_width: OBSTACLE_MAX_WIDTH,
            spawn_y: OBSTACLE_SPAWN_Y,
            speed_jitter: OBSTACLE_SPEED_JITTER,
        }
    }
}

/// Difficulty curve parameters, see [`crate::sim::Difficulty`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTuning {
    pub base_spawn_rate: f32,
    pub max_spawn_rate: f32,
    pub spawn_ramp_secs: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    pub speed_ramp_secs: f32,
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            base_spawn_rate: BASE_SPAWN_RATE,
            max_spawn_rate: MAX_SPAWN_RATE,
            spawn_ramp_secs: SPAWN_RAMP_SECS,
            base_speed: BASE_SPEED,
            max_speed: MAX_SPEED,
            speed_ramp_secs: SPEED_RAMP_SECS,
        }
    }
}

/// Complete game tuning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield: PlayfieldTuning,
    pub player: PlayerTuning,
    pub obstacle: ObstacleTuning,
    pub difficulty: DifficultyTuning,
}

impl Tuning {
    /// Parse a (possibly partial) JSON document over the defaults and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let field = &self.playfield;
        ensure!(
            field.width > 0.0 && field.height > 0.0,
            "playfield must have a positive size, got {}x{}",
            field.width,
            field.height
        );

        let player = &self.player;
        ensure!(
            player.width > 0.0 && player.height > 0.0 && player.speed >= 0.0,
            "player size must be positive and speed non-negative"
        );
        ensure!(
            player.width <= field.width,
            "player width {} does not fit the playfield width {}",
            player.width,
            field.width
        );
        ensure!(
            player.bottom_offset >= player.height && player.bottom_offset <= field.height,
            "player bottom offset {} must keep the {}-tall player inside the playfield",
            player.bottom_offset,
            player.height
        );

        let obstacle = &self.obstacle;
        ensure!(obstacle.height > 0.0, "obstacle height must be positive");
        ensure!(
            obstacle.min_width > 0.0 && obstacle.min_width <= obstacle.max_width,
            "obstacle widths must satisfy 0 < min ({}) <= max ({})",
            obstacle.min_width,
            obstacle.max_width
        );
        ensure!(
            obstacle.max_width <= field.width,
            "obstacle max width {} exceeds the playfield width {}",
            obstacle.max_width,
            field.width
        );
        ensure!(obstacle.speed_jitter >= 0.0, "speed jitter must be non-negative");
        // New obstacles start fully hidden above the top edge, never higher than the default entry
        ensure!(
            obstacle.spawn_y + obstacle.height <= 0.0 && obstacle.spawn_y >= OBSTACLE_SPAWN_Y,
            "obstacle spawn y {} must hide a {}-tall obstacle just above the playfield (y >= {})",
            obstacle.spawn_y,
            obstacle.height,
            OBSTACLE_SPAWN_Y
        );

        let diff = &self.difficulty;
        for (name, rate) in [
            ("base_spawn_rate", diff.base_spawn_rate),
            ("max_spawn_rate", diff.max_spawn_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                bail!("{} must be a probability, got {}", name, rate);
            }
        }
        ensure!(
            diff.base_spawn_rate <= diff.max_spawn_rate && diff.base_speed <= diff.max_speed,
            "difficulty base values must not exceed their caps"
        );
        ensure!(diff.base_speed >= 0.0, "base speed must be non-negative");
        ensure!(
            diff.spawn_ramp_secs > 0.0 && diff.speed_ramp_secs > 0.0,
            "difficulty ramps must be positive"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.playfield.width, 400.0);
        assert_eq!(tuning.playfield.height, 600.0);
        assert_eq!(tuning.difficulty.max_spawn_rate, 0.08);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "player": { "speed": 7.5 } }"#).unwrap();
        assert_eq!(tuning.player.speed, 7.5);
        assert_eq!(tuning.player.width, PLAYER_SIZE);
        assert_eq!(tuning.difficulty, DifficultyTuning::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Tuning::from_json("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Tuning::from_json(r#"{ "difficulty": { "max_spawn_rate": 1.5 } }"#).is_err());
        assert!(Tuning::from_json(r#"{ "obstacle": { "min_width": 60, "max_width": 40 } }"#).is_err());
        assert!(Tuning::from_json(r#"{ "playfield": { "width": 10 } }"#).is_err());
        assert!(Tuning::from_json("not json").is_err());
    }

    #[test]
    fn test_rejects_spawn_outside_entry_band() {
        // On the player's row
        assert!(Tuning::from_json(r#"{ "obstacle": { "spawn_y": 575 } }"#).is_err());
        // Partly visible
        assert!(Tuning::from_json(r#"{ "obstacle": { "spawn_y": -5 } }"#).is_err());
        // Far above the entry line
        assert!(Tuning::from_json(r#"{ "obstacle": { "spawn_y": -500 } }"#).is_err());
        // Shorter obstacles may start anywhere in the hidden band
        let tuning =
            Tuning::from_json(r#"{ "obstacle": { "height": 10, "spawn_y": -15 } }"#).unwrap();
        assert_eq!(tuning.obstacle.spawn_y, -15.0);
    }

    #[test]
    fn test_rejects_player_below_floor() {
        assert!(Tuning::from_json(r#"{ "player": { "bottom_offset": 10 } }"#).is_err());
        assert!(Tuning::from_json(r#"{ "player": { "bottom_offset": 30 } }"#).is_ok());
    }
}
