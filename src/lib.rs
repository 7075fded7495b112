//! Drop Dodge - A falling-block dodging arcade game
//!
//! Core modules:
//! - `sim`: Simulation (player movement, obstacles, difficulty, collisions)
//! - `renderer`: 2D drawing surface abstraction and frame drawing
//! - `platform`: Clock, frame scheduler, score display and input collaborators
//! - `game`: The frame-driven game loop tying the above together
//! - `tuning`: Data-driven game balance

pub mod color;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use color::Color;
pub use game::GameLoop;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Horizontal movement per tick
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance from the playfield bottom to the player's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 30.0;

    /// Obstacle defaults
    pub const OBSTACLE_HEIGHT: f32 = 20.0;
    pub const OBSTACLE_MIN_WIDTH: f32 = 20.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 50.0;
    /// Obstacles enter from just above the visible playfield
    pub const OBSTACLE_SPAWN_Y: f32 = -20.0;
    /// Upper bound of the random speed added to each new obstacle
    pub const OBSTACLE_SPEED_JITTER: f32 = 1.0;

    /// Difficulty curve (per-tick probability and units per tick)
    pub const BASE_SPAWN_RATE: f32 = 0.02;
    pub const MAX_SPAWN_RATE: f32 = 0.08;
    /// Seconds for the spawn rate to grow by one base rate
    pub const SPAWN_RAMP_SECS: f32 = 30.0;
    pub const BASE_SPEED: f32 = 2.0;
    pub const MAX_SPEED: f32 = 8.0;
    /// Seconds for the speed to grow by one base speed
    pub const SPEED_RAMP_SECS: f32 = 20.0;
}

/// Format the score line shown in the DOM score display
#[inline]
pub fn format_score(score: u32) -> String {
    format!("Score: {}", score)
}

/// Format elapsed seconds as the whole-second readout drawn on the playfield
#[inline]
pub fn format_time(elapsed_secs: f32) -> String {
    format!("Time: {}s", elapsed_secs.max(0.0).floor() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0), "Score: 0");
        assert_eq!(format_score(17), "Score: 17");
    }

    #[test]
    fn test_format_time_floors() {
        assert_eq!(format_time(0.0), "Time: 0s");
        assert_eq!(format_time(12.99), "Time: 12s");
        assert_eq!(format_time(61.0), "Time: 61s");
    }
}
