//! Per-frame simulation tick
//!
//! One call advances the game by one display refresh. Obstacle speeds are in
//! units per tick, so the game runs faster on faster displays; only the
//! difficulty clock uses real elapsed time.

use glam::Vec2;
use rand::Rng;

use super::difficulty::Difficulty;
use super::state::{GamePhase, GameState, Obstacle};
use crate::color::Color;
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// What happened during a tick, for the loop to report outward
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Obstacles that passed the bottom edge (each scored one point)
    pub cleared: u32,
    /// ID of the obstacle spawned this tick
    pub spawned: Option<u32>,
    /// The player was hit this tick
    pub game_over: bool,
}

/// Advance the game state by one frame lasting `dt` real seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, tuning: &Tuning) -> TickEvents {
    let mut events = TickEvents::default();

    // Nothing moves once the player has been hit
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.elapsed_secs += dt.max(0.0);
    state.time_ticks += 1;

    state
        .player
        .steer(input.left, input.right, tuning.playfield.width);

    // Fall, then drop everything past the bottom edge
    let floor = tuning.playfield.height;
    for obstacle in &mut state.obstacles {
        obstacle.fall();
    }
    let before = state.obstacles.len();
    state.obstacles.retain(|o| o.pos.y <= floor);
    let cleared = (before - state.obstacles.len()) as u32;
    state.score += cleared;
    events.cleared = cleared;

    let player_rect = state.player.rect();
    if state
        .obstacles
        .iter()
        .any(|o| o.rect().overlaps(&player_rect))
    {
        state.phase = GamePhase::GameOver;
        events.game_over = true;
        log::debug!(
            "Player hit at tick {} ({:.1}s)",
            state.time_ticks,
            state.elapsed_secs
        );
    }

    // Fresh roll every tick, including the one that ended the run
    let difficulty = Difficulty::at(state.elapsed_secs, &tuning.difficulty);
    if state.rng.random::<f32>() < difficulty.spawn_rate {
        events.spawned = Some(spawn_obstacle(state, &difficulty, tuning));
    }

    events
}

/// Append one obstacle above the playfield and return its ID
pub fn spawn_obstacle(state: &mut GameState, difficulty: &Difficulty, tuning: &Tuning) -> u32 {
    let shape = &tuning.obstacle;
    let width = state.rng.random_range(shape.min_width..=shape.max_width);
    let max_x = (tuning.playfield.width - width).max(0.0);
    let x = state.rng.random_range(0.0..=max_x);
    let speed = difficulty.speed + state.rng.random::<f32>() * shape.speed_jitter;
    let hue = state.rng.random_range(0.0..360.0);

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        pos: Vec2::new(x, shape.spawn_y),
        size: Vec2::new(width, shape.height),
        speed,
        color: Color::from_hue(hue),
    });
    id
}
