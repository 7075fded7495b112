//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform
//! concerns:
//! - Seeded RNG only
//! - Time arrives as an explicit delta
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use difficulty::Difficulty;
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{TickEvents, TickInput, spawn_obstacle, tick};
