//! Platform abstraction layer
//!
//! The game loop talks to its host only through the traits below:
//! - Time source (`Clock`)
//! - Frame scheduling (`FrameScheduler`)
//! - Score display (`ScoreSink`)
//!
//! `headless` implements them deterministically for tests and the native
//! binary; `web` implements them on top of the browser.

pub mod headless;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{ManualClock, ManualScheduler, RecordingScoreSink};
pub use input::InputState;

use anyhow::Result;

/// Monotonic time source in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Identifies a scheduled frame callback so it can be cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Schedules the game's frame callback before the next display refresh
pub trait FrameScheduler {
    /// Ask for the frame callback to run once more
    fn request_frame(&mut self) -> Result<FrameHandle>;
    /// Drop a request that has not fired yet
    fn cancel(&mut self, handle: FrameHandle);
}

/// Text sink for the score line outside the playfield
pub trait ScoreSink {
    fn show_score(&mut self, text: &str);
}
