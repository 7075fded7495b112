//! The frame-driven game loop
//!
//! `GameLoop` owns the simulation state and its host collaborators. The host
//! calls [`GameLoop::tick`] whenever a frame it scheduled fires; the loop
//! reschedules itself until the player is hit, then waits for
//! [`GameLoop::on_restart_request`].

use anyhow::Result;

use crate::format_score;
use crate::platform::{Clock, FrameHandle, FrameScheduler, InputState, ScoreSink};
use crate::renderer::{Surface, draw_frame};
use crate::sim::{self, GamePhase, GameState};
use crate::tuning::Tuning;

/// Game instance holding all state
pub struct GameLoop<C, F, S, D> {
    tuning: Tuning,
    state: GameState,
    input: InputState,
    clock: C,
    scheduler: F,
    surface: S,
    score_sink: D,
    /// Clock reading at the previous tick (or at start)
    last_time_ms: f64,
    /// Frame requested but not yet delivered
    pending: Option<FrameHandle>,
}

impl<C, F, S, D> GameLoop<C, F, S, D>
where
    C: Clock,
    F: FrameScheduler,
    S: Surface,
    D: ScoreSink,
{
    /// Build a loop around its collaborators. Nothing runs until [`Self::start`].
    pub fn new(seed: u64, tuning: Tuning, clock: C, scheduler: F, surface: S, score_sink: D) -> Self {
        let state = GameState::new(seed, &tuning);
        let last_time_ms = clock.now_ms();
        Self {
            tuning,
            state,
            input: InputState::new(),
            clock,
            scheduler,
            surface,
            score_sink,
            last_time_ms,
            pending: None,
        }
    }

    /// Reset the run and schedule its first frame
    pub fn start(&mut self) -> Result<()> {
        self.state.reset(&self.tuning);
        self.last_time_ms = self.clock.now_ms();
        self.score_sink.show_score(&format_score(0));

        // Never leave two loops running
        if let Some(stale) = self.pending.take() {
            self.scheduler.cancel(stale);
        }
        self.pending = Some(self.scheduler.request_frame()?);

        log::info!("Game started (seed {})", self.state.seed);
        Ok(())
    }

    /// Run one frame: simulate, report score, draw, and reschedule while playing
    pub fn tick(&mut self) {
        // The frame we were waiting for is the one running now
        self.pending = None;

        if self.state.is_over() {
            log::debug!("Ignoring frame delivered after game over");
            return;
        }

        let now = self.clock.now_ms();
        let dt = ((now - self.last_time_ms) / 1000.0).max(0.0) as f32;
        self.last_time_ms = now;

        let input = self.input.snapshot();
        let score_before = self.state.score;
        let events = sim::tick(&mut self.state, &input, dt, &self.tuning);

        // One update per cleared obstacle
        for score in score_before + 1..=self.state.score {
            self.score_sink.show_score(&format_score(score));
        }

        if events.game_over {
            log::info!(
                "Game over: score {}, survived {:.1}s",
                self.state.score,
                self.state.elapsed_secs
            );
        }

        draw_frame(&mut self.surface, &self.state, &self.tuning);

        if self.state.phase == GamePhase::Playing {
            match self.scheduler.request_frame() {
                Ok(handle) => self.pending = Some(handle),
                Err(e) => log::error!("Failed to schedule next frame: {:#}", e),
            }
        }
    }

    /// Restart after a game over. Returns `false` (and does nothing) while playing.
    pub fn on_restart_request(&mut self) -> Result<bool> {
        if !self.state.is_over() {
            log::debug!("Restart ignored while playing");
            return Ok(false);
        }

        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        log::info!(
            "Restarting after score {} ({:.1}s)",
            self.state.score,
            self.state.elapsed_secs
        );
        self.start()?;
        Ok(true)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Input flags; event handlers write here between ticks
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn score_sink(&self) -> &D {
        &self.score_sink
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }
}
