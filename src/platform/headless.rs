//! Deterministic collaborators
//!
//! Nothing here touches real time or a display. Tests and the native binary
//! drive the loop by advancing [`ManualClock`] and firing the frame that
//! [`ManualScheduler`] holds.

use std::cell::Cell;

use anyhow::{Result, bail};

use super::{Clock, FrameHandle, FrameScheduler, ScoreSink};

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}

/// Scheduler holding at most one pending frame, fired explicitly by the caller
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Option<FrameHandle>,
    /// Handles dropped through [`FrameScheduler::cancel`]
    pub cancelled: Vec<FrameHandle>,
    /// Total successful requests
    pub requests: u32,
    /// Make the next request fail (simulates an unavailable host)
    pub fail_next: bool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Consume the pending frame; the caller then runs the tick
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle> {
        if self.fail_next {
            self.fail_next = false;
            bail!("frame scheduler unavailable");
        }
        if let Some(stale) = self.pending {
            bail!("frame {:?} is already pending", stale);
        }
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        self.requests += 1;
        Ok(handle)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
        self.cancelled.push(handle);
    }
}

/// Score sink that keeps every line it was shown
#[derive(Debug, Default)]
pub struct RecordingScoreSink {
    pub lines: Vec<String>,
}

impl RecordingScoreSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

impl ScoreSink for RecordingScoreSink {
    fn show_score(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(1000.0);
        clock.advance(16.5);
        assert_eq!(clock.now_ms(), 1016.5);
    }

    #[test]
    fn test_scheduler_single_pending() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.request_frame().unwrap();
        assert_eq!(scheduler.pending(), Some(handle));

        // A second loop must not be started on top of the first
        assert!(scheduler.request_frame().is_err());

        assert_eq!(scheduler.fire(), Some(handle));
        assert_eq!(scheduler.pending(), None);
        assert!(scheduler.request_frame().is_ok());
        assert_eq!(scheduler.requests, 2);
    }

    #[test]
    fn test_scheduler_cancel() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.request_frame().unwrap();
        scheduler.cancel(handle);
        assert_eq!(scheduler.pending(), None);
        assert_eq!(scheduler.cancelled, vec![handle]);
    }

    #[test]
    fn test_scheduler_failure() {
        let mut scheduler = ManualScheduler::new();
        scheduler.fail_next = true;
        assert!(scheduler.request_frame().is_err());
        assert!(scheduler.request_frame().is_ok());
    }
}
