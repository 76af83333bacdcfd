//! Repeating frame tasks with explicit cancellation.
//!
//! A [`Ticker`] wraps a per-frame callback. Whoever drives it (the browser's
//! animation-frame loop, or a test calling [`Ticker::step`] by hand) asks it to
//! step once per frame and reschedules only while the step answers
//! [`Schedule::Continue`]. Cancelling the shared [`CancelHandle`] stops the
//! task before its next step.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

use std::cell::Cell;
use std::rc::Rc;

/// What a frame callback wants next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Run again on the next frame.
    Continue,
    /// Stop; the task can be restarted later by the owner.
    Stop,
}

/// Shared stop flag for a running task.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Rc<Cell<bool>>);

impl CancelHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// A frame callback plus its lifecycle bookkeeping.
pub struct Ticker<F> {
    handle: CancelHandle,
    frame: F,
    finished: bool,
}

impl<F> Ticker<F>
where
    F: FnMut(f64) -> Schedule,
{
    #[must_use]
    pub fn new(handle: CancelHandle, frame: F) -> Self {
        Self { handle, frame, finished: false }
    }

    /// Run one frame at timestamp `now_ms` (milliseconds, monotonic).
    pub fn step(&mut self, now_ms: f64) -> Schedule {
        if self.finished || self.handle.is_cancelled() {
            self.finished = true;
            return Schedule::Stop;
        }
        let next = (self.frame)(now_ms);
        if next == Schedule::Stop {
            self.finished = true;
        }
        next
    }
}
