//! Animation lifecycle: ticks in, one completion notification out.
//!
//! [`AnimationController`] wraps a [`SettlingEngine`] with the completion
//! bookkeeping the surrounding shell relies on: the callback fires exactly
//! once per run, whether the animation finishes on its own or is skipped,
//! even by a skip before the first tick.
//!
//! The controller is wall-clock free. The real timer lives in the runner;
//! tests drive `tick()` directly.

use tracing::debug;

use crate::engine::phase::Phase;
use crate::engine::settle::{SettlingEngine, Snapshot};

/// Drives a [`SettlingEngine`] and signals completion exactly once.
pub struct AnimationController {
    engine: SettlingEngine,
    completed: bool,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl AnimationController {
    pub fn new(engine: SettlingEngine) -> Self {
        Self {
            engine,
            completed: false,
            on_complete: None,
        }
    }

    /// Register the completion callback (builder style).
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Advance one tick. Fires the completion callback the first time the
    /// engine reports [`Phase::Done`].
    pub fn tick(&mut self) -> Phase {
        let phase = self.engine.tick();
        if phase == Phase::Done {
            self.notify();
        }
        phase
    }

    /// Cancel the animation and complete immediately.
    ///
    /// Callable at any point in the lifecycle, including before the first
    /// tick; after the first call further skips are no-ops.
    pub fn skip(&mut self) {
        self.engine.cancel();
        self.notify();
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    fn notify(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        debug!(ticks = self.engine.tick_count(), "animation complete");
        if let Some(callback) = self.on_complete.take() {
            callback();
        }
    }
}
