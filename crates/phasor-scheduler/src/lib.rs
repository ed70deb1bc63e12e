//! Periodic, cancellable animation ticks on a single-threaded runtime.
//!
//! The controller spawns its loop with [`tokio::task::spawn_local`], so it
//! must be driven from inside a [`tokio::task::LocalSet`]. The tick callback
//! runs on the same thread as everything else in that set; it can hold
//! `Rc`/`RefCell` state without locking.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, trace};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSchedule {
    period: Duration,
}

impl TickSchedule {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn from_millis(period_ms: u64) -> Self {
        Self::new(Duration::from_millis(period_ms))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time it takes for `ticks` ticks to fire after activation.
    pub fn span_for(&self, ticks: u32) -> Duration {
        self.period.saturating_mul(ticks)
    }

    /// Number of ticks fired `elapsed` after activation.
    pub fn ticks_within(&self, elapsed: Duration) -> u64 {
        if self.period.is_zero() {
            return 0;
        }
        (elapsed.as_nanos() / self.period.as_nanos()) as u64
    }
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

pub struct AnimationController {
    schedule: TickSchedule,
    job: Option<JoinHandle<()>>,
    ticks: Rc<Cell<u64>>,
}

impl AnimationController {
    pub fn new(schedule: TickSchedule) -> Self {
        Self {
            schedule,
            job: None,
            ticks: Rc::new(Cell::new(0)),
        }
    }

    pub fn schedule(&self) -> TickSchedule {
        self.schedule
    }

    pub fn is_active(&self) -> bool {
        self.job.as_ref().is_some_and(|job| !job.is_finished())
    }

    /// Ticks delivered since this controller was created.
    pub fn ticks_dispatched(&self) -> u64 {
        self.ticks.get()
    }

    /// Start ticking. Each iteration sleeps one period and then calls
    /// `on_tick`. Returns `false` without spawning when a tick loop is
    /// already running.
    ///
    /// # Panics
    ///
    /// Panics when called outside a `LocalSet` context.
    pub fn activate<F>(&mut self, mut on_tick: F) -> bool
    where
        F: FnMut() + 'static,
    {
        if self.is_active() {
            debug!("animation already active");
            return false;
        }
        let period = self.schedule.period;
        let ticks = Rc::clone(&self.ticks);
        self.job = Some(tokio::task::spawn_local(async move {
            loop {
                tokio::time::sleep(period).await;
                ticks.set(ticks.get().saturating_add(1));
                trace!(tick = ticks.get(), "animation tick");
                on_tick();
            }
        }));
        debug!(period_ms = period.as_millis() as u64, "animation activated");
        true
    }

    /// Stop ticking. The loop is parked at its sleep whenever this runs, so
    /// no tick fires afterwards. Returns `false` if nothing was running.
    pub fn deactivate(&mut self) -> bool {
        match self.job.take() {
            Some(job) => {
                let was_running = !job.is_finished();
                job.abort();
                if was_running {
                    debug!(ticks = self.ticks.get(), "animation deactivated");
                }
                was_running
            }
            None => false,
        }
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(TickSchedule::default())
    }
}

impl Drop for AnimationController {
    fn drop(&mut self) {
        if let Some(job) = self.job.take() {
            job.abort();
        }
    }
}
