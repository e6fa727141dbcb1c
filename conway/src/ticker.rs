// ticker.rs - Periodic tick sources that drive a running simulation

use std::time::Duration;

use log::debug;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Source of periodic ticks, polled by the controller.
///
/// Between `start` and `stop` the ticker reports one tick per elapsed
/// period through `try_tick`. Once `stop` returns, `try_tick` reports
/// nothing until the next `start`.
pub trait Ticker {
    fn start(&mut self, period: Duration);
    fn stop(&mut self);
    fn is_active(&self) -> bool;
    /// Consumes one due tick, if any.
    fn try_tick(&mut self) -> bool;
}

/// Ticker that only fires when told to. Used to drive a controller
/// deterministically from tests.
#[derive(Debug, Default)]
pub struct ManualTicker {
    period: Option<Duration>,
    pending: u64,
    starts: u32,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `n` ticks, as if `n` periods had elapsed. Ignored while stopped.
    pub fn fire(&mut self, n: u64) {
        if self.period.is_some() {
            self.pending += n;
        }
    }

    pub fn pending(&self) -> u64 {
        self.pending
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// How many times the ticker has been started.
    pub fn starts(&self) -> u32 {
        self.starts
    }
}

impl Ticker for ManualTicker {
    fn start(&mut self, period: Duration) {
        self.period = Some(period);
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.period = None;
        self.pending = 0;
    }

    fn is_active(&self) -> bool {
        self.period.is_some()
    }

    fn try_tick(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }
}

/// Ticker backed by a `tokio::time::Interval` running as a task on the
/// given runtime.
///
/// A tick that comes due while the receiving side is busy is delayed
/// rather than skipped or doubled up. Stopping or dropping the ticker
/// aborts the task.
#[derive(Debug)]
pub struct TokioTicker {
    handle: Handle,
    active: Option<Active>,
}

#[derive(Debug)]
struct Active {
    task: JoinHandle<()>,
    ticks: UnboundedReceiver<()>,
}

impl TokioTicker {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            active: None,
        }
    }
}

impl Ticker for TokioTicker {
    fn start(&mut self, period: Duration) {
        self.stop();
        let (tx, ticks) = mpsc::unbounded_channel();
        let task = self.handle.spawn(async move {
            // First tick one full period after start, not immediately
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
        debug!("tick task started, period {period:?}");
        self.active = Some(Active { task, ticks });
    }

    fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.task.abort();
            // Receiver is dropped here with any undelivered ticks
            debug!("tick task stopped");
        }
    }

    fn is_active(&self) -> bool {
        self.active.is_some()
    }

    fn try_tick(&mut self) -> bool {
        match self.active.as_mut() {
            Some(active) => active.ticks.try_recv().is_ok(),
            None => false,
        }
    }
}

impl Drop for TokioTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
