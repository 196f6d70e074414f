//! Violation monitor.
//!
//! Uses an `embassy-sync` bounded MPMC channel to carry faults from the
//! detached timer threads to whoever supervises the door (a main loop,
//! a test).  Timer threads produce; the supervisor drains.
//!
//! ```text
//! ┌──────────────┐   Error   ┌──────────────────┐   try_next() ┌────────────┐
//! │ Timer thread │──────────▶│ ViolationMonitor │─────────────▶│ Supervisor │
//! │ Timer thread │──────────▶│  (bounded queue) │   drain()    │            │
//! └──────────────┘           └──────────────────┘              └────────────┘
//! ```
//!
//! A full queue drops the fault from the queue but still counts it in
//! [`ViolationMonitor::total`] and logs a warning.

use core::sync::atomic::{AtomicU32, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

use crate::app::ports::FaultSink;
use crate::error::Error;

/// Queue depth for pending faults.
const FAULT_DEPTH: usize = 16;

/// Poll interval used by [`ViolationMonitor::wait_for`].
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Fault sink backed by a bounded channel.
pub struct ViolationMonitor {
    queue: Channel<CriticalSectionRawMutex, Error, FAULT_DEPTH>,
    total: AtomicU32,
    dropped: AtomicU32,
}

impl Default for ViolationMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ViolationMonitor {
    pub const fn new() -> Self {
        Self {
            queue: Channel::new(),
            total: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Pop the oldest pending fault, if any.
    pub fn try_next(&self) -> Option<Error> {
        self.queue.try_receive().ok()
    }

    /// Drain all pending faults into a callback, oldest first.
    pub fn drain(&self, mut handler: impl FnMut(Error)) {
        while let Some(fault) = self.try_next() {
            handler(fault);
        }
    }

    /// Wait up to `timeout` for the next fault.
    ///
    /// A timeout too large to represent as a deadline (e.g.
    /// `Duration::MAX`) waits until a fault arrives.
    pub fn wait_for(&self, timeout: Duration) -> Option<Error> {
        let deadline = Instant::now().checked_add(timeout);
        loop {
            if let Some(fault) = self.try_next() {
                return Some(fault);
            }
            let nap = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return None;
                    }
                    POLL_INTERVAL.min(deadline - now)
                }
                None => POLL_INTERVAL,
            };
            thread::sleep(nap);
        }
    }

    /// Faults currently queued.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Every fault ever reported, including dropped ones.
    pub fn total(&self) -> u32 {
        self.total.load(Ordering::Acquire)
    }

    /// Faults that did not fit in the queue.
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Acquire)
    }
}

impl FaultSink for ViolationMonitor {
    fn report(&self, fault: Error) {
        self.total.fetch_add(1, Ordering::AcqRel);
        if self.queue.try_send(fault).is_err() {
            self.dropped.fetch_add(1, Ordering::AcqRel);
            warn!("ViolationMonitor: queue full, dropped fault: {fault}");
        }
    }
}
