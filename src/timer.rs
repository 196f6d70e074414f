//! One-shot timer.
//!
//! A [`Timer`] schedules exactly one notification to a [`TimerClient`]
//! after a delay.  The wait runs on its own detached thread, so
//! [`Timer::register`] returns immediately.
//!
//! ```text
//!   caller ──register()──▶ spawn ──▶ return
//!                            │
//!                            ▼
//!                     sleep(duration)
//!                            │
//!                            ▼
//!                  client.on_timeout() ──Err──▶ FaultSink
//! ```
//!
//! There is no handle and no cancellation: once registered, the
//! notification is delivered.  Clients must decide what to do from the
//! state they observe at fire time.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, error, info, warn};

use crate::app::ports::{FaultSink, TimerClient};
use crate::error::Error;

/// Name given to every timing thread.
const TIMER_THREAD_NAME: &str = "oneshot-timer";

/// Fire-and-forget one-shot timer.
///
/// A timer is consumed by registration; create a fresh one per
/// notification.
pub struct Timer {
    /// Receives any error the client returns on expiry.
    sink: Arc<dyn FaultSink>,
}

impl Timer {
    pub fn new(sink: Arc<dyn FaultSink>) -> Self {
        Self { sink }
    }

    /// Notify `client` once after `duration_secs` seconds.
    ///
    /// A `None` client is allowed: the timing thread waits and exits
    /// without calling anything.  A zero duration is outside the
    /// contract; it is logged and the client is notified at once.
    pub fn register(self, duration_secs: u32, client: Option<Arc<dyn TimerClient>>) {
        if duration_secs == 0 {
            warn!("Timer: zero duration registered, firing immediately");
        }
        self.register_after(Duration::from_secs(u64::from(duration_secs)), client);
    }

    /// Same as [`register`](Self::register) with sub-second precision.
    pub fn register_after(self, delay: Duration, client: Option<Arc<dyn TimerClient>>) {
        let sink = Arc::clone(&self.sink);

        let spawned = thread::Builder::new()
            .name(TIMER_THREAD_NAME.into())
            .spawn(move || {
                // thread::sleep never returns early.
                thread::sleep(delay);

                let Some(client) = client else {
                    debug!("Timer: expired with no client");
                    return;
                };

                if let Err(fault) = client.on_timeout() {
                    error!("Timer: client raised fault after {:?}: {fault}", delay);
                    sink.report(fault);
                }
            });

        match spawned {
            Ok(_detached) => info!("Timer: registered for {:?}", delay),
            Err(e) => {
                error!("Timer: spawn failed ({e}), notification lost");
                self.sink.report(Error::TimerSpawn);
            }
        }
    }

    /// Block the calling thread for `seconds`.
    pub fn sleep(seconds: u32) {
        thread::sleep(Duration::from_secs(u64::from(seconds)));
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
