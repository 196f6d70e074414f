//! Timed door — the composite.
//!
//! [`TimedDoor`] owns the door state, a fixed timeout, and one
//! long-lived [`DoorTimerAdapter`].  Every `unlock` opens the door and
//! hands the adapter to a fresh [`Timer`]; the adapter decides at expiry
//! whether the door was left open.
//!
//! ```text
//!  unlock() ──▶ DoorState::unlock ──▶ Timer::register(timeout, adapter) ──▶ return
//!                                              │ (timer thread)
//!                                              ▼
//!                                     adapter.on_timeout()
//!                                              │ open?
//!                                              ▼
//!                                   FaultSink::report(DoorLeftOpen)
//! ```
//!
//! `lock` never touches pending timers.  They fire on schedule, see a
//! closed door, and do nothing.  Several `unlock`s without a `lock` in
//! between schedule several timers, and each one that finds the door
//! open reports its own violation.

use std::sync::Arc;

use log::info;

use crate::adapters::door_timer::DoorTimerAdapter;
use crate::adapters::log_sink::LogFaultSink;
use crate::app::ports::{Door, FaultSink, TimerClient};
use crate::config::DoorConfig;
use crate::door::DoorState;
use crate::error::{Error, Result};
use crate::timer::Timer;

// ───────────────────────────────────────────────────────────────
// TimedDoor
// ───────────────────────────────────────────────────────────────

/// A door that must be re-locked within `timeout_secs` of each unlock.
pub struct TimedDoor {
    label: String,
    state: Arc<DoorState>,
    /// Watches the shared `state`, not `self`: the timer thread needs a
    /// weak handle, and this door's `is_open` reads the same flag.
    adapter: Arc<DoorTimerAdapter<DoorState>>,
    timeout_secs: u32,
    /// Where violations from timer threads are reported.
    sink: Arc<dyn FaultSink>,
}

impl TimedDoor {
    /// Construct a closed door that reports violations to the log.
    pub fn new(timeout_secs: u32) -> Result<Self> {
        Self::with_sink(timeout_secs, Arc::new(LogFaultSink::default()))
    }

    /// Construct a closed door that reports violations to `sink`.
    pub fn with_sink(timeout_secs: u32, sink: Arc<dyn FaultSink>) -> Result<Self> {
        Self::build("door".into(), timeout_secs, sink)
    }

    /// Construct from a validated [`DoorConfig`].
    pub fn from_config(config: &DoorConfig, sink: Arc<dyn FaultSink>) -> Result<Self> {
        config.validate()?;
        Self::build(config.label.clone(), config.timeout_secs, sink)
    }

    fn build(label: String, timeout_secs: u32, sink: Arc<dyn FaultSink>) -> Result<Self> {
        if timeout_secs == 0 {
            return Err(Error::InvalidConfiguration("timeout must be positive"));
        }

        let state = Arc::new(DoorState::new());
        let adapter = Arc::new(DoorTimerAdapter::new(&state));

        info!("TimedDoor '{}': created closed, timeout {}s", label, timeout_secs);
        Ok(Self {
            label,
            state,
            adapter,
            timeout_secs,
            sink,
        })
    }

    /// Configured timeout in seconds.
    pub fn timeout_secs(&self) -> u32 {
        self.timeout_secs
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Door for TimedDoor {
    fn lock(&self) {
        self.state.lock();
        info!("TimedDoor '{}': locked", self.label);
    }

    /// Open the door and start a fresh one-shot timer for it.
    ///
    /// The state write happens before registration, so the timer can
    /// never observe the door as it was before this call.
    fn unlock(&self) {
        self.state.unlock();

        let client: Arc<dyn TimerClient> = self.adapter.clone();
        Timer::new(Arc::clone(&self.sink)).register(self.timeout_secs, Some(client));

        info!(
            "TimedDoor '{}': unlocked, must re-lock within {}s",
            self.label, self.timeout_secs
        );
    }

    fn is_open(&self) -> bool {
        self.state.is_open()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
