//! Port traits — the boundary between the timer, the door domain, and
//! whatever observes faults.
//!
//! ```text
//!   Timer ──▶ TimerClient ◀── DoorTimerAdapter ──▶ Door
//!     │
//!     └──▶ FaultSink (monitor / log)
//! ```
//!
//! The [`Timer`](crate::timer::Timer) only knows [`TimerClient`] and
//! [`FaultSink`]; it has no idea doors exist.  The
//! [`DoorTimerAdapter`](crate::adapters::door_timer::DoorTimerAdapter)
//! bridges the two sides.

use crate::error::{Error, Result};

// ───────────────────────────────────────────────────────────────
// Timer client (callback: timer → anyone)
// ───────────────────────────────────────────────────────────────

/// Callback that a [`Timer`](crate::timer::Timer) invokes once on expiry.
///
/// Called from the timer's own thread.  An `Err` return is handed to the
/// timer's [`FaultSink`]; it never reaches the code that registered the
/// timer, which has long since returned.
pub trait TimerClient: Send + Sync {
    fn on_timeout(&self) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Door (domain capability)
// ───────────────────────────────────────────────────────────────

/// Open/closed door capability.
///
/// All methods take `&self`: the state is shared between the caller and
/// every pending timer thread, so implementations use interior mutability
/// that is free of data races.
pub trait Door: Send + Sync {
    /// Close the door.  Idempotent.
    fn lock(&self);

    /// Open the door.  Idempotent.
    fn unlock(&self);

    /// Current state.  No side effects.
    fn is_open(&self) -> bool;

    /// Raise the standard violation, regardless of state.
    fn throw_state(&self) -> Result<()> {
        Err(Error::DoorLeftOpen)
    }
}

// ───────────────────────────────────────────────────────────────
// Fault sink (timer thread → supervisor)
// ───────────────────────────────────────────────────────────────

/// Receives faults raised on background timing threads.
///
/// Implementations decide where faults go: a bounded channel drained by a
/// supervisor, the log, or both.
pub trait FaultSink: Send + Sync {
    fn report(&self, fault: Error);
}
