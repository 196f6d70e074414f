//! Application core — the door policy, zero I/O.
//!
//! [`timed_door`] composes door state, the timeout, and the timer
//! adapter.  Everything it depends on is reached through the traits in
//! [`ports`], so tests can swap any side for a double.

pub mod ports;
pub mod timed_door;
