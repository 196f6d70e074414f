//! Timed door library.
//!
//! A door that must be re-locked within a fixed window after every
//! unlock.  A generic one-shot [`timer::Timer`] notifies a
//! [`adapters::door_timer::DoorTimerAdapter`], which checks the door at
//! expiry and raises [`error::Error::DoorLeftOpen`] if it is still open.
//! Violations are raised on the timer's thread and delivered through a
//! [`app::ports::FaultSink`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod door;
pub mod error;
pub mod timer;

pub use app::ports::{Door, FaultSink, TimerClient};
pub use app::timed_door::TimedDoor;
pub use error::{DOOR_LEFT_OPEN_MSG, Error, Result};
