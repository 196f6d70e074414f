//! Unified error types for the timed door.
//!
//! A single `Error` enum that every component converts into.  All variants
//! are `Copy` so a fault can be handed from a timer thread to the fault
//! sink without allocation.

use core::fmt;

/// Exact text carried by every door-left-open violation.
pub const DOOR_LEFT_OPEN_MSG: &str = "Door left open too long!";

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The door was still open when its timer expired.
    DoorLeftOpen,
    /// A constructor argument is out of range (e.g. a zero timeout).
    InvalidConfiguration(&'static str),
    /// A configuration document is malformed or fails validation.
    Config(&'static str),
    /// The OS refused to create the timing thread.
    TimerSpawn,
}

impl Error {
    /// True for the door-left-open violation.
    pub const fn is_violation(&self) -> bool {
        matches!(self, Self::DoorLeftOpen)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoorLeftOpen => f.write_str(DOOR_LEFT_OPEN_MSG),
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::TimerSpawn => write!(f, "timer thread could not be spawned"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
