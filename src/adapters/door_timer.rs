//! Door/timer adapter.
//!
//! Implements [`TimerClient`] on behalf of a [`Door`], so the generic
//! [`Timer`](crate::timer::Timer) can police a door without knowing what
//! a door is.  This is the only place the "left open" policy lives: on
//! every notification it checks the door's state *at fire time* and
//! raises the violation if it is open.  It never locks the door, never
//! retries, and cannot tell which `unlock` scheduled it.

use std::sync::{Arc, Weak};

use log::{debug, warn};

use crate::app::ports::{Door, TimerClient};
use crate::error::Result;

/// Adapter that turns a timer expiry into a door-state check.
///
/// Holds a non-owning back-reference: the door's owner keeps it alive,
/// and a notification that arrives after the door is gone is a no-op.
pub struct DoorTimerAdapter<D: Door> {
    door: Weak<D>,
}

impl<D: Door> DoorTimerAdapter<D> {
    pub fn new(door: &Arc<D>) -> Self {
        Self {
            door: Arc::downgrade(door),
        }
    }
}

impl<D: Door> TimerClient for DoorTimerAdapter<D> {
    fn on_timeout(&self) -> Result<()> {
        let Some(door) = self.door.upgrade() else {
            debug!("DoorTimerAdapter: door dropped before expiry");
            return Ok(());
        };

        if door.is_open() {
            warn!("DoorTimerAdapter: door still open at expiry");
            return door.throw_state();
        }

        debug!("DoorTimerAdapter: door closed at expiry");
        Ok(())
    }
}
