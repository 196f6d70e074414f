//! Door open/closed storage.
//!
//! One atomic flag.  Writers are the caller's `lock`/`unlock`; readers
//! are the caller and every pending timer thread.  Release/Acquire
//! ordering makes the latest write visible to a timer that fires after it.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::app::ports::Door;

/// Plain door state.  Created closed.
#[derive(Debug, Default)]
pub struct DoorState {
    open: AtomicBool,
}

impl DoorState {
    pub const fn new() -> Self {
        Self {
            open: AtomicBool::new(false),
        }
    }
}

impl Door for DoorState {
    fn lock(&self) {
        self.open.store(false, Ordering::Release);
    }

    fn unlock(&self) {
        self.open.store(true, Ordering::Release);
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }
}
