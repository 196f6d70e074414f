//! Log-based fault sink adapter.
//!
//! Implements [`FaultSink`] by writing every fault to the `log` facade.
//! Used when nobody drains a [`ViolationMonitor`](super::monitor::ViolationMonitor).

use log::error;

use crate::app::ports::FaultSink;
use crate::error::Error;

/// Adapter that logs every fault.
pub struct LogFaultSink {
    label: String,
}

impl LogFaultSink {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for LogFaultSink {
    fn default() -> Self {
        Self::new("door")
    }
}

impl FaultSink for LogFaultSink {
    fn report(&self, fault: Error) {
        if fault.is_violation() {
            error!("VIOLATION | {} | {fault}", self.label);
        } else {
            error!("FAULT | {} | {fault}", self.label);
        }
    }
}
