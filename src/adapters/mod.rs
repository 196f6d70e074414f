//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter        | Implements   | Connects to                     |
//! |----------------|--------------|---------------------------------|
//! | `door_timer`   | TimerClient  | a `Door` (weak back-reference)  |
//! | `log_sink`     | FaultSink    | `log` facade                    |
//! | `monitor`      | FaultSink    | bounded channel for a supervisor|

pub mod door_timer;
pub mod log_sink;
pub mod monitor;
