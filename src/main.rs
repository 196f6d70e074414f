//! TimedDoor demo — host simulation.
//!
//! ```text
//! ┌──────────────┐ unlock/lock ┌───────────┐ register ┌─────────┐
//! │  main loop   │────────────▶│ TimedDoor │─────────▶│  Timer  │
//! │ (supervisor) │             └───────────┘          └────┬────┘
//! │              │◀──── ViolationMonitor ◀── adapter ◀─────┘
//! └──────────────┘
//! ```
//!
//! Runs two scenarios and exits non-zero if either misbehaves:
//! 1. unlock and walk away — a violation must arrive;
//! 2. unlock then lock straight away — nothing may arrive.
//!
//! Usage: `timeddoor [config.json]`.  Log level via `RUST_LOG`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use log::{error, info};
use tracing_subscriber::EnvFilter;

use timeddoor::adapters::monitor::ViolationMonitor;
use timeddoor::config::DoorConfig;
use timeddoor::timer::Timer;
use timeddoor::{Door, TimedDoor};

/// Extra wait past the timeout before deciding no violation is coming.
const GRACE: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("TimedDoor v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            DoorConfig::from_json(&text).with_context(|| format!("loading config {path}"))?
        }
        None => {
            info!("No config given, using defaults");
            DoorConfig::default()
        }
    };

    let monitor = Arc::new(ViolationMonitor::new());
    let door = TimedDoor::from_config(&config, monitor.clone()).context("building door")?;
    let window = Duration::from_secs(u64::from(door.timeout_secs())) + GRACE;

    // ── 2. Left open ──────────────────────────────────────────
    info!("Scenario 1: unlock and leave open");
    door.unlock();
    match monitor.wait_for(window) {
        Some(fault) => info!("Scenario 1: observed '{fault}'"),
        None => bail!("scenario 1: no violation within {window:?}"),
    }
    door.lock();

    // ── 3. Closed in time ─────────────────────────────────────
    info!("Scenario 2: unlock then lock immediately");
    door.unlock();
    door.lock();
    Timer::sleep(door.timeout_secs());
    if let Some(fault) = monitor.wait_for(GRACE) {
        error!("Scenario 2: unexpected '{fault}'");
        bail!("scenario 2: door was locked in time but '{fault}' was raised");
    }
    info!("Scenario 2: no violation");

    info!("Done. Faults reported: {}", monitor.total());
    Ok(())
}
