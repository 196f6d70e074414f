//! Timer delivery timing.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use timeddoor::adapters::door_timer::DoorTimerAdapter;
use timeddoor::door::DoorState;
use timeddoor::timer::Timer;
use timeddoor::{Door, Error};

use crate::mock_door::{CountingClient, RecordingSink};

#[test]
fn does_not_fire_early() {
    let sink = Arc::new(RecordingSink::default());
    let client = Arc::new(CountingClient::default());
    let start = Instant::now();

    Timer::new(sink).register(1, Some(client.clone()));

    thread::sleep(Duration::from_millis(500));
    assert_eq!(client.calls(), 0, "fired before its duration");

    thread::sleep(Duration::from_millis(1000));
    assert_eq!(client.calls(), 1);
    let fired = client.fired_at().unwrap().duration_since(start);
    assert!(fired >= Duration::from_secs(1));
    assert!(fired < Duration::from_millis(1500));
}

#[test]
fn calls_timeout_after_delay() {
    let sink = Arc::new(RecordingSink::default());
    let client = Arc::new(CountingClient::default());

    Timer::new(sink.clone()).register(1, Some(client.clone()));

    thread::sleep(Duration::from_secs(2));
    assert_eq!(client.calls(), 1);
    assert!(sink.faults().is_empty());
}

#[test]
fn absent_client_resolves_silently() {
    let sink = Arc::new(RecordingSink::default());

    Timer::new(sink.clone()).register_after(Duration::from_millis(50), None);

    thread::sleep(Duration::from_millis(300));
    assert!(sink.faults().is_empty());
}

#[test]
fn violation_from_adapter_reaches_sink() {
    let sink = Arc::new(RecordingSink::default());
    let door = Arc::new(DoorState::new());
    let adapter = Arc::new(DoorTimerAdapter::new(&door));
    door.unlock();

    Timer::new(sink.clone()).register_after(Duration::from_millis(50), Some(adapter));

    thread::sleep(Duration::from_millis(400));
    assert_eq!(sink.faults(), vec![Error::DoorLeftOpen]);
}

#[test]
fn sleep_blocks_caller() {
    let start = Instant::now();
    Timer::sleep(1);
    assert!(start.elapsed() >= Duration::from_secs(1));
}
