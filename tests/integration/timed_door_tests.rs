//! TimedDoor end to end: door, timers, adapter and monitor together.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use timeddoor::adapters::monitor::ViolationMonitor;
use timeddoor::{DOOR_LEFT_OPEN_MSG, Door, Error, TimedDoor};

fn monitored(timeout_secs: u32) -> (TimedDoor, Arc<ViolationMonitor>) {
    let monitor = Arc::new(ViolationMonitor::new());
    let door = TimedDoor::with_sink(timeout_secs, monitor.clone()).unwrap();
    (door, monitor)
}

#[test]
fn new_door_is_closed() {
    let door = TimedDoor::new(1).unwrap();
    assert!(!door.is_open());
}

#[test]
fn timeout_is_set_correctly() {
    let door = TimedDoor::new(5).unwrap();
    assert_eq!(door.timeout_secs(), 5);
}

#[test]
fn non_positive_timeout_is_rejected() {
    assert!(matches!(
        TimedDoor::new(0),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn unlock_opens_and_lock_closes() {
    let (door, _monitor) = monitored(1);
    door.unlock();
    assert!(door.is_open());
    door.lock();
    assert!(!door.is_open());
}

#[test]
fn lock_and_unlock_are_idempotent() {
    let (door, _monitor) = monitored(1);
    door.lock();
    door.lock();
    assert!(!door.is_open());
    door.unlock();
    door.unlock();
    assert!(door.is_open());
    door.lock();
}

#[test]
fn left_open_raises_violation() {
    let (door, monitor) = monitored(1);
    door.unlock();

    thread::sleep(Duration::from_secs(2));

    let fault = monitor.try_next().expect("violation expected");
    assert_eq!(fault, Error::DoorLeftOpen);
    assert_eq!(fault.to_string(), DOOR_LEFT_OPEN_MSG);
    assert_eq!(fault.to_string(), "Door left open too long!");
}

#[test]
fn no_violation_if_closed_before_timeout() {
    let (door, monitor) = monitored(1);
    door.unlock();
    door.lock();

    thread::sleep(Duration::from_secs(2));

    assert_eq!(monitor.try_next(), None);
    assert_eq!(monitor.total(), 0);
}

#[test]
fn multiple_unlocks_raise_once_per_timer() {
    let (door, monitor) = monitored(1);
    door.unlock();
    door.unlock();

    thread::sleep(Duration::from_secs(2));

    let mut faults = Vec::new();
    monitor.drain(|f| faults.push(f));
    assert!(!faults.is_empty());
    assert!(faults.iter().all(|f| f.to_string() == "Door left open too long!"));
    assert_eq!(faults.len(), 2);
}

#[test]
fn throw_state_raises_regardless_of_state() {
    let (door, _monitor) = monitored(1);
    assert_eq!(door.throw_state(), Err(Error::DoorLeftOpen));
    door.unlock();
    assert_eq!(door.throw_state(), Err(Error::DoorLeftOpen));
    door.lock();
}

#[test]
fn dropped_door_does_not_raise() {
    let (door, monitor) = monitored(1);
    door.unlock();
    drop(door);

    thread::sleep(Duration::from_secs(2));

    assert_eq!(monitor.total(), 0);
}

#[test]
fn reopened_door_is_caught_by_earlier_timer() {
    let (door, monitor) = monitored(1);
    door.unlock();
    door.lock();
    thread::sleep(Duration::from_millis(300));
    door.unlock();

    // First timer fires at ~1.0s and sees the reopened door.
    assert_eq!(
        monitor.wait_for(Duration::from_millis(1200)),
        Some(Error::DoorLeftOpen)
    );
    door.lock();
}
