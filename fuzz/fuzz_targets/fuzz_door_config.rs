//! Fuzz target: `DoorConfig::from_json`
//!
//! Feeds arbitrary bytes to the config loader and verifies:
//! - No panics under arbitrary input
//! - Anything accepted passes `validate()` and has a positive timeout
//!
//! cargo fuzz run fuzz_door_config

#![no_main]

use libfuzzer_sys::fuzz_target;
use timeddoor::config::DoorConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(config) = DoorConfig::from_json(text) {
        assert!(config.validate().is_ok());
        assert!(config.timeout_secs > 0);
    }
});
