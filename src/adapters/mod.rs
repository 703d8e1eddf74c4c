//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter | Implements  | Connects to                          |
//! |---------|-------------|--------------------------------------|
//! | `hal`   | LevelSource | any embedded-hal 1.0 `InputPin`      |
//! | `time`  | Clock       | ESP32 system timer / host `Instant`  |
//! | `sim`   | LevelSource | in-memory line for tests, simulation |
//! |         | Clock       | manually advanced clock              |

pub mod hal;
pub mod sim;
pub mod time;
