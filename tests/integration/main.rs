//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the public button API
//! against the simulated line and clock.  All tests run on the host
//! (x86_64) with no real hardware required.

mod callback_tests;
mod config_tests;
mod harness;
