//! Internal test modules - whitebox tests with crate access
//!
//! This module contains tests that require internal access to crate types.
//! Tests here drive the app through the acceptance harness or `TuiApp`
//! test helpers with an explicit clock.

mod key_action_tests;


// Whitebox tests with internal access
mod frame_scheduling;
