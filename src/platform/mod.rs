//! Platform abstraction layer
//!
//! Handles the host-facing side of the loop:
//! - Keyboard mapping and input sampling
//! - Frame driving (tick then render)

pub mod driver;
pub mod input;

pub use driver::{Driver, HeadlessScheduler, Scheduler};
pub use input::{Autopilot, Control, InputSource, KeyState, control_for_key};
