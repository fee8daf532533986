//! Platform abstraction layer
//!
//! Handles the parts of the outside world the simulation depends on:
//! - Time/ticks
//! - Input events

pub mod input;
pub mod time;

pub use input::{Command, InputSource, ScriptedInput};
pub use time::FrameClock;
