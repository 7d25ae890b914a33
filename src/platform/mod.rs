//! Platform abstraction layer
//!
//! Handles the outside world for the frame driver:
//! - Frame pacing against a monotonic clock
//! - Input events

pub mod input;
pub mod time;

pub use input::{InputEvent, InputSource, ScriptedInput};
pub use time::{FixedStepClock, FrameClock, FramePacer, FrameTime};
