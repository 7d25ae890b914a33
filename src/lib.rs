//! Typer Shark - a real-time typing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (word bank, spawning, matching, tick)
//! - `game`: Frame driver (pace, poll input, tick, render)
//! - `renderer`: Rendering collaborator seam and text renderers
//! - `platform`: Frame pacing and input abstraction
//! - `tuning`: Data-driven game balance
//! - `settings`: Runtime preferences

pub mod autopilot;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, WordBankError};
pub use game::{Game, SessionSummary};
pub use settings::{RendererKind, Settings};
pub use tuning::{TierTuning, Tuning};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 960.0;
    pub const PLAYFIELD_HEIGHT: f32 = 540.0;

    /// Vertical band sharks may swim in (inclusive, pixels)
    pub const LANE_MIN_Y: i32 = 50;
    pub const LANE_MAX_Y: i32 = PLAYFIELD_HEIGHT as i32 - 50;

    /// Lives at session start
    pub const MAX_LIVES: u8 = 5;
    /// Maximum sharks alive at once, across all tiers
    pub const MAX_CONCURRENT_SHARKS: usize = 5;
    /// Points per character of a completed word
    pub const SCORE_PER_CHAR: u64 = 10;

    /// Rendered width of one glyph of a shark's word (monospace font)
    pub const GLYPH_WIDTH: f32 = 20.0;

    /// Restart input is ignored for this long after game over (ms)
    pub const RESTART_DEBOUNCE_MS: u64 = 500;

    /// Target frame rate of the frame driver
    pub const TARGET_FPS: u32 = 60;
    /// Frame delta clamp (seconds)
    pub const MIN_FRAME_DT: f32 = 0.001;
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Whether `c` can appear in a word and be typed by the player.
#[inline]
pub fn is_matchable(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '@'
}
