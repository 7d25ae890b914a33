//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Clock time and frame delta come in through `TickInput`
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod matching;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod words;

pub use matching::{MatchOutcome, on_backspace, on_character, on_clear};
pub use snapshot::{FrameSnapshot, SharkView};
pub use spawn::{SpawnScheduler, spawn_shark, update_spawns};
pub use state::{GameEvent, GamePhase, GameState, Shark, Tier};
pub use tick::{KeyInput, TickInput, restart, tick};
pub use words::WordBank;
