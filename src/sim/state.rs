//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`]. Subsystems take it
//! explicitly; there is no module-level state.

use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::snapshot::{FrameSnapshot, SharkView};
use super::spawn::SpawnScheduler;
use crate::consts::*;
use crate::tuning::Tuning;

/// Shark category. Each tier has its own word pool, spawn interval and speed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Regular,
    Tiger,
    Mutated,
    GreatWhite,
}

impl Tier {
    /// Number of tiers
    pub const COUNT: usize = 4;

    /// All tiers, in spawn-check order
    pub const ALL: [Tier; Tier::COUNT] = [Tier::Regular, Tier::Tiger, Tier::Mutated, Tier::GreatWhite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Regular => "regular",
            Tier::Tiger => "tiger",
            Tier::Mutated => "mutated",
            Tier::GreatWhite => "great_white",
        }
    }

    /// Parse the name that follows a `#` marker in the word file.
    ///
    /// Case, surrounding whitespace and `' '`/`'-'` separators are ignored, so
    /// `# Great White` and `#great-white` both name [`Tier::GreatWhite`].
    pub fn from_marker(s: &str) -> Option<Self> {
        let name: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        match name.as_str() {
            "regular" => Some(Tier::Regular),
            "tiger" => Some(Tier::Tiger),
            "mutated" => Some(Tier::Mutated),
            "great_white" | "apex" => Some(Tier::GreatWhite),
            _ => None,
        }
    }

    /// Dense index for per-tier arrays
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Image asset key the renderer draws for this tier
    pub fn image_key(&self) -> &'static str {
        match self {
            Tier::Regular => "blue-mako-shark",
            Tier::Tiger => "tiger-shark",
            Tier::Mutated => "mutated-toxic-shark",
            Tier::GreatWhite => "great-white-shark",
        }
    }

    /// Sprite size in pixels (width, height)
    pub fn sprite_size(&self) -> (f32, f32) {
        match self {
            Tier::Regular => (120.0, 70.0),
            Tier::Tiger => (150.0, 70.0),
            Tier::Mutated => (120.0, 100.0),
            Tier::GreatWhite => (200.0, 100.0),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single word target swimming toward the left edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shark {
    pub id: u32,
    /// Target word (lowercase, matchable characters only)
    pub word: String,
    pub tier: Tier,
    /// Top-left of the word; x decreases every frame, y is the lane
    pub pos: Vec2,
    /// Pixels per second, fixed at spawn
    pub speed: f32,
    /// Rendered width of the word
    pub width: f32,
    /// Length of the confirmed prefix, only written by the match engine
    matched_len: usize,
}

impl Shark {
    pub fn new(id: u32, word: impl Into<String>, tier: Tier, pos: Vec2, speed: f32, glyph_width: f32) -> Self {
        let word = word.into();
        let width = word.chars().count() as f32 * glyph_width;
        Self {
            id,
            word,
            tier,
            pos,
            speed,
            width,
            matched_len: 0,
        }
    }

    #[inline]
    pub fn matched_len(&self) -> usize {
        self.matched_len
    }

    /// Confirmed part of the word
    pub fn matched(&self) -> &str {
        &self.word[..self.matched_len]
    }

    /// Part of the word still to be typed
    pub fn remaining(&self) -> &str {
        &self.word[self.matched_len..]
    }

    /// Set the confirmed prefix length (clamped to the word length)
    pub(crate) fn set_matched(&mut self, len: usize) {
        self.matched_len = len.min(self.word.len());
    }

    pub(crate) fn reset_match(&mut self) {
        self.matched_len = 0;
    }

    /// Move toward the left edge
    pub fn advance(&mut self, dt: f32) {
        self.pos.x -= self.speed * dt;
    }

    /// True once the trailing edge of the word has left the playfield
    pub fn has_escaped(&self) -> bool {
        self.pos.x + self.width < 0.0
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Sharks spawn and swim, keystrokes are matched
    Playing,
    /// Lives ran out; only a (debounced) restart is accepted
    GameOver,
}

/// Things that happened during a tick, for logging/audio/renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SharkSpawned { id: u32, tier: Tier },
    SharkDestroyed { id: u32, tier: Tier, points: u64 },
    SharkEscaped { id: u32, tier: Tier, lives_left: u8 },
    /// A keystroke matched no live shark and the typed buffer was dropped
    Mismatch,
    GameOver { final_score: u64 },
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Balance values, fixed for the session
    pub tuning: Tuning,
    pub score: u64,
    pub lives: u8,
    /// In-progress keystroke sequence (lowercase)
    pub typed: String,
    pub phase: GamePhase,
    /// Clock time of the last Playing -> GameOver transition
    pub game_over_at_ms: u64,
    /// Live sharks in spawn order (also the match scan order)
    pub sharks: Vec<Shark>,
    /// Per-tier spawn timers
    pub spawner: SpawnScheduler,
    next_id: u32,
}

impl GameState {
    /// Start a session at clock time `now_ms`
    pub fn new(seed: u64, tuning: Tuning, now_ms: u64) -> Self {
        let lives = tuning.max_lives;
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            score: 0,
            lives,
            typed: String::new(),
            phase: GamePhase::Playing,
            game_over_at_ms: 0,
            sharks: Vec::new(),
            spawner: SpawnScheduler::new(now_ms),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Back to a fresh Playing session; the RNG stream carries on
    pub fn reset(&mut self, now_ms: u64) {
        self.score = 0;
        self.lives = self.tuning.max_lives;
        self.typed.clear();
        self.sharks.clear();
        self.phase = GamePhase::Playing;
        self.spawner.reset(now_ms);
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Spawn a shark at the right edge and return its id
    pub fn push_shark(&mut self, word: impl Into<String>, tier: Tier, lane_y: f32, speed: f32) -> u32 {
        let id = self.next_entity_id();
        let pos = Vec2::new(PLAYFIELD_WIDTH, lane_y);
        self.sharks
            .push(Shark::new(id, word, tier, pos, speed, self.tuning.glyph_width));
        id
    }

    pub fn shark(&self, id: u32) -> Option<&Shark> {
        self.sharks.iter().find(|s| s.id == id)
    }

    /// Zero every shark's confirmed prefix
    pub(crate) fn reset_all_matches(&mut self) {
        for shark in &mut self.sharks {
            shark.reset_match();
        }
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            score: self.score,
            lives: self.lives,
            max_lives: self.tuning.max_lives,
            typed: self.typed.clone(),
            game_over: self.is_game_over(),
            sharks: self.sharks.iter().map(SharkView::from).collect(),
        }
    }
}
