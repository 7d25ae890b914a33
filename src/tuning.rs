//! Data-driven game balance
//!
//! Defaults reproduce the classic arcade feel. Any field can be overridden
//! from a JSON file; missing fields keep their default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Tier;

/// Per-tier spawn and speed parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierTuning {
    /// Base interval between spawns of this tier (ms)
    pub spawn_interval_ms: u64,
    /// Slowest speed at score 0 (px/s)
    pub min_speed: f32,
    /// Fastest speed (px/s)
    pub max_speed: f32,
}

impl TierTuning {
    pub const fn new(spawn_interval_ms: u64, min_speed: f32, max_speed: f32) -> Self {
        Self {
            spawn_interval_ms,
            min_speed,
            max_speed,
        }
    }
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub max_lives: u8,
    pub max_concurrent_sharks: usize,
    pub score_per_char: u64,
    /// Added to every tier's minimum speed per point of score
    pub speed_score_factor: f32,
    /// Spawn interval multiplier applied once per difficulty level
    pub spawn_acceleration: f32,
    /// Score needed per difficulty level
    pub difficulty_score_step: u64,
    /// Spawn intervals never shrink below this (ms)
    pub min_spawn_interval_ms: u64,
    pub restart_debounce_ms: u64,
    /// Rendered width of one glyph; sets how far past the edge a word must travel
    pub glyph_width: f32,
    pub regular: TierTuning,
    pub tiger: TierTuning,
    pub mutated: TierTuning,
    pub great_white: TierTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_lives: MAX_LIVES,
            max_concurrent_sharks: MAX_CONCURRENT_SHARKS,
            score_per_char: SCORE_PER_CHAR,
            speed_score_factor: 0.05,
            spawn_acceleration: 0.90,
            difficulty_score_step: 500,
            min_spawn_interval_ms: 1_000,
            restart_debounce_ms: RESTART_DEBOUNCE_MS,
            glyph_width: GLYPH_WIDTH,
            regular: TierTuning::new(5_000, 60.0, 130.0),
            tiger: TierTuning::new(10_000, 60.0, 130.0),
            mutated: TierTuning::new(20_000, 60.0, 130.0),
            great_white: TierTuning::new(30_000, 60.0, 130.0),
        }
    }
}

impl Tuning {
    /// Load from a JSON file, rejecting values a session cannot run with
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let tuning: Self = crate::settings::load_json(path)?;
        tuning.validate().map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(tuning)
    }

    /// Check the values a session depends on: at least one life, room for a
    /// shark, sharks that move left, and spawn intervals that never hit zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_lives == 0 {
            return Err("max_lives must be at least 1".into());
        }
        if self.max_concurrent_sharks == 0 {
            return Err("max_concurrent_sharks must be at least 1".into());
        }
        if !positive(self.glyph_width) {
            return Err(format!("glyph_width must be positive, got {}", self.glyph_width));
        }
        if !positive(self.spawn_acceleration) {
            return Err(format!(
                "spawn_acceleration must be positive, got {}",
                self.spawn_acceleration
            ));
        }
        if self.speed_score_factor.is_nan() || self.speed_score_factor < 0.0 {
            return Err(format!(
                "speed_score_factor must not be negative, got {}",
                self.speed_score_factor
            ));
        }
        if self.min_spawn_interval_ms == 0 {
            return Err("min_spawn_interval_ms must be at least 1".into());
        }
        for tier in Tier::ALL {
            let t = self.tier(tier);
            if t.spawn_interval_ms == 0 {
                return Err(format!("{}.spawn_interval_ms must be at least 1", tier));
            }
            if !positive(t.min_speed) {
                return Err(format!("{}.min_speed must be positive, got {}", tier, t.min_speed));
            }
            if t.max_speed.is_nan() || t.max_speed < t.min_speed {
                return Err(format!(
                    "{}.max_speed ({}) is below min_speed ({})",
                    tier, t.max_speed, t.min_speed
                ));
            }
        }
        Ok(())
    }

    pub fn tier(&self, tier: Tier) -> &TierTuning {
        match tier {
            Tier::Regular => &self.regular,
            Tier::Tiger => &self.tiger,
            Tier::Mutated => &self.mutated,
            Tier::GreatWhite => &self.great_white,
        }
    }

    /// Difficulty level reached at `score` (0-based)
    pub fn difficulty_level(&self, score: u64) -> u32 {
        score
            .checked_div(self.difficulty_score_step)
            .unwrap_or(0)
            .min(u32::MAX as u64) as u32
    }

    /// Current spawn interval for a tier.
    ///
    /// Shrinks by `spawn_acceleration` per difficulty level and bottoms out at
    /// `min_spawn_interval_ms` (or the base interval, if that is already shorter).
    pub fn spawn_interval_ms(&self, tier: Tier, score: u64) -> u64 {
        let base = self.tier(tier).spawn_interval_ms;
        let floor = self.min_spawn_interval_ms.min(base);
        let level = self.difficulty_level(score).min(i32::MAX as u32) as i32;
        let scaled = base as f64 * (self.spawn_acceleration as f64).powi(level);
        (scaled.round() as u64).max(floor)
    }

    /// Speed sampling range `(lo, hi)` for a tier at `score`; `lo <= hi` always
    pub fn speed_range(&self, tier: Tier, score: u64) -> (f32, f32) {
        let t = self.tier(tier);
        let hi = t.max_speed;
        let lo = t.min_speed + score as f32 * self.speed_score_factor;
        (lo.min(hi), hi)
    }
}

/// Strictly above zero; NaN is not
fn positive(v: f32) -> bool {
    v > 0.0
}
