//! Per-tier spawn timers
//!
//! Each tier is `Idle(last_spawn)` until its interval has elapsed, then
//! `Ready`. A ready tier under the concurrency cap makes a spawn attempt and
//! goes back to `Idle(now)` - even when its word pool turns out to be empty,
//! so an empty tier just keeps re-arming without ever producing a shark.

use rand::Rng;

use super::state::{GameEvent, GameState, Tier};
use super::words::WordBank;
use crate::consts::{LANE_MAX_Y, LANE_MIN_Y};
use crate::error::WordBankError;

/// Last-spawn clock time per tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnScheduler {
    last_spawn_ms: [u64; Tier::COUNT],
}

impl SpawnScheduler {
    /// All timers start at `now_ms`
    pub fn new(now_ms: u64) -> Self {
        Self {
            last_spawn_ms: [now_ms; Tier::COUNT],
        }
    }

    pub fn reset(&mut self, now_ms: u64) {
        self.last_spawn_ms = [now_ms; Tier::COUNT];
    }

    pub fn last_spawn_ms(&self, tier: Tier) -> u64 {
        self.last_spawn_ms[tier.index()]
    }

    /// True once `interval_ms` has elapsed since the tier's last spawn
    pub fn is_ready(&self, tier: Tier, now_ms: u64, interval_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_spawn_ms(tier)) >= interval_ms
    }

    fn rearm(&mut self, tier: Tier, now_ms: u64) {
        self.last_spawn_ms[tier.index()] = now_ms;
    }
}

/// Run one scheduler step: every ready tier gets one spawn attempt while the
/// live count is under the cap.
pub fn update_spawns(state: &mut GameState, bank: &WordBank, now_ms: u64, events: &mut Vec<GameEvent>) {
    for tier in Tier::ALL {
        if state.sharks.len() >= state.tuning.max_concurrent_sharks {
            break;
        }
        let interval = state.tuning.spawn_interval_ms(tier, state.score);
        if !state.spawner.is_ready(tier, now_ms, interval) {
            continue;
        }

        state.spawner.rearm(tier, now_ms);
        match spawn_shark(state, bank, tier) {
            Ok(id) => events.push(GameEvent::SharkSpawned { id, tier }),
            Err(e) => log::debug!("Skipping {} spawn: {}", tier, e),
        }
    }
}

/// Create one shark of `tier`: random word, random lane, and a speed drawn
/// from the tier's range at the current score.
pub fn spawn_shark(state: &mut GameState, bank: &WordBank, tier: Tier) -> Result<u32, WordBankError> {
    let word = bank.pick(tier, &mut state.rng)?.to_owned();
    let lane_y = state.rng.random_range(LANE_MIN_Y..=LANE_MAX_Y) as f32;
    let (lo, hi) = state.tuning.speed_range(tier, state.score);
    let speed = state.rng.random_range(lo..=hi);

    let id = state.push_shark(word, tier, lane_y, speed);
    log::debug!("Spawned {} shark #{} at y={} speed={:.1}", tier, id, lane_y, speed);
    Ok(id)
}
