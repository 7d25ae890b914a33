//! One simulation step
//!
//! Order within a Playing frame: spawn, advance, apply keystrokes, then
//! remove sharks that escaped. While GameOver only a restart is looked at.

use serde::{Deserialize, Serialize};

use super::matching::{self, MatchOutcome};
use super::spawn::update_spawns;
use super::state::{GameEvent, GamePhase, GameState};
use super::words::WordBank;

/// A key event that reaches the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyInput {
    Character(char),
    Backspace,
    /// Enter: empty the typed buffer
    Clear,
    /// Space on the game-over screen
    Restart,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Monotonic clock time of this frame (ms)
    pub now_ms: u64,
    /// Seconds since the previous frame
    pub dt: f32,
    /// Keys received since the previous frame, in arrival order
    pub keys: Vec<KeyInput>,
}

/// Advance the session by one frame and report what happened
pub fn tick(state: &mut GameState, bank: &WordBank, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        if input.keys.contains(&KeyInput::Restart) && restart(state, input.now_ms) {
            events.push(GameEvent::Restarted);
        }
        return events;
    }

    update_spawns(state, bank, input.now_ms, &mut events);

    for shark in &mut state.sharks {
        shark.advance(input.dt);
    }

    for key in &input.keys {
        apply_key(state, *key, &mut events);
    }

    remove_escaped(state, input.now_ms, &mut events);
    events
}

fn apply_key(state: &mut GameState, key: KeyInput, events: &mut Vec<GameEvent>) {
    match key {
        KeyInput::Character(c) => match matching::on_character(state, c) {
            MatchOutcome::Completed { id, tier, points } => {
                events.push(GameEvent::SharkDestroyed { id, tier, points });
            }
            MatchOutcome::Miss => events.push(GameEvent::Mismatch),
            MatchOutcome::Progress { .. } | MatchOutcome::Rejected => {}
        },
        KeyInput::Backspace => matching::on_backspace(state),
        KeyInput::Clear => matching::on_clear(state),
        // Restart only means something on the game-over screen
        KeyInput::Restart => {}
    }
}

/// Remove sharks past the left edge: one life each, and the typing attempt is lost
fn remove_escaped(state: &mut GameState, now_ms: u64, events: &mut Vec<GameEvent>) {
    while let Some(idx) = state.sharks.iter().position(|s| s.has_escaped()) {
        let shark = state.sharks.remove(idx);
        state.lives = state.lives.saturating_sub(1);
        state.typed.clear();
        state.reset_all_matches();
        log::debug!(
            "{} shark #{} '{}' got through, {} lives left",
            shark.tier,
            shark.id,
            shark.word,
            state.lives
        );
        events.push(GameEvent::SharkEscaped {
            id: shark.id,
            tier: shark.tier,
            lives_left: state.lives,
        });

        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            state.game_over_at_ms = now_ms;
            log::info!("Game over - final score {}", state.score);
            events.push(GameEvent::GameOver {
                final_score: state.score,
            });
            return;
        }
    }
}

/// Restart from the game-over screen. Ignored while playing or inside the
/// debounce window that follows the game over.
pub fn restart(state: &mut GameState, now_ms: u64) -> bool {
    if state.phase != GamePhase::GameOver {
        return false;
    }
    if now_ms.saturating_sub(state.game_over_at_ms) < state.tuning.restart_debounce_ms {
        log::debug!("Restart ignored (debounce)");
        return false;
    }
    state.reset(now_ms);
    log::info!("Game restarted");
    true
}
