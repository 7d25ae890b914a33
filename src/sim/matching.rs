//! Keystroke matching against the live sharks
//!
//! The typed buffer is compared with every shark's word in spawn order; the
//! first word that starts with the buffer becomes the focused shark. A
//! keystroke that leaves no shark matching throws the whole attempt away.
//! Backspace only edits the buffer and never re-runs the scan.

use super::state::{GamePhase, GameState, Tier};
use crate::is_matchable;

/// Result of feeding one character to the match engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Not a matchable character, or the game is over
    Rejected,
    /// `id` is focused with `matched` characters confirmed
    Progress { id: u32, matched: usize },
    /// `id` was fully typed and removed
    Completed { id: u32, tier: Tier, points: u64 },
    /// No shark matched; buffer and highlighting were reset
    Miss,
}

/// Apply a typed character
pub fn on_character(state: &mut GameState, c: char) -> MatchOutcome {
    if state.phase != GamePhase::Playing || !is_matchable(c) {
        return MatchOutcome::Rejected;
    }
    state.typed.push(c.to_ascii_lowercase());

    let focused = state
        .sharks
        .iter()
        .position(|s| s.word.starts_with(state.typed.as_str()));

    let Some(idx) = focused else {
        state.reset_all_matches();
        state.typed.clear();
        return MatchOutcome::Miss;
    };

    let typed_len = state.typed.len();
    for (i, shark) in state.sharks.iter_mut().enumerate() {
        if i == idx {
            shark.set_matched(typed_len);
        } else {
            shark.reset_match();
        }
    }

    if state.sharks[idx].word != state.typed {
        return MatchOutcome::Progress {
            id: state.sharks[idx].id,
            matched: typed_len,
        };
    }

    // Vec::remove keeps the scan order of the survivors
    let shark = state.sharks.remove(idx);
    let points = shark.word.len() as u64 * state.tuning.score_per_char;
    state.score = state.score.saturating_add(points);
    state.typed.clear();
    log::debug!("Destroyed {} shark #{} '{}' (+{})", shark.tier, shark.id, shark.word, points);

    MatchOutcome::Completed {
        id: shark.id,
        tier: shark.tier,
        points,
    }
}

/// Drop the last typed character. Highlighting is left as it was.
pub fn on_backspace(state: &mut GameState) {
    if state.phase == GamePhase::Playing {
        state.typed.pop();
    }
}

/// Empty the typed buffer without touching highlighting
pub fn on_clear(state: &mut GameState) {
    if state.phase == GamePhase::Playing {
        state.typed.clear();
    }
}
