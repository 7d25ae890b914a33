//! Idle/demo mode - a simulated typist plays the game
//!
//! Picks the shark closest to the edge (or keeps working on the one the
//! typed buffer already matches), types at a fixed rate and now and then
//! hits a wrong key. Presses restart on the game-over screen.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::platform::{FrameTime, InputEvent, InputSource};
use crate::settings::AutopilotSettings;
use crate::sim::{FrameSnapshot, KeyInput, SharkView};

pub struct Autopilot {
    rng: Pcg32,
    chars_per_second: f32,
    typo_chance: f32,
    /// Keystrokes owed (fractional)
    budget: f32,
}

impl Autopilot {
    pub fn new(settings: &AutopilotSettings, seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            chars_per_second: settings.chars_per_second.max(0.0),
            typo_chance: settings.typo_chance.clamp(0.0, 1.0),
            budget: 0.0,
        }
    }

    /// Shark to type next given the current buffer, skipping finished ids
    fn target<'a>(frame: &'a FrameSnapshot, typed: &str, done: &[u32]) -> Option<&'a SharkView> {
        let is_live = |s: &&SharkView| !done.contains(&s.id);
        if !typed.is_empty() {
            if let Some(focused) = frame.sharks.iter().filter(is_live).find(|s| s.word.starts_with(typed)) {
                return Some(focused);
            }
        }
        frame
            .sharks
            .iter()
            .filter(is_live)
            .min_by(|a, b| (a.x + a.width).total_cmp(&(b.x + b.width)))
    }

    fn typo(&mut self, intended: char) -> char {
        loop {
            let c = (b'a' + self.rng.random_range(0..26u8)) as char;
            if c != intended {
                return c;
            }
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, frame: &FrameSnapshot, time: FrameTime) -> Vec<InputEvent> {
        if frame.game_over {
            self.budget = 0.0;
            return vec![InputEvent::Key(KeyInput::Restart)];
        }

        self.budget += self.chars_per_second * time.dt;
        let mut events = Vec::new();
        // Buffer as the sim will see it after the keys queued so far
        let mut typed = frame.typed.clone();
        let mut done = Vec::new();

        while self.budget >= 1.0 {
            let Some(target) = Self::target(frame, &typed, &done) else {
                break;
            };
            if !target.word.starts_with(typed.as_str()) {
                // Buffer belongs to nothing alive any more
                typed.clear();
                events.push(InputEvent::Key(KeyInput::Clear));
                continue;
            }
            let Some(next) = target.word[typed.len()..].chars().next() else {
                break;
            };
            self.budget -= 1.0;

            if self.rng.random_bool(self.typo_chance as f64) {
                events.push(InputEvent::Key(KeyInput::Character(self.typo(next))));
                // A miss wipes the buffer; a lucky hit on another word is not tracked
                typed.clear();
                break;
            }

            events.push(InputEvent::Key(KeyInput::Character(next)));
            typed.push(next);
            if typed == target.word {
                done.push(target.id);
                typed.clear();
            }
        }
        // Nothing to type does not bank keystrokes for later
        self.budget = self.budget.min(1.0);
        events
    }
}
