//! Frame driver
//!
//! One logical thread: pace -> poll input -> tick -> render, until a quit
//! event arrives or the session limit runs out.

use crate::platform::{FrameClock, FrameTime, InputEvent, InputSource};
use crate::renderer::Renderer;
use crate::sim::{GameEvent, GameState, KeyInput, TickInput, WordBank, tick};

/// Whether the loop keeps going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameResult {
    Continue,
    Quit,
}

/// Totals for a whole run (kept in memory only)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub frames: u64,
    pub games_finished: u32,
    pub best_score: u64,
    pub sharks_destroyed: u32,
    pub sharks_escaped: u32,
}

impl SessionSummary {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::SharkDestroyed { .. } => self.sharks_destroyed += 1,
            GameEvent::SharkEscaped { .. } => self.sharks_escaped += 1,
            GameEvent::GameOver { final_score } => {
                self.games_finished += 1;
                self.best_score = self.best_score.max(*final_score);
            }
            _ => {}
        }
    }
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    bank: WordBank,
    render_every: u32,
    /// Events since the last rendered frame
    pending: Vec<GameEvent>,
    summary: SessionSummary,
}

impl Game {
    pub fn new(state: GameState, bank: WordBank, render_every: u32) -> Self {
        Self {
            state,
            bank,
            render_every: render_every.max(1),
            pending: Vec::new(),
            summary: SessionSummary::default(),
        }
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Run one frame at `time`
    pub fn frame(
        &mut self,
        time: FrameTime,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> FrameResult {
        let events = input.poll(&self.state.snapshot(), time);
        if events.contains(&InputEvent::Quit) {
            log::info!("Quit requested");
            return FrameResult::Quit;
        }

        let keys: Vec<KeyInput> = events
            .into_iter()
            .filter_map(|e| match e {
                InputEvent::Key(key) => Some(key),
                InputEvent::Quit => None,
            })
            .collect();

        let tick_input = TickInput {
            now_ms: time.now_ms,
            dt: time.dt,
            keys,
        };
        let events = tick(&mut self.state, &self.bank, &tick_input);
        for event in &events {
            self.summary.record(event);
        }
        self.pending.extend(events);

        if self.summary.frames % self.render_every as u64 == 0 {
            if let Err(e) = renderer.render(&self.state.snapshot(), &self.pending) {
                log::debug!("Render error: {}", e);
            }
            self.pending.clear();
        }
        self.summary.frames += 1;
        FrameResult::Continue
    }

    /// Drive frames until quit or until `limit_ms` of clock time has passed
    pub fn run(
        &mut self,
        clock: &mut dyn FrameClock,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        limit_ms: Option<u64>,
    ) -> SessionSummary {
        loop {
            let time = clock.next_frame();
            if limit_ms.is_some_and(|limit| time.now_ms >= limit) {
                log::info!("Session limit reached");
                break;
            }
            if self.frame(time, input, renderer) == FrameResult::Quit {
                break;
            }
        }
        // A session cut short still counts its score
        if !self.state.is_game_over() {
            self.summary.best_score = self.summary.best_score.max(self.state.score);
        }
        self.summary.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedStepClock, ScriptedInput};
    use crate::renderer::JsonRenderer;
    use crate::sim::Tier;
    use crate::tuning::Tuning;

    fn bank() -> WordBank {
        WordBank::from_pools([(Tier::Regular, &["reef"][..])]).unwrap()
    }

    #[test]
    fn test_quit_stops_immediately() {
        let state = GameState::new(1, Tuning::default(), 0);
        let mut game = Game::new(state, bank(), 1);
        let mut clock = FixedStepClock::new(0.05);
        let mut input = ScriptedInput::default().then(200, InputEvent::Quit);
        let mut renderer = JsonRenderer::new(Vec::new());

        let summary = game.run(&mut clock, &mut input, &mut renderer, None);
        // Frames at 50, 100, 150 ran; 200 quit before ticking
        assert_eq!(summary.frames, 3);
        assert_eq!(renderer.into_inner().iter().filter(|b| **b == b'\n').count(), 3);
    }

    #[test]
    fn test_scripted_session_scores() {
        let state = GameState::new(1, Tuning::default(), 0);
        let mut game = Game::new(state, bank(), 10);
        let mut clock = FixedStepClock::new(0.05);
        // Regular spawns at 5000 ms; type it a second later
        let mut input = ScriptedInput::default().typed(6_000, "reef");
        let mut renderer = JsonRenderer::new(Vec::new());

        let summary = game.run(&mut clock, &mut input, &mut renderer, Some(7_000));
        assert_eq!(summary.sharks_destroyed, 1);
        assert_eq!(summary.best_score, 40);
        assert_eq!(game.state.score, 40);

        // Every event reached the renderer even though most frames were skipped
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("SharkSpawned"));
        assert!(text.contains("SharkDestroyed"));
    }

    #[test]
    fn test_game_over_and_restart_are_counted() {
        let tuning = Tuning {
            max_lives: 1,
            ..Tuning::default()
        };
        let state = GameState::new(1, tuning, 0);
        let mut game = Game::new(state, bank(), 1000);
        let mut clock = FixedStepClock::new(0.1);
        let mut input = ScriptedInput::default();
        let mut renderer = crate::renderer::NullRenderer;

        // Spawned at 5 s; 960 + 80 px at >= 60 px/s is through by 23 s
        game.run(&mut clock, &mut input, &mut renderer, Some(30_000));
        assert!(game.state.is_game_over());
        assert_eq!(game.summary().games_finished, 1);
        assert_eq!(game.summary().sharks_escaped, 1);

        let over_at = game.state.game_over_at_ms;
        let mut input = ScriptedInput::default().then(0, InputEvent::Key(KeyInput::Restart));
        let result = game.frame(
            FrameTime {
                now_ms: over_at + 600,
                dt: 0.1,
            },
            &mut input,
            &mut renderer,
        );
        assert_eq!(result, FrameResult::Continue);
        assert!(!game.state.is_game_over());
    }
}
