//! Input collaborator seam

use std::collections::VecDeque;

use super::time::FrameTime;
use crate::sim::{FrameSnapshot, KeyInput};

/// A discrete event from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyInput),
    /// Window closed / Ctrl-C: stop the loop this frame
    Quit,
}

/// Anything that produces input events once per frame
pub trait InputSource {
    /// Events since the previous poll. `frame` is the state the player last saw.
    fn poll(&mut self, frame: &FrameSnapshot, time: FrameTime) -> Vec<InputEvent>;
}

/// Replays a fixed timeline of events, each released on the first frame at or
/// after its timestamp
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    timeline: VecDeque<(u64, InputEvent)>,
}

impl ScriptedInput {
    /// `events` must be sorted by time
    pub fn new(events: impl IntoIterator<Item = (u64, InputEvent)>) -> Self {
        Self {
            timeline: events.into_iter().collect(),
        }
    }

    /// Type `text` at `at_ms`, one character per event
    pub fn typed(mut self, at_ms: u64, text: &str) -> Self {
        self.timeline
            .extend(text.chars().map(|c| (at_ms, InputEvent::Key(KeyInput::Character(c)))));
        self
    }

    pub fn then(mut self, at_ms: u64, event: InputEvent) -> Self {
        self.timeline.push_back((at_ms, event));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _frame: &FrameSnapshot, time: FrameTime) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Some(&(at, event)) = self.timeline.front() {
            if at > time.now_ms {
                break;
            }
            events.push(event);
            self.timeline.pop_front();
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_release_order() {
        let mut input = ScriptedInput::default()
            .typed(100, "ab")
            .then(200, InputEvent::Quit);
        let frame = FrameSnapshot::default();

        assert!(input.poll(&frame, FrameTime { now_ms: 50, dt: 0.05 }).is_empty());
        assert_eq!(
            input.poll(&frame, FrameTime { now_ms: 150, dt: 0.1 }),
            [
                InputEvent::Key(KeyInput::Character('a')),
                InputEvent::Key(KeyInput::Character('b'))
            ]
        );
        assert_eq!(input.poll(&frame, FrameTime { now_ms: 250, dt: 0.1 }), [InputEvent::Quit]);
        assert!(input.is_empty());
    }
}
