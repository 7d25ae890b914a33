//! JSON-lines renderer: one object per frame, for piping into other tools

use std::io::Write;

use serde::Serialize;

use crate::sim::{FrameSnapshot, GameEvent};

use super::Renderer;

#[derive(Serialize)]
struct FrameLine<'a> {
    frame: &'a FrameSnapshot,
    events: &'a [GameEvent],
}

pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, frame: &FrameSnapshot, events: &[GameEvent]) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, &FrameLine { frame, events })?;
        self.out.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Tier};
    use crate::tuning::Tuning;

    #[test]
    fn test_one_line_per_frame() {
        let mut state = GameState::new(1, Tuning::default(), 0);
        let id = state.push_shark("fin", Tier::GreatWhite, 120.0, 60.0);

        let mut renderer = JsonRenderer::new(Vec::new());
        renderer
            .render(&state.snapshot(), &[GameEvent::SharkSpawned { id, tier: Tier::GreatWhite }])
            .unwrap();
        renderer.render(&state.snapshot(), &[]).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["frame"]["sharks"][0]["word"], "fin");
        assert_eq!(value["frame"]["sharks"][0]["tier"], "great_white");
        assert_eq!(value["frame"]["sharks"][0]["image_key"], "great-white-shark");
        assert_eq!(value["events"][0]["SharkSpawned"]["tier"], "great_white");
        assert_eq!(value["frame"]["lives"], 5);
    }
}
