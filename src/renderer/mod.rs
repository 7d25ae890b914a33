//! Rendering collaborator seam
//!
//! The game core only hands out read-only [`FrameSnapshot`]s; anything that
//! can turn one into pixels (or text) implements [`Renderer`].

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use crate::sim::{FrameSnapshot, GameEvent};

/// Produces the visible frame from the current snapshot
pub trait Renderer {
    /// Draw one frame. `events` are the events of the tick that produced it.
    fn render(&mut self, frame: &FrameSnapshot, events: &[GameEvent]) -> std::io::Result<()>;
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &FrameSnapshot, _events: &[GameEvent]) -> std::io::Result<()> {
        Ok(())
    }
}
