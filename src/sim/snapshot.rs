//! Read-only per-frame views handed to the renderer

use serde::Serialize;

use super::state::{Shark, Tier};

/// What the renderer needs to draw one shark
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharkView {
    pub id: u32,
    pub word: String,
    pub matched_len: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub tier: Tier,
    pub image_key: &'static str,
}

impl From<&Shark> for SharkView {
    fn from(shark: &Shark) -> Self {
        Self {
            id: shark.id,
            word: shark.word.clone(),
            matched_len: shark.matched_len(),
            x: shark.pos.x,
            y: shark.pos.y,
            width: shark.width,
            tier: shark.tier,
            image_key: shark.tier.image_key(),
        }
    }
}

/// HUD and entity state for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub score: u64,
    pub lives: u8,
    pub max_lives: u8,
    pub typed: String,
    pub game_over: bool,
    pub sharks: Vec<SharkView>,
}
