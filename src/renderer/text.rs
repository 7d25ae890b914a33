//! ASCII playfield renderer
//!
//! The playfield is sampled onto a character grid (10 px per column, 20 px
//! per row). Confirmed letters are drawn in uppercase.

use std::io::Write;

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::{FrameSnapshot, GameEvent, SharkView, Tier};

use super::Renderer;

const COL_WIDTH: f32 = 10.0;
const ROW_HEIGHT: f32 = 20.0;
const COLS: usize = (PLAYFIELD_WIDTH / COL_WIDTH) as usize;
const ROWS: usize = (PLAYFIELD_HEIGHT / ROW_HEIGHT) as usize;

/// Fin drawn in front of each word, one per tier
fn fin(tier: Tier) -> char {
    match tier {
        Tier::Regular => '<',
        Tier::Tiger => '{',
        Tier::Mutated => '%',
        Tier::GreatWhite => '#',
    }
}

/// Draws frames as text to any writer
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render a frame to lines of text (no trailing newlines)
    pub fn draw(frame: &FrameSnapshot) -> Vec<String> {
        let mut grid = vec![vec![' '; COLS]; ROWS];

        for shark in &frame.sharks {
            draw_shark(&mut grid, shark);
        }

        if frame.game_over {
            let mid = ROWS / 2;
            center(&mut grid[mid - 2], "GAME OVER");
            center(&mut grid[mid], &format!("Final Score: {}", frame.score));
            center(&mut grid[mid + 2], "Press SPACE to restart");
        }

        let border = "-".repeat(COLS);
        let mut lines = Vec::with_capacity(ROWS + 4);
        lines.push(format!(
            "Score: {}   Lives: {}/{}",
            frame.score, frame.lives, frame.max_lives
        ));
        lines.push(border.clone());
        lines.extend(grid.into_iter().map(|row| row.into_iter().collect::<String>().trim_end().to_string()));
        lines.push(border);
        lines.push(format!("> {}_", frame.typed));
        lines
    }
}

fn draw_shark(grid: &mut [Vec<char>], shark: &SharkView) {
    let row = ((shark.y / ROW_HEIGHT) as usize).min(ROWS - 1);
    let col = (shark.x / COL_WIDTH).floor() as i64;

    let glyphs = std::iter::once(fin(shark.tier)).chain(shark.word.chars().enumerate().map(|(i, c)| {
        if i < shark.matched_len {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }));

    for (i, glyph) in glyphs.enumerate() {
        let x = col - 1 + i as i64;
        if (0..COLS as i64).contains(&x) {
            grid[row][x as usize] = glyph;
        }
    }
}

fn center(row: &mut [char], text: &str) {
    let len = text.chars().count().min(row.len());
    let start = (row.len() - len) / 2;
    for (cell, c) in row[start..start + len].iter_mut().zip(text.chars()) {
        *cell = c;
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: &FrameSnapshot, _events: &[GameEvent]) -> std::io::Result<()> {
        for line in Self::draw(frame) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_draws_hud_and_matched_prefix() {
        let mut state = GameState::new(1, Tuning::default(), 0);
        state.push_shark("reef", Tier::Regular, 100.0, 60.0);
        state.sharks[0].pos.x = 200.0;
        crate::sim::on_character(&mut state, 'r');
        crate::sim::on_character(&mut state, 'e');

        let lines = TextRenderer::<Vec<u8>>::draw(&state.snapshot());
        assert_eq!(lines[0], "Score: 0   Lives: 5/5");
        assert_eq!(lines.len(), ROWS + 4);
        // y=100 -> row 5, below HUD line and border
        assert_eq!(lines[2 + 5].trim_start(), "<REef");
        assert_eq!(lines.last().unwrap(), "> re_");
    }

    #[test]
    fn test_clips_at_the_left_edge() {
        let mut state = GameState::new(1, Tuning::default(), 0);
        state.push_shark("coral", Tier::Tiger, 0.0, 60.0);
        state.sharks[0].pos.x = -20.0;
        let lines = TextRenderer::<Vec<u8>>::draw(&state.snapshot());
        assert_eq!(lines[2], "ral");
    }

    #[test]
    fn test_game_over_overlay() {
        let frame = FrameSnapshot {
            score: 340,
            game_over: true,
            max_lives: 5,
            ..Default::default()
        };
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&frame, &[]).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Final Score: 340"));
        assert!(text.contains("Press SPACE to restart"));
    }
}
