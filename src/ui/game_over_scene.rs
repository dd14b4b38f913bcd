//! End-of-round screen with the final score and the replay/quit prompt.

use super::game_common::render_game_over_overlay;
use ratatui::{layout::Rect, style::Color, Frame};

const BACKGROUND: Color = Color::Rgb(0, 0, 255);

pub fn render_game_over_scene(frame: &mut Frame, area: Rect, final_score: u32) {
    render_game_over_overlay(
        frame,
        area,
        "Game Over!",
        &format!("Your Score: {}", final_score),
        &["Press R to Replay", "Press Q to Quit"],
        BACKGROUND,
    );
}
