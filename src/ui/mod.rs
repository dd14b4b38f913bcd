//! Terminal rendering for the play field and the game-over screen.

mod game_common;
mod game_over_scene;
mod play_scene;

use crate::session::Screen;
use ratatui::Frame;

/// Draw whichever screen the session is on.
pub fn draw(frame: &mut Frame, screen: &Screen) {
    let area = frame.size();
    match screen {
        Screen::Playing(game) => play_scene::render_play_scene(frame, area, game),
        Screen::GameOver { final_score } => {
            game_over_scene::render_game_over_scene(frame, area, *final_score)
        }
    }
}
