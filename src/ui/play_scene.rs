//! Play field rendering.
//!
//! Uses a cell buffer for per-character color control. Pipes and the bird
//! are drawn into a 2D grid scaled from world coordinates, then stamped
//! row by row as a Paragraph.

use super::game_common::{create_game_layout, fit_aspect, render_score_bar};
use crate::game::{GameState, Rect as WorldRect};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(0, 0, 255);
const PIPE: Color = Color::Rgb(0, 255, 0);
const PIPE_EDGE: Color = Color::Rgb(0, 170, 0);
const BIRD: Color = Color::Rgb(255, 220, 0);

const PIPE_CHAR: char = '█';

/// Bird glyph by vertical velocity.
fn bird_char(velocity: f32) -> char {
    if velocity < -2.0 {
        '▲' // rising
    } else if velocity > 4.0 {
        '▼' // falling fast
    } else {
        '►'
    }
}

pub fn render_play_scene(frame: &mut Frame, area: Rect, game: &GameState) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan);

    let field = fit_aspect(
        layout.content,
        game.config.screen_width,
        game.config.screen_height,
    );
    render_play_field(frame, field, game);

    render_score_bar(frame, layout.status_bar, game.score);
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: SKY,
        }
    }
}

/// Maps world coordinates onto a grid of `cols` x `rows` cells.
struct Projection {
    x_scale: f32,
    y_scale: f32,
    cols: usize,
    rows: usize,
}

impl Projection {
    /// Half-open cell ranges covered by `rect`, clipped to the grid.
    /// Anything with a visible extent covers at least one cell.
    fn cells(&self, rect: &WorldRect) -> Option<(usize, usize, usize, usize)> {
        let left = (rect.left() * self.x_scale).floor().max(0.0);
        let right = (rect.right() * self.x_scale).ceil().min(self.cols as f32);
        let top = (rect.top() * self.y_scale).floor().max(0.0);
        let bottom = (rect.bottom() * self.y_scale).ceil().min(self.rows as f32);

        if rect.width <= 0.0 || rect.height <= 0.0 || left >= right || top >= bottom {
            return None;
        }
        Some((left as usize, right as usize, top as usize, bottom as usize))
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &GameState) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let cols = area.width as usize;
    let rows = area.height as usize;
    let projection = Projection {
        x_scale: cols as f32 / game.config.screen_width,
        y_scale: rows as f32 / game.config.screen_height,
        cols,
        rows,
    };

    let mut buffer = vec![vec![Cell::default(); cols]; rows];

    // ── Pipes ─────────────────────────────────────────────────────────
    for segment in game.segments() {
        let Some((left, right, top, bottom)) = projection.cells(&segment) else {
            continue;
        };
        for row in buffer.iter_mut().take(bottom).skip(top) {
            for (col, cell) in row.iter_mut().enumerate().take(right).skip(left) {
                let edge = col == left || col + 1 == right;
                *cell = Cell {
                    ch: PIPE_CHAR,
                    fg: if edge { PIPE_EDGE } else { PIPE },
                    bg: SKY,
                };
            }
        }
    }

    // ── Bird ──────────────────────────────────────────────────────────
    if let Some((left, right, top, bottom)) = projection.cells(&game.sprite.hitbox()) {
        let ch = bird_char(game.sprite.velocity);
        for row in buffer.iter_mut().take(bottom).skip(top) {
            for cell in row.iter_mut().take(right).skip(left) {
                *cell = Cell { ch, fg: BIRD, bg: SKY };
            }
        }
    }

    let lines: Vec<Line> = buffer
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|cell| {
                        Span::styled(
                            cell.ch.to_string(),
                            Style::default()
                                .fg(cell.fg)
                                .bg(cell.bg)
                                .add_modifier(Modifier::BOLD),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection() -> Projection {
        // 400x600 world onto 40x30 cells: 10 px per column, 20 px per row
        Projection {
            x_scale: 0.1,
            y_scale: 0.05,
            cols: 40,
            rows: 30,
        }
    }

    #[test]
    fn test_bird_covers_its_cells() {
        let cells = projection().cells(&WorldRect::new(50.0, 300.0, 40.0, 30.0));
        assert_eq!(cells, Some((5, 9, 15, 17)));
    }

    #[test]
    fn test_offscreen_rect_is_skipped() {
        let cells = projection().cells(&WorldRect::new(-100.0, 0.0, 70.0, 200.0));
        assert_eq!(cells, None);
    }

    #[test]
    fn test_partially_visible_rect_is_clipped() {
        let cells = projection().cells(&WorldRect::new(380.0, 0.0, 70.0, 200.0));
        assert_eq!(cells, Some((38, 40, 0, 10)));
    }

    #[test]
    fn test_zero_height_segment_is_skipped() {
        let cells = projection().cells(&WorldRect::new(100.0, 0.0, 70.0, 0.0));
        assert_eq!(cells, None);
    }

    #[test]
    fn test_bird_glyph_tracks_velocity() {
        assert_eq!(bird_char(-7.5), '▲');
        assert_eq!(bird_char(0.0), '►');
        assert_eq!(bird_char(8.0), '▼');
    }
}
