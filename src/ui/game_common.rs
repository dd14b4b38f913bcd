//! Shared UI pieces: bordered layout, score bar, and end-of-round overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field, inside the outer border
    pub content: Rect,
    /// Status bar (2 lines) under the play field
    pub status_bar: Rect,
}

/// Clear `area`, draw the titled outer border, and split the inside.
///
/// ```text
/// ┌─ Title ─────────────────────────┐
/// │                                 │
/// │   [content area]                │
/// │                                 │
/// │ [status bar - 2 lines]          │
/// └─────────────────────────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    GameLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

/// Largest rectangle inside `area` with the play field's proportions,
/// centered horizontally and vertically.
///
/// Terminal cells are roughly twice as tall as they are wide, which the
/// column count compensates for.
pub fn fit_aspect(area: Rect, world_width: f32, world_height: f32) -> Rect {
    if area.width == 0 || area.height == 0 || world_width <= 0.0 || world_height <= 0.0 {
        return Rect::new(area.x, area.y, 0, 0);
    }

    let cols_per_row = 2.0 * world_width / world_height;
    let mut height = area.height;
    let mut width = (height as f32 * cols_per_row).round() as u16;
    if width > area.width {
        width = area.width;
        height = ((width as f32 / cols_per_row).round() as u16).clamp(1, area.height);
    }
    let width = width.max(1);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Key hints shown under the score while a round is running.
const PLAY_CONTROLS: [(&str, &str); 2] = [("Space/Up", "flap"), ("Q/Esc", "quit")];

/// The two status lines: the running score, then the key hints.
fn score_bar_lines(score: u32) -> [Line<'static>; 2] {
    let score_line = Line::from(vec![
        Span::styled("Score: ", Style::default().fg(Color::Gray)),
        Span::styled(
            score.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let hints = PLAY_CONTROLS
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let sep = if i == 0 { "" } else { " | " };
            [
                Span::styled(sep, Style::default().fg(Color::DarkGray)),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect::<Vec<_>>();

    [score_line, Line::from(hints)]
}

/// Score on the first line of `area`, key hints on the second if it fits.
pub fn render_score_bar(frame: &mut Frame, area: Rect, score: u32) {
    let rows = area.height.min(2) as usize;
    let lines: Vec<Line> = score_bar_lines(score).into_iter().take(rows).collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Full-screen overlay with a title, a message, and a list of prompts,
/// vertically centered on a filled background.
pub fn render_game_over_overlay(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    prompts: &[&str],
    background: Color,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];
    for prompt in prompts {
        lines.push(Line::from(Span::styled(
            prompt.to_string(),
            Style::default().fg(Color::White),
        )));
    }

    let content_height = lines.len() as u16;
    let y_offset = inner.y + inner.height.saturating_sub(content_height) / 2;

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(
            inner.x,
            y_offset,
            inner.width,
            content_height.min(inner.height),
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_aspect_limited_by_height() {
        // 400x600 world: 4 columns per 3 rows
        let rect = fit_aspect(Rect::new(0, 0, 200, 30), 400.0, 600.0);
        assert_eq!(rect.height, 30);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.x, 80);
    }

    #[test]
    fn test_fit_aspect_limited_by_width() {
        let rect = fit_aspect(Rect::new(0, 0, 20, 40), 400.0, 600.0);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 15);
        assert_eq!(rect.y, 12);
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_score_bar_lines() {
        let [score, hints] = score_bar_lines(17);
        assert_eq!(line_text(&score), "Score: 17");
        assert_eq!(line_text(&hints), "Space/Up flap | Q/Esc quit");
    }

    #[test]
    fn test_fit_aspect_empty_area() {
        let rect = fit_aspect(Rect::new(3, 4, 0, 10), 400.0, 600.0);
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 0);
    }
}
