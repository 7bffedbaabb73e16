//! Filters widget rendering.
//!
//! Displays the skill filter, sort directive, and reset hint.

use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the filters widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Displays the current query controls:
/// - Skill filter (selected tag or "All skills") and the vocabulary size
/// - Sort directive
pub fn render_filters(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Filters;
    let mut lines = vec![];

    let skill_style = if app.query.selected_skill.is_some() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };
    lines.push(Line::from(vec![
        Span::styled("Skill: ", Style::default().fg(Color::Cyan)),
        Span::styled(app.skill_filter_name().to_string(), skill_style),
        Span::styled(
            format!("  ({} selectable)", app.skill_options.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    lines.push(Line::from(vec![
        Span::styled("Sort: ", Style::default().fg(Color::Cyan)),
        Span::styled(app.sort_order_name(), Style::default().fg(Color::Magenta)),
    ]));

    if is_active {
        lines.push(Line::from(Span::styled(
            "Press 'x' to cycle skill, 's' to change sort, 'r' to reset, 'Esc' or 'f' to exit",
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(if is_active {
                "Filters (ACTIVE - press 'Esc' or 'f' to exit)"
            } else {
                "Filters (press 'f')"
            })
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}
