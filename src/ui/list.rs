//! Record list widget rendering.
//!
//! Displays a scrollable list of candidate or idea cards with selection
//! highlighting, plus the loading, error, and no-results states.

use crate::app::{App, LoadState, Tab};
use crate::backend::{CandidateRecord, IdeaRecord};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Lines per card (5 content lines + 1 separator).
const LINES_PER_ENTRY: u16 = 6;

/// Render the record list for the active tab.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// A failed fetch replaces the list with its error message for the rest of
/// the run. An empty result after filtering is not an error and renders a
/// distinct no-results message.
pub fn render_list(app: &App, area: Rect, buf: &mut Buffer) {
    match app.active_tab() {
        Tab::Candidates => render_candidates(app, area, buf),
        Tab::Ideas => render_ideas(app, area, buf),
    }
}

fn render_candidates(app: &App, area: Rect, buf: &mut Buffer) {
    let title = format!(
        "Candidates ({}/{})",
        app.displayed.len(),
        app.master_list.len()
    );

    match &app.candidates_state {
        LoadState::Failed(message) => {
            render_message(&title, message, Color::Red, area, buf);
            return;
        }
        LoadState::Loading => {
            render_message(&title, "Loading Talent...", Color::Gray, area, buf);
            return;
        }
        LoadState::Loaded => {}
    }

    if app.displayed.is_empty() {
        let message = if app.master_list.is_empty() {
            "No candidates have signed up yet."
        } else {
            "No candidates found matching your criteria."
        };
        render_message(&title, message, Color::Gray, area, buf);
        return;
    }

    let selected_index = app
        .selected_index
        .min(app.displayed.len().saturating_sub(1));
    let (start_idx, end_idx) = visible_window(area, app.displayed.len(), selected_index);
    let separator_line = separator(area);

    let items: Vec<ListItem> = app
        .displayed
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(end_idx - start_idx)
        .map(|(idx, candidate)| {
            candidate_item(candidate, idx == selected_index, &separator_line)
        })
        .collect();

    render_items(&title, items, selected_index, start_idx, area, buf);
}

fn render_ideas(app: &App, area: Rect, buf: &mut Buffer) {
    let title = format!("Startup Ideas ({})", app.ideas.len());

    match &app.ideas_state {
        LoadState::Failed(message) => {
            render_message(&title, message, Color::Red, area, buf);
            return;
        }
        LoadState::Loading => {
            render_message(&title, "Loading Startup Ideas...", Color::Gray, area, buf);
            return;
        }
        LoadState::Loaded => {}
    }

    if app.ideas.is_empty() {
        render_message(
            &title,
            "No ideas have been posted yet.",
            Color::Gray,
            area,
            buf,
        );
        return;
    }

    let selected_index = app.selected_index.min(app.ideas.len().saturating_sub(1));
    let (start_idx, end_idx) = visible_window(area, app.ideas.len(), selected_index);
    let separator_line = separator(area);

    let items: Vec<ListItem> = app
        .ideas
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(end_idx - start_idx)
        .map(|(idx, idea)| idea_item(idea, idx == selected_index, &separator_line))
        .collect();

    render_items(&title, items, selected_index, start_idx, area, buf);
}

/// Build the five-line card for one candidate.
fn candidate_item<'a>(
    candidate: &'a CandidateRecord,
    is_selected: bool,
    separator_line: &str,
) -> ListItem<'a> {
    let base_style = if is_selected {
        Style::default()
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let name_style = Style::default()
        .fg(if is_selected { Color::Yellow } else { Color::White })
        .add_modifier(Modifier::BOLD);

    let line1 = Line::from(vec![
        Span::styled(&candidate.full_name, name_style),
        Span::styled(
            format!("  (posted {})", candidate.format_posted()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let location = if candidate.address.is_empty() {
        "Location not specified"
    } else {
        candidate.address.as_str()
    };
    let line2 = Line::from(vec![Span::styled(
        format!("Location: {}", location),
        Style::default().fg(Color::Cyan),
    )]);

    let line3 = Line::from(vec![Span::styled(
        format!("Degree: {}", candidate.degree),
        Style::default().fg(Color::Magenta),
    )]);

    let phone = if candidate.phone_no.is_empty() {
        "N/A"
    } else {
        candidate.phone_no.as_str()
    };
    let mut line4_spans = vec![Span::styled(
        format!("Phone: {}", phone),
        Style::default().fg(Color::Yellow),
    )];
    if let Some(ref linkedin) = candidate.linkedin {
        line4_spans.push(Span::styled(
            format!("  {}", linkedin),
            Style::default().fg(Color::Blue),
        ));
    }
    let line4 = Line::from(line4_spans);

    let line5 = Line::from(vec![Span::styled(
        format!("Skills: {}", candidate.skills.join(", ")),
        Style::default().fg(Color::Green),
    )]);

    let separator_style = if is_selected {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let sep = Line::from(vec![Span::styled(
        separator_line.to_string(),
        separator_style,
    )]);

    ListItem::new(vec![line1, line2, line3, line4, line5, sep]).style(base_style)
}

/// Build the five-line card for one idea.
fn idea_item<'a>(idea: &'a IdeaRecord, is_selected: bool, separator_line: &str) -> ListItem<'a> {
    let base_style = if is_selected {
        Style::default()
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let name_style = Style::default()
        .fg(if is_selected { Color::Yellow } else { Color::White })
        .add_modifier(Modifier::BOLD);

    let mut line1_spans = vec![Span::styled(&idea.project_name, name_style)];
    if let Some(ref status) = idea.startup_status {
        line1_spans.push(Span::styled(
            format!(" [{}]", status),
            Style::default().fg(Color::Green),
        ));
    }
    let line1 = Line::from(line1_spans);

    let founder = match idea.founder_degree {
        Some(ref degree) => format!("Founder: {} ({})", idea.founder_name, degree),
        None => format!("Founder: {}", idea.founder_name),
    };
    let line2 = Line::from(vec![Span::styled(
        founder,
        Style::default().fg(Color::Cyan),
    )]);

    let line3 = Line::from(vec![Span::styled(
        format!("For: {}", idea.company_name),
        Style::default().fg(Color::Magenta),
    )]);

    let line4 = Line::from(vec![Span::styled(
        format!("\"{}\"", idea.idea_description),
        Style::default().fg(Color::Gray),
    )]);

    let looking_for = if idea.needs.is_empty() {
        format!("Founder skills: {}", idea.founder_skills.join(", "))
    } else {
        format!("Looking for: {}", idea.needs.join(", "))
    };
    let line5 = Line::from(vec![Span::styled(
        looking_for,
        Style::default().fg(Color::Yellow),
    )]);

    let separator_style = if is_selected {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let sep = Line::from(vec![Span::styled(
        separator_line.to_string(),
        separator_style,
    )]);

    ListItem::new(vec![line1, line2, line3, line4, line5, sep]).style(base_style)
}

/// Compute the visible slice, keeping the selection centered.
fn visible_window(area: Rect, total: usize, selected_index: usize) -> (usize, usize) {
    let available_height = area.height.saturating_sub(2); // borders
    let visible_entries = (available_height / LINES_PER_ENTRY).max(1) as usize;
    let center_offset = visible_entries / 2;

    let scroll_offset = selected_index.saturating_sub(center_offset);
    let max_scroll = total.saturating_sub(visible_entries);
    let scroll_offset = scroll_offset.min(max_scroll);

    (scroll_offset, (scroll_offset + visible_entries).min(total))
}

fn separator(area: Rect) -> String {
    let separator_width = area.width.saturating_sub(2).max(10) as usize;
    "─".repeat(separator_width)
}

fn render_message(title: &str, message: &str, color: Color, area: Rect, buf: &mut Buffer) {
    let list = List::new(vec![
        ListItem::new(message.to_string()).style(Style::default().fg(color)),
    ])
    .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    Widget::render(list, area, buf);
}

fn render_items(
    title: &str,
    items: Vec<ListItem>,
    selected_index: usize,
    scroll_offset: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    let relative_selected = if selected_index >= scroll_offset
        && selected_index < scroll_offset + items.len()
        && !items.is_empty()
    {
        Some(selected_index - scroll_offset)
    } else {
        None
    };

    let mut list_state = ListState::default();
    list_state.select(relative_selected);

    let list = List::new(items)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    StatefulWidget::render(list, area, buf, &mut list_state);
}
