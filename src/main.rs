//! NexusLink TUI - Terminal client for browsing the NexusLink talent platform.
//!
//! Main entry point and event loop for the application.

mod app;
mod backend;
mod config;
mod query;
mod ui;

use app::{App, Tab, UiMode};
use backend::BackendClient;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Main application entry point.
///
/// # Details
/// Loads configuration, fetches the candidate and idea collections once,
/// then initializes the terminal and runs the event loop. A failed fetch
/// leaves that tab in its error state for the rest of the run.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load(None)?;
    let client = BackendClient::new(&config)?;

    let mut app = App::new();

    match client.fetch_candidates().await {
        Ok(records) => {
            let count = records.len();
            app.set_candidates(records);
            app.set_status(format!("Loaded {} candidates", count));
        }
        Err(e) => {
            eprintln!("Error fetching candidates: {}", e);
            app.set_candidates_error(e.to_string());
        }
    }

    match client.fetch_ideas().await {
        Ok(records) => app.set_ideas(records),
        Err(e) => {
            eprintln!("Error fetching ideas: {}", e);
            app.set_ideas_error(e.to_string());
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Render the complete UI.
///
/// # Details
/// Lays out and renders tabs, search bar, filters, record list, and the
/// status bar.
fn render_ui(f: &mut ratatui::Frame, app: &App) {
    let chunks = layout_chunks(f.area());

    ui::render_tabs(app, chunks[0], f.buffer_mut());
    ui::render_search(app, chunks[1], f.buffer_mut());
    ui::render_filters(app, chunks[2], f.buffer_mut());
    ui::render_list(app, chunks[3], f.buffer_mut());

    let status_text = app.status_message.as_deref().unwrap_or(
        "q: quit | /: search | f: filters | x: skill | s: sort | r: reset | Tab: switch view",
    );
    let status = ratatui::widgets::Paragraph::new(ratatui::text::Line::from(status_text));
    f.render_widget(status, chunks[4]);
}

/// Split the frame into the fixed vertical layout.
fn layout_chunks(area: ratatui::layout::Rect) -> std::rc::Rc<[ratatui::layout::Rect]> {
    ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Length(3), // Tabs
            ratatui::layout::Constraint::Length(3), // Search bar
            ratatui::layout::Constraint::Length(5), // Filters
            ratatui::layout::Constraint::Min(0),    // Record list
            ratatui::layout::Constraint::Length(1), // Status bar
        ])
        .split(area)
}

/// Main event loop.
///
/// # Details
/// All query mutations run synchronously on this loop; every change to the
/// search term, skill selection, or sort directive re-derives the displayed
/// list before the next draw.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let mut list_area = ratatui::layout::Rect::default();

    loop {
        terminal.draw(|f| {
            list_area = layout_chunks(f.area())[3]; // for mouse click mapping
            render_ui(f, app);
        })?;

        // Non-blocking event polling keeps the UI responsive.
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    match app.mode {
                        UiMode::List => match key.code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                            KeyCode::Enter if app.active_tab() == Tab::Candidates => {
                                let contact = app.selected_candidate().map(|c| match c.linkedin {
                                    Some(ref linkedin) => {
                                        format!("{}: {} | {}", c.full_name, c.phone_no, linkedin)
                                    }
                                    None => format!("{}: {}", c.full_name, c.phone_no),
                                });
                                if let Some(contact) = contact {
                                    app.set_status(contact);
                                }
                            }
                            KeyCode::Char('/') if app.active_tab() == Tab::Candidates => {
                                app.mode = UiMode::Search;
                            }
                            KeyCode::Char('f') if app.active_tab() == Tab::Candidates => {
                                app.mode = UiMode::Filters;
                            }
                            KeyCode::Char('s') if app.active_tab() == Tab::Candidates => {
                                app.cycle_sort_order();
                                app.set_status(format!("Sort: {}", app.sort_order_name()));
                            }
                            KeyCode::Char('x') if app.active_tab() == Tab::Candidates => {
                                app.cycle_skill_filter();
                                app.set_status(format!("Skill: {}", app.skill_filter_name()));
                            }
                            KeyCode::Char('r') if app.active_tab() == Tab::Candidates => {
                                app.reset_query();
                                app.set_status("Filters reset".to_string());
                            }
                            KeyCode::Char('1') => app.switch_tab(Tab::Candidates),
                            KeyCode::Char('2') => app.switch_tab(Tab::Ideas),
                            KeyCode::Tab => {
                                let next = match app.active_tab() {
                                    Tab::Candidates => Tab::Ideas,
                                    Tab::Ideas => Tab::Candidates,
                                };
                                app.switch_tab(next);
                            }
                            KeyCode::Char('c')
                                if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                            {
                                break;
                            }
                            _ => {}
                        },
                        UiMode::Search => match key.code {
                            KeyCode::Enter | KeyCode::Esc => {
                                app.mode = UiMode::List;
                            }
                            KeyCode::Backspace => {
                                app.remove_search_char();
                            }
                            KeyCode::Char(c) => {
                                app.add_search_char(c);
                            }
                            _ => {}
                        },
                        UiMode::Filters => match key.code {
                            KeyCode::Esc | KeyCode::Char('f') => {
                                app.mode = UiMode::List;
                            }
                            KeyCode::Char('s') => {
                                app.cycle_sort_order();
                                app.set_status(format!("Sort: {}", app.sort_order_name()));
                            }
                            KeyCode::Char('x') => {
                                app.cycle_skill_filter();
                                app.set_status(format!("Skill: {}", app.skill_filter_name()));
                            }
                            KeyCode::Char('r') => {
                                app.reset_query();
                                app.set_status("Filters reset".to_string());
                            }
                            _ => {}
                        },
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, list_area),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Handle mouse events (scroll and click).
///
/// # Details
/// Scroll moves the selection; a left click inside the list area selects
/// the clicked card.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, list_area: ratatui::layout::Rect) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            if app.mode == UiMode::List {
                app.move_up();
            }
        }
        MouseEventKind::ScrollDown => {
            if app.mode == UiMode::List {
                app.move_down();
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            // Each card takes 6 lines; skip the top border.
            if app.mode == UiMode::List
                && mouse.column >= list_area.x
                && mouse.column < list_area.x + list_area.width
                && mouse.row > list_area.y
                && mouse.row < list_area.y + list_area.height
            {
                let lines_per_entry = 6;
                let click_y = mouse.row - list_area.y - 1;
                let index = (click_y / lines_per_entry) as usize;
                if index < app.current_list_len() {
                    app.selected_index = index;
                }
            }
        }
        _ => {}
    }
}
