//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::ForgeApp;
use crate::shared;

/// How long to wait for input before advancing animations. Short enough
/// that a close is honored promptly during any reveal delay.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Launch the TUI application.
pub fn run(mut app: ForgeApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop: draw, poll for input, tick.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut ForgeApp,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(TICK_INTERVAL).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            if let Event::Key(key) = event
                && key.kind == KeyEventKind::Press
            {
                handle_key(app, key);
            }
        }

        app.on_tick();
    }
}

/// Handle keyboard input: global shortcuts first, then the app.
fn handle_key(app: &mut ForgeApp, key: crossterm::event::KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    if key.code == KeyCode::Char('?') && app.popup.is_none() && !app.summary.is_editing() {
        app.show_help = true;
        return;
    }

    app.handle_key(key);
}

/// Main draw function.
fn draw(frame: &mut Frame, app: &ForgeApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Summary
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    app.summary
        .draw(frame, chunks[0], &app.draft, app.last_roll.as_ref());

    if let Some(popup) = &app.popup {
        popup.as_popup().draw(frame);
    }

    let status =
        Paragraph::new(app.status_hint()).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[1]);

    if app.show_help {
        shared::draw_help_popup(frame);
    }
}
