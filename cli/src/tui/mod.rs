pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use taskboard_core::TaskStore;
use tracing::{error, info};

use crate::config::Config;
use crate::tui::app::{App, InputMode};

pub fn run(config: &Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(TaskStore::new(), taskboard_core::time::today(), config.show_completed);
    let poll_timeout = Duration::from_millis(config.poll_timeout_ms);
    let res = run_app(&mut terminal, &mut app, poll_timeout);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "board exited with an error");
        println!("{:?}", err);
    }
    info!(tasks = app.store.len(), "board closed");

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, poll_timeout: Duration) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    return Ok(());
                }
            }
        }
    }
}

/// Dispatches one key press. Returns `true` when the board should close.
pub fn handle_key(app: &mut App, code: KeyCode) -> bool {
    match app.input_mode {
        InputMode::Normal => {
            app.status = None;
            match code {
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.focus_right(),
                KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.focus_left(),
                KeyCode::Char(' ') => app.toggle_status(),
                KeyCode::Char('d') | KeyCode::Delete => app.delete_task(),
                KeyCode::Char('a') => app.enter_add_mode(),
                KeyCode::Char('g') => app.start_drag(),
                KeyCode::Char('c') => app.toggle_show_completed(),
                KeyCode::Char('[') => app.shift_week(-1),
                KeyCode::Char(']') => app.shift_week(1),
                KeyCode::Char('t') => app.this_week(),
                _ => {}
            }
        }
        InputMode::Adding => match code {
            KeyCode::Enter => app.submit_add(),
            KeyCode::Esc => app.exit_input_mode(),
            KeyCode::Char(c) => app.input_char(c),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            _ => {}
        },
        InputMode::Dragging => match code {
            KeyCode::Enter => {
                app.drop_task();
            }
            KeyCode::Esc => {
                app.cancel_drag();
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.drag_right(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.drag_left(),
            KeyCode::Down | KeyCode::Char('j') => app.drag_down(),
            KeyCode::Up | KeyCode::Char('k') => app.drag_up(),
            _ => {}
        },
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn app() -> App {
        App::new(TaskStore::new(), NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(), true)
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            handle_key(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_then_schedule_with_keys() {
        let mut app = app();
        press(&mut app, "a");
        press(&mut app, "ship it today");
        handle_key(&mut app, KeyCode::Enter);
        assert_eq!(app.store.len(), 1);

        press(&mut app, "gll");
        handle_key(&mut app, KeyCode::Enter);

        let task = &app.store.list()[0];
        assert_eq!(task.due_date(), NaiveDate::from_ymd_opt(2024, 6, 4));
        assert_eq!(task.priority().tier(), 2);
    }

    #[test]
    fn test_escape_cancels_drag() {
        let mut app = app();
        app.store.add("a");
        press(&mut app, "gl");
        handle_key(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.store.list()[0].due_date(), None);
    }

    #[test]
    fn test_q_only_quits_in_normal_mode() {
        let mut app = app();
        press(&mut app, "a");
        assert!(!handle_key(&mut app, KeyCode::Char('q')));
        assert_eq!(app.input, "q");
        handle_key(&mut app, KeyCode::Esc);
        assert!(handle_key(&mut app, KeyCode::Char('q')));
    }
}
