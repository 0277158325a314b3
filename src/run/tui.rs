use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::ledger::Ledger;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;

pub(crate) fn as_tui(ledger: &mut Ledger, config: &Config) -> Result<()> {
    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("tui exited with error: {e:?}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, plus the list's borders
            let content_height = f.area().height.saturating_sub(5) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app, ledger);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, ledger)?,
                InputMode::Command => handle_command_input(key, app, ledger)?,
                InputMode::Expense => handle_expense_input(key, app, ledger)?,
                InputMode::Confirm => handle_confirm_input(key, app, ledger),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    let len = ledger.len();
    let page = app.visible_rows;
    let half = (page / 2).max(1) as isize;

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.cursor.step(half, len, page);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.cursor.step(-half, len, page);
        }
        KeyCode::Char(':') => start_command(app, ""),
        KeyCode::Char('a') => start_command(app, "add "),
        KeyCode::Char('r') => start_command(app, "rename "),
        KeyCode::Char('E') => start_command(app, "edit "),
        KeyCode::Char('e') | KeyCode::Enter => {
            if ledger.is_empty() {
                app.set_status("No categories yet. Use :add <name> <limit>");
            } else {
                app.input_mode = InputMode::Expense;
                app.command_input.clear();
            }
        }
        KeyCode::Char('D') => commands::handle_command("delete", app, ledger)?,
        KeyCode::Char('j') | KeyCode::Down => app.cursor.step(1, len, page),
        KeyCode::Char('k') | KeyCode::Up => app.cursor.step(-1, len, page),
        KeyCode::Char('g') => app.cursor.first(),
        KeyCode::Char('G') => app.cursor.last(len, page),
        KeyCode::Char('1') => switch_screen(app, Screen::Budget),
        KeyCode::Char('2') => switch_screen(app, Screen::Overview),
        KeyCode::Tab => cycle_screen(app, 1),
        KeyCode::BackTab => cycle_screen(app, Screen::all().len() - 1),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
    Ok(())
}

/// What a keystroke did to the bottom-line buffer.
enum Edit {
    Submit(String),
    Cancel,
    Typing,
}

/// Shared line editing for the command and expense prompts.
fn edit_line(key: KeyEvent, buf: &mut String, accept: impl Fn(char) -> bool) -> Edit {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => Edit::Submit(std::mem::take(buf)),
        KeyCode::Esc => {
            buf.clear();
            Edit::Cancel
        }
        KeyCode::Backspace => {
            buf.pop();
            Edit::Typing
        }
        KeyCode::Char('u') if ctrl => {
            buf.clear();
            Edit::Typing
        }
        // Drop the last word
        KeyCode::Char('w') if ctrl => {
            let keep = buf.trim_end().rfind(' ').map_or(0, |pos| pos + 1);
            buf.truncate(keep);
            Edit::Typing
        }
        KeyCode::Char(c) if !ctrl && accept(c) => {
            buf.push(c);
            Edit::Typing
        }
        _ => Edit::Typing,
    }
}

fn handle_command_input(key: KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match edit_line(key, &mut app.command_input, |_| true) {
        Edit::Submit(line) => {
            app.input_mode = InputMode::Normal;
            commands::handle_command(&line, app, ledger)?;
        }
        Edit::Cancel => app.input_mode = InputMode::Normal,
        // Erasing the whole line leaves command mode
        Edit::Typing if app.command_input.is_empty() => app.input_mode = InputMode::Normal,
        Edit::Typing => {}
    }
    Ok(())
}

/// Amount prompt for the selected category.
fn handle_expense_input(key: KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    let amount_char = |c: char| c.is_ascii_digit() || matches!(c, '.' | ',' | '$' | '-');
    match edit_line(key, &mut app.command_input, amount_char) {
        Edit::Submit(amount) if !amount.trim().is_empty() => {
            app.input_mode = InputMode::Normal;
            commands::handle_command(&format!("expense {}", amount.trim()), app, ledger)?;
        }
        Edit::Submit(_) | Edit::Cancel => {
            app.input_mode = InputMode::Normal;
            app.set_status("Expense cancelled");
        }
        Edit::Typing => {}
    }
    Ok(())
}

fn handle_confirm_input(key: KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                commands::confirm(action, app, ledger);
            }
        }
        _ => {
            app.pending_action = None;
            app.set_status("Cancelled");
        }
    }
    app.input_mode = InputMode::Normal;
    app.confirm_message.clear();
}

// ── Navigation helpers ───────────────────────────────────────

fn start_command(app: &mut App, prefill: &str) {
    app.input_mode = InputMode::Command;
    app.command_input = prefill.to_string();
}

fn cycle_screen(app: &mut App, by: usize) {
    let screens = Screen::all();
    let at = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
    switch_screen(app, screens[(at + by) % screens.len()]);
}

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    app.set_status(format!("{screen}"));
}
