use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs},
    Frame,
};
use std::collections::BTreeMap;

use super::app::{App, InputMode, Screen};
use super::commands::COMMANDS;
use super::theme;
use crate::ledger::Ledger;

/// Key bindings listed above the commands in the help popup.
const KEYS: &[(&str, &str)] = &[
    ("j/k", "Move cursor"),
    ("g/G", "First/last category"),
    ("Ctrl-d/u", "Half page down/up"),
    ("1/2, Tab", "Switch tabs"),
    ("e, Enter", "Record expense"),
    ("a", "Add category"),
    ("E", "Edit selected"),
    ("r", "Rename selected"),
    ("D", "Delete selected"),
    ("Ctrl-q", "Quit"),
];

pub(crate) fn render(f: &mut Frame, app: &App, ledger: &Ledger) {
    let [tabs, body, status, command] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    draw_tabs(f, tabs, app);
    match app.screen {
        Screen::Budget => super::screens::budget::render(f, body, app, ledger),
        Screen::Overview => super::screens::overview::render(f, body, app, ledger),
    }
    draw_status(f, status, app, ledger);
    draw_prompt(f, command, app);

    if app.show_help {
        draw_help(f);
    }
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let screens = Screen::all();
    let selected = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
    let titles = screens
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}:{s}", i + 1));

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme::muted().bg(theme::BASE))
        .highlight_style(
            Style::default()
                .fg(theme::BLUE)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(theme::OVERLAY)));
    f.render_widget(tabs, area);
}

fn mode_color(mode: InputMode) -> Color {
    match mode {
        InputMode::Normal => theme::BLUE,
        InputMode::Command => theme::GREEN,
        InputMode::Expense => theme::YELLOW,
        InputMode::Confirm => theme::RED,
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let hints = match app.screen {
        Screen::Budget => "e expense  a add  D delete  ? help ",
        Screen::Overview => "Tab switch  :add  ? help ",
    };
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(hints.len() as u16)])
            .areas(area);

    let badge = Span::styled(
        format!(" {} ", app.input_mode),
        Style::default()
            .fg(theme::BASE)
            .bg(mode_color(app.input_mode))
            .add_modifier(Modifier::BOLD),
    );
    let summary = Span::raw(format!(
        " {} · {} · {} categories",
        app.screen,
        app.period,
        ledger.len()
    ));

    f.render_widget(
        Paragraph::new(Line::from(vec![badge, summary])).style(theme::bar()),
        left,
    );
    f.render_widget(
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .style(theme::bar()),
        right,
    );
}

fn draw_prompt(f: &mut Frame, area: Rect, app: &App) {
    let prompt = match app.input_mode {
        InputMode::Command => Some(vec![Span::styled(":", Style::default().fg(theme::BLUE))]),
        InputMode::Expense => Some(vec![
            Span::styled("expense> ", Style::default().fg(theme::YELLOW)),
            Span::styled(app.currency_symbol.as_str(), theme::muted()),
        ]),
        _ => None,
    };

    let line = if let Some(mut spans) = prompt {
        let width: usize = spans.iter().map(Span::width).sum();
        let cursor_x = area.x + (width + app.command_input.chars().count()) as u16;
        f.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
        spans.push(Span::styled(app.command_input.as_str(), theme::input()));
        Line::from(spans)
    } else if app.input_mode == InputMode::Confirm {
        Line::from(vec![
            Span::styled(app.confirm_message.as_str(), Style::default().fg(theme::YELLOW)),
            Span::styled(" (y/N)", Style::default().fg(theme::RED)),
        ])
    } else if app.status_message.is_empty() {
        Line::styled(" : command   e expense   ? help", theme::muted())
    } else {
        Line::styled(app.status_message.as_str(), theme::input())
    };

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme::CRUST)),
        area,
    );
}

/// Command names grouped by description, so aliases share one row.
fn command_rows() -> Vec<Row<'static>> {
    let mut grouped: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for (name, cmd) in COMMANDS.iter() {
        grouped.entry(cmd.description).or_default().push(*name);
    }

    let mut entries: Vec<(String, &'static str)> = grouped
        .into_iter()
        .map(|(desc, mut names)| {
            names.sort_by_key(|n| std::cmp::Reverse(n.len()));
            let label = names
                .iter()
                .map(|n| format!(":{n}"))
                .collect::<Vec<_>>()
                .join(" ");
            (label, desc)
        })
        .collect();
    entries.sort();

    entries
        .into_iter()
        .map(|(label, desc)| {
            Row::new(vec![
                Cell::from(Span::styled(label, Style::default().fg(theme::BLUE))),
                Cell::from(desc),
            ])
        })
        .collect()
}

fn draw_help(f: &mut Frame) {
    let section = |title: &'static str| {
        Row::new(vec![Cell::from(Span::styled(
            title,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))])
    };

    let mut rows = vec![section("Keys")];
    rows.extend(KEYS.iter().map(|(key, what)| {
        Row::new(vec![
            Cell::from(Span::styled(*key, Style::default().fg(theme::BLUE))),
            Cell::from(*what),
        ])
    }));
    rows.push(Row::new(vec![Cell::from("")]));
    rows.push(section("Commands"));
    rows.extend(command_rows());

    let height = rows.len() as u16 + 2;
    let area = centered(f.area(), 72, height);

    let table = Table::new(rows, [Constraint::Length(22), Constraint::Min(10)])
        .style(theme::text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BLUE))
                .title(Span::styled(" budgetrack ", theme::title().fg(theme::TEXT)))
                .title_bottom(Line::styled(" any key closes ", theme::muted()))
                .style(Style::default().bg(theme::BASE)),
        );

    f.render_widget(Clear, area);
    f.render_widget(table, area);
}

/// A `width` x `height` box in the middle of `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
