use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ledger::Ledger;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(10),   // Spending chart
            Constraint::Length(3), // Over-budget line
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app, ledger);
    render_spending_chart(f, chunks[1], ledger);
    render_alerts(f, chunks[2], app, ledger);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let totals = ledger.totals();
    let spent_share = if totals.total_budget.is_zero() {
        None
    } else {
        Some(
            totals
                .total_spent
                .checked_div(totals.total_budget)
                .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::MAX),
        )
    };

    render_card(
        f,
        cards[0],
        "Total Budget",
        format_amount(totals.total_budget, &app.currency_symbol),
        theme::BLUE,
        format!("{} categories", ledger.len()),
    );
    render_card(
        f,
        cards[1],
        "Total Spent",
        format_amount(totals.total_spent, &app.currency_symbol),
        theme::RED,
        spent_share.map_or_else(String::new, |p| format!("{} of budget", format_percent(p))),
    );
    render_card(
        f,
        cards[2],
        "Remaining",
        format_amount(totals.remaining, &app.currency_symbol),
        if totals.remaining >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
        String::new(),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, display: String, color: Color, subtitle: String) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::muted())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_spending_chart(f: &mut Frame, area: Rect, ledger: &Ledger) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" Spending by Category ", theme::title()));

    if ledger.totals().total_spent.is_zero() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing spent yet. Record an expense with :expense <amount>",
            theme::muted(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = ledger
        .spending_breakdown()
        .into_iter()
        .take(12)
        .map(|(cat, share)| {
            let color = theme::tag_color(cat.color);
            Bar::default()
                .value(cat.spent.round().to_u64().unwrap_or(0))
                .text_value(format_percent(share))
                .label(Line::from(truncate(&cat.name, 10)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme::BASE).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_alerts(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let over = ledger.over_budget();
    let line = if over.is_empty() {
        Line::from(Span::styled("All categories within budget", theme::muted()))
    } else {
        let names: Vec<String> = over
            .iter()
            .map(|c| {
                format!(
                    "{} (+{})",
                    c.name,
                    format_amount(-c.remaining(), &app.currency_symbol)
                )
            })
            .collect();
        Line::from(vec![
            Span::styled(
                "Over budget: ",
                Style::default().fg(theme::RED).add_modifier(Modifier::BOLD),
            ),
            Span::styled(names.join(", "), theme::text()),
        ])
    };

    let para = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Alerts ", theme::title())),
    );
    f.render_widget(para, area);
}
