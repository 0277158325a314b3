use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ledger::Ledger;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    if ledger.is_empty() {
        render_empty(f, area);
        return;
    }

    let symbol = app.currency_symbol.as_str();
    let items: Vec<ListItem> = ledger
        .categories()
        .iter()
        .enumerate()
        .skip(app.cursor.offset)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, cat)| {
            let color = theme::status_color(cat.status(&app.thresholds));
            let pct = cat.percent_spent();

            let style = theme::row(i, i == app.cursor.index);

            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(theme::tag_color(cat.color))),
                Span::styled(format!("{:<18}", truncate(&cat.name, 17)), style),
                Span::styled(
                    format!(
                        "{:>11} of {:<11} ",
                        format_amount(cat.spent, symbol),
                        format_amount(cat.budget_limit, symbol)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(
                    progress_bar(pct, 20),
                    Style::default().fg(theme::tag_color(cat.color)),
                ),
                Span::styled(
                    format!(" {:>4} spent", format_percent(pct)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Budget for {} ({}) ", app.period, ledger.len()),
                theme::title(),
            )),
    );
    f.render_widget(list, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No categories yet", theme::muted())),
        Line::from(""),
        Line::from(Span::styled(
            "Use :add <name> <limit> [color] to create one",
            theme::muted(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Budget ", theme::title())),
    );
    f.render_widget(msg, area);
}
