//! Catppuccin Mocha base colors, with the category palette on top.

use ratatui::style::{Color, Modifier, Style};

use crate::models::{BudgetStatus, ColorTag};

pub(crate) const CRUST: Color = Color::Rgb(24, 24, 37);
pub(crate) const BASE: Color = Color::Rgb(30, 30, 46);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const SUBTEXT: Color = Color::Rgb(127, 132, 156);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);

pub(crate) const BLUE: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const PEACH: Color = Color::Rgb(250, 179, 135);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);

/// Tailwind 500 shades of the category palette.
pub(crate) fn tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Emerald => Color::Rgb(16, 185, 129),
        ColorTag::Indigo => Color::Rgb(99, 102, 241),
        ColorTag::Amber => Color::Rgb(245, 158, 11),
        ColorTag::Rose => Color::Rgb(244, 63, 94),
        ColorTag::Blue => Color::Rgb(59, 130, 246),
        ColorTag::Purple => Color::Rgb(168, 85, 247),
        ColorTag::Pink => Color::Rgb(236, 72, 153),
        ColorTag::Cyan => Color::Rgb(6, 182, 212),
        ColorTag::Slate => Color::Rgb(100, 116, 139),
    }
}

pub(crate) fn status_color(status: BudgetStatus) -> Color {
    match status {
        BudgetStatus::OnTrack => GREEN,
        BudgetStatus::NearLimit => YELLOW,
        BudgetStatus::Critical => PEACH,
        BudgetStatus::OverBudget => RED,
    }
}

pub(crate) fn text() -> Style {
    Style::new().fg(TEXT)
}

pub(crate) fn muted() -> Style {
    Style::new().fg(SUBTEXT)
}

pub(crate) fn title() -> Style {
    muted().add_modifier(Modifier::BOLD)
}

/// Striped list rows; the selected row is inverted onto the accent.
pub(crate) fn row(index: usize, selected: bool) -> Style {
    match (selected, index % 2) {
        (true, _) => Style::new().fg(BASE).bg(BLUE),
        (false, 0) => text().bg(SURFACE),
        (false, _) => text(),
    }
}

/// Status bar strip.
pub(crate) fn bar() -> Style {
    muted().bg(SURFACE)
}

/// Typed input and messages on the bottom line.
pub(crate) fn input() -> Style {
    text().bg(CRUST)
}
