use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Two decimal places with comma grouping: `-1234.5` → `"-$1,234.50"`.
pub(crate) fn format_amount(val: Decimal, symbol: &str) -> String {
    let digits = format!("{:.2}", val.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{cents}")
}

/// Whole-number percentage, halves rounded up: `37.5` → `"38%"`.
pub(crate) fn format_percent(pct: Decimal) -> String {
    let rounded = pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{}%", rounded.normalize())
}

/// At most `max` chars; a clipped string ends in "…".
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().nth(max).is_none() {
        return s.to_string();
    }
    match max {
        0 => String::new(),
        _ => s.chars().take(max - 1).chain(std::iter::once('…')).collect(),
    }
}

/// `[█████░░░░░]` filled to `pct` of `width`. `pct` is clamped to `[0, 100]`.
pub(crate) fn progress_bar(pct: Decimal, width: usize) -> String {
    let pct = pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (pct * Decimal::from(width) / Decimal::ONE_HUNDRED)
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    let empty = width - filled;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Selected row of a list plus the first row in view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub(crate) index: usize,
    pub(crate) offset: usize,
}

impl Cursor {
    /// Move by `delta` rows, stopping at either end of a `len`-row list.
    pub(crate) fn step(&mut self, delta: isize, len: usize, page: usize) {
        if len == 0 {
            *self = Self::default();
            return;
        }
        let target = self.index.saturating_add_signed(delta).min(len - 1);
        self.jump(target, page);
    }

    /// Select `index` and scroll just enough to show it in a `page`-row window.
    pub(crate) fn jump(&mut self, index: usize, page: usize) {
        let page = page.max(1);
        self.index = index;
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + page {
            self.offset = index + 1 - page;
        }
    }

    pub(crate) fn first(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn last(&mut self, len: usize, page: usize) {
        self.step(isize::MAX, len, page);
    }

    /// Pull the cursor back onto a real row after the list shrinks.
    pub(crate) fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
        self.offset = self.offset.min(self.index);
    }
}
