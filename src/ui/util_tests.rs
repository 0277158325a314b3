#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Groceries", 20), "Groceries");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Entertainment", 6), "Enter…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("Dining", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("café résumé", 5), "café…");
}

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56), "$"), "$1,234.56");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0), "$"), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-475), "$"), "-$475.00");
}

#[test]
fn test_format_amount_other_symbol() {
    assert_eq!(format_amount(dec!(1000000), "€"), "€1,000,000.00");
}

#[test]
fn test_format_amount_rounds_to_two_decimals() {
    assert_eq!(format_amount(dec!(1.5), "$"), "$1.50");
}

// ── format_percent ─────────────────────────────────────────

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(dec!(35)), "35%");
    assert_eq!(format_percent(dec!(37.5)), "38%");
    assert_eq!(format_percent(dec!(33.333)), "33%");
    assert_eq!(format_percent(dec!(100.00)), "100%");
    assert_eq!(format_percent(dec!(0)), "0%");
}

// ── progress_bar ───────────────────────────────────────────

#[test]
fn test_progress_bar() {
    assert_eq!(progress_bar(dec!(0), 4), "[░░░░]");
    assert_eq!(progress_bar(dec!(50), 4), "[██░░]");
    assert_eq!(progress_bar(dec!(100), 4), "[████]");
    assert_eq!(progress_bar(dec!(99), 4), "[███░]");
}

#[test]
fn test_progress_bar_out_of_range() {
    assert_eq!(progress_bar(dec!(250), 4), "[████]");
    assert_eq!(progress_bar(dec!(-10), 4), "[░░░░]");
}

// ── Cursor ─────────────────────────────────────────────────

#[test]
fn test_cursor_step_scrolls_window() {
    let mut cursor = Cursor::default();
    for _ in 0..5 {
        cursor.step(1, 10, 3);
    }
    assert_eq!(cursor, Cursor { index: 5, offset: 3 });
}

#[test]
fn test_cursor_step_stops_at_ends() {
    let mut cursor = Cursor { index: 1, offset: 0 };
    cursor.step(1, 2, 5);
    assert_eq!(cursor.index, 1);
    cursor.step(-10, 2, 5);
    assert_eq!(cursor, Cursor::default());
}

#[test]
fn test_cursor_half_page_jump() {
    let mut cursor = Cursor::default();
    cursor.step(4, 20, 6);
    assert_eq!(cursor, Cursor { index: 4, offset: 0 });
    cursor.step(4, 20, 6);
    assert_eq!(cursor, Cursor { index: 8, offset: 3 });
    cursor.step(-4, 20, 6);
    assert_eq!(cursor, Cursor { index: 4, offset: 3 });
}

#[test]
fn test_cursor_first_and_last() {
    let mut cursor = Cursor { index: 4, offset: 4 };
    cursor.step(-1, 10, 3);
    assert_eq!(cursor, Cursor { index: 3, offset: 3 });
    cursor.last(10, 3);
    assert_eq!(cursor, Cursor { index: 9, offset: 7 });
    cursor.first();
    assert_eq!(cursor, Cursor::default());
}

#[test]
fn test_cursor_empty_list() {
    let mut cursor = Cursor { index: 2, offset: 1 };
    cursor.last(0, 5);
    assert_eq!(cursor, Cursor::default());
}

#[test]
fn test_cursor_clamp_after_shrink() {
    let mut cursor = Cursor { index: 3, offset: 3 };
    cursor.clamp(3);
    assert_eq!(cursor, Cursor { index: 2, offset: 2 });
    cursor.clamp(0);
    assert_eq!(cursor, Cursor::default());
}
