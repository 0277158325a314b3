#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_basic() {
    assert_eq!(parse_amount("50").unwrap(), dec!(50));
    assert_eq!(parse_amount("12.34").unwrap(), dec!(12.34));
    assert_eq!(parse_amount(" 7 ").unwrap(), dec!(7));
}

#[test]
fn test_parse_amount_with_currency() {
    assert_eq!(parse_amount("$1,250.00").unwrap(), dec!(1250));
    assert_eq!(parse_amount("-$4.50").unwrap(), dec!(-4.50));
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert_eq!(
        parse_amount("abc"),
        Err(LedgerError::InvalidNumber("abc".into()))
    );
    assert_eq!(parse_amount(""), Err(LedgerError::InvalidNumber(String::new())));
    assert_eq!(parse_amount("$"), Err(LedgerError::InvalidNumber("$".into())));
    assert!(parse_amount("1.2.3").is_err());
    assert!(parse_amount("NaN").is_err());
}

#[test]
fn test_parse_amount_thousands_separators() {
    assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
    assert_eq!(parse_amount("-$12,000").unwrap(), dec!(-12000));
    for bad in ["1,2,3", "12,34", "1,0000", ",100", "100,", "1,000.00,5"] {
        assert_eq!(
            parse_amount(bad),
            Err(LedgerError::InvalidNumber(bad.into())),
            "{bad}"
        );
    }
}

// ── parse_add_args ────────────────────────────────────────────

#[test]
fn test_add_args_name_and_limit() {
    let new = parse_add_args("Groceries 500").unwrap();
    assert_eq!(new.name, "Groceries");
    assert_eq!(new.budget_limit, dec!(500));
    assert_eq!(new.color, None);
}

#[test]
fn test_add_args_with_color() {
    let new = parse_add_args("Food & Dining $300 rose").unwrap();
    assert_eq!(new.name, "Food & Dining");
    assert_eq!(new.budget_limit, dec!(300));
    assert_eq!(new.color, Some(ColorTag::Rose));
}

#[test]
fn test_add_args_color_named_category() {
    // A lone color word is a name, not a color
    let new = parse_add_args("Blue 100").unwrap();
    assert_eq!(new.name, "Blue");
    assert_eq!(new.color, None);
}

#[test]
fn test_add_args_missing_limit() {
    assert_eq!(
        parse_add_args("Groceries rose"),
        Err(InputError::Ledger(LedgerError::InvalidNumber("Groceries".into())))
    );
    assert_eq!(
        parse_add_args(""),
        Err(InputError::Ledger(LedgerError::InvalidNumber(String::new())))
    );
}

#[test]
fn test_add_args_empty_name_left_to_ledger() {
    let new = parse_add_args("100 blue").unwrap();
    assert!(new.name.is_empty());
    assert_eq!(new.budget_limit, dec!(100));
    assert_eq!(new.color, Some(ColorTag::Blue));
}

// ── split helpers ─────────────────────────────────────────────

#[test]
fn test_split_trailing() {
    assert_eq!(split_trailing("Groceries 50"), Some(("Groceries", "50")));
    assert_eq!(
        split_trailing(" Food & Dining 12.50 "),
        Some(("Food & Dining", "12.50"))
    );
    assert_eq!(split_trailing("50"), None);
    assert_eq!(split_trailing(""), None);
}

#[test]
fn test_split_edit_target() {
    assert_eq!(
        split_edit_target("Groceries limit=600"),
        ("Groceries", "limit=600")
    );
    assert_eq!(
        split_edit_target("Food & Dining name=\"Eating Out\" color=pink"),
        ("Food & Dining", "name=\"Eating Out\" color=pink")
    );
    assert_eq!(split_edit_target("Groceries"), ("Groceries", ""));
}

// ── parse_edit_fields ─────────────────────────────────────────

#[test]
fn test_edit_fields_all_keys() {
    let update = parse_edit_fields("name=Food limit=$400 color=bg-cyan-500 spent=10.5").unwrap();
    assert_eq!(update.name.as_deref(), Some("Food"));
    assert_eq!(update.budget_limit, Some(dec!(400)));
    assert_eq!(update.color, Some(ColorTag::Cyan));
    assert_eq!(update.spent, Some(dec!(10.5)));
}

#[test]
fn test_edit_fields_quoted_name() {
    let update = parse_edit_fields("name=\"Eating Out\"").unwrap();
    assert_eq!(update.name.as_deref(), Some("Eating Out"));
    assert!(update.budget_limit.is_none());
}

#[test]
fn test_edit_fields_errors() {
    assert_eq!(parse_edit_fields(""), Err(InputError::NoFields));
    assert_eq!(
        parse_edit_fields("size=3"),
        Err(InputError::UnknownField("size".into()))
    );
    assert_eq!(
        parse_edit_fields("color=magenta"),
        Err(InputError::UnknownColor("magenta".into()))
    );
    assert_eq!(
        parse_edit_fields("limit=lots"),
        Err(InputError::Ledger(LedgerError::InvalidNumber("lots".into())))
    );
    assert_eq!(
        parse_edit_fields("limit=5 oops"),
        Err(InputError::Malformed("oops".into()))
    );
    assert_eq!(
        parse_edit_fields("junk name=x"),
        Err(InputError::Malformed("junk".into()))
    );
}

#[test]
fn test_edit_fields_negative_values_parse() {
    // Sign checks belong to the ledger
    let update = parse_edit_fields("limit=-5").unwrap();
    assert_eq!(update.budget_limit, Some(dec!(-5)));
}
