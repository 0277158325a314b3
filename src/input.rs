//! Parsing of user-typed ledger arguments, shared by the TUI command bar and `batch` files.

use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

use crate::ledger::{CategoryUpdate, LedgerError, LedgerResult};
use crate::models::ColorTag;

static FIELD_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"(\w+)=(?:"([^"]*)"|(\S+))"#).ok());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Unknown color '{0}'. Try :colors")]
    UnknownColor(String),

    #[error("Unknown field '{0}'. Use name=, limit=, color= or spent=")]
    UnknownField(String),

    #[error("A category named '{0}' already exists")]
    DuplicateName(String),

    #[error("Nothing to change. Use key=value pairs")]
    NoFields,

    #[error("Could not read '{0}' as key=value")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub budget_limit: Decimal,
    pub color: Option<ColorTag>,
}

/// Digits with a comma every three places: `1,250` or `12,000.5`.
static GROUPED_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(?:,\d{3})+(?:\.\d*)?$").ok());

/// Parse a money amount such as `50`, `$1,250.00` or `-$4.50`.
///
/// Commas are only accepted as thousands separators.
pub fn parse_amount(s: &str) -> LedgerResult<Decimal> {
    let s = s.trim();
    let invalid = || LedgerError::InvalidNumber(s.to_string());

    let mut cleaned = s.replace('$', "");
    if cleaned.contains(',') {
        let digits = cleaned.trim_start_matches(['-', '+']);
        let grouped = GROUPED_RE.as_ref().is_some_and(|re| re.is_match(digits));
        if !grouped {
            return Err(invalid());
        }
        cleaned.retain(|c| c != ',');
    }
    if cleaned.is_empty() {
        return Err(invalid());
    }
    Decimal::from_str(&cleaned).map_err(|_| invalid())
}

/// `<name words...> <limit> [color]`
pub fn parse_add_args(args: &str) -> Result<NewCategory, InputError> {
    let mut tokens: Vec<&str> = args.split_whitespace().collect();

    let color = match tokens.last().and_then(|t| ColorTag::parse(t)) {
        Some(c) if tokens.len() >= 2 => {
            tokens.pop();
            Some(c)
        }
        _ => None,
    };

    let limit_str = tokens.pop().unwrap_or("");
    let budget_limit = parse_amount(limit_str)?;

    Ok(NewCategory {
        name: tokens.join(" "),
        budget_limit,
        color,
    })
}

/// Split `<name words...> <last>` on the final space.
pub fn split_trailing(args: &str) -> Option<(&str, &str)> {
    args.trim()
        .rsplit_once(' ')
        .map(|(head, last)| (head.trim(), last))
        .filter(|(head, _)| !head.is_empty())
}

/// Split `<name words...> key=value ...` at the first `key=`.
pub fn split_edit_target(args: &str) -> (&str, &str) {
    let args = args.trim();
    let start = FIELD_RE
        .as_ref()
        .and_then(|re| re.find(args))
        .map_or(args.len(), |m| m.start());
    (args[..start].trim(), &args[start..])
}

/// Parse `key=value` pairs (values may be double-quoted) into an update.
pub fn parse_edit_fields(args: &str) -> Result<CategoryUpdate, InputError> {
    let re = FIELD_RE
        .as_ref()
        .ok_or_else(|| InputError::Malformed(args.to_string()))?;

    let mut update = CategoryUpdate::default();
    let mut last_end = 0;
    for caps in re.captures_iter(args) {
        let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let gap = &args[last_end..whole.start()];
        if !gap.trim().is_empty() {
            return Err(InputError::Malformed(gap.trim().to_string()));
        }
        last_end = whole.end();

        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());

        match key.as_str().to_lowercase().as_str() {
            "name" => update.name = Some(value.to_string()),
            "limit" | "budget" => update.budget_limit = Some(parse_amount(value)?),
            "spent" => update.spent = Some(parse_amount(value)?),
            "color" | "colour" => {
                let color = ColorTag::parse(value)
                    .ok_or_else(|| InputError::UnknownColor(value.to_string()))?;
                update.color = Some(color);
            }
            other => return Err(InputError::UnknownField(other.to_string())),
        }
    }

    let rest = &args[last_end..];
    if !rest.trim().is_empty() {
        return Err(InputError::Malformed(rest.trim().to_string()));
    }
    if update.is_empty() {
        return Err(InputError::NoFields);
    }
    Ok(update)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
