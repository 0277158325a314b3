//! Line-oriented ledger scripts for `budgetrack batch <file>`.
//!
//! ```text
//! # comment
//! add Groceries 500 emerald
//! expense Groceries 42.50
//! edit Dining limit=350 name="Eating Out"
//! delete Transport
//! ```

use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

use crate::input::{parse_add_args, parse_amount, parse_edit_fields, split_edit_target, split_trailing, InputError};
use crate::ledger::{Ledger, LedgerError};
use crate::models::{CategoryId, ColorTag};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum BatchError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Category '{0}' not found")]
    UnknownCategory(String),

    #[error("Unknown command '{0}'. Use add, expense, edit or delete")]
    UnknownVerb(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// A line that was not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rejection {
    /// 1-based line number in the source text.
    pub(crate) line: usize,
    pub(crate) error: BatchError,
}

pub(crate) fn apply_file(path: &Path, ledger: &mut Ledger, default_color: ColorTag) -> Result<Vec<Rejection>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file: {}", path.display()))?;
    Ok(apply_batch(&text, ledger, default_color))
}

/// Apply every line in order. A rejected line leaves the ledger as it was and
/// does not stop later lines.
pub(crate) fn apply_batch(text: &str, ledger: &mut Ledger, default_color: ColorTag) -> Vec<Rejection> {
    let mut rejected = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(error) = apply_line(line, ledger, default_color) {
            tracing::debug!(line = i + 1, %error, "batch line rejected");
            rejected.push(Rejection { line: i + 1, error });
        }
    }
    rejected
}

fn apply_line(line: &str, ledger: &mut Ledger, default_color: ColorTag) -> Result<(), BatchError> {
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match verb.to_lowercase().as_str() {
        "add" => {
            if rest.is_empty() {
                return Err(BatchError::Usage("add <name> <limit> [color]"));
            }
            let new = parse_add_args(rest)?;
            if ledger.name_taken(&new.name, None) {
                return Err(InputError::DuplicateName(new.name).into());
            }
            ledger.add_category(&new.name, new.budget_limit, new.color.unwrap_or(default_color))?;
        }
        "expense" => {
            let (name, amount) =
                split_trailing(rest).ok_or(BatchError::Usage("expense <category> <amount>"))?;
            let amount = parse_amount(amount)?;
            let id = lookup(ledger, name)?;
            ledger.record_expense(id, amount)?;
        }
        "edit" => {
            let (name, fields) = split_edit_target(rest);
            if name.is_empty() {
                return Err(BatchError::Usage("edit <category> key=value ..."));
            }
            let update = parse_edit_fields(fields)?;
            let id = lookup(ledger, name)?;
            if let Some(new_name) = &update.name {
                if ledger.name_taken(new_name, Some(id)) {
                    return Err(InputError::DuplicateName(new_name.trim().to_string()).into());
                }
            }
            ledger.edit_category(id, update)?;
        }
        "delete" => {
            if rest.is_empty() {
                return Err(BatchError::Usage("delete <category>"));
            }
            // Deleting something already gone is not an error
            if let Some(id) = ledger.find_by_name(rest).map(|c| c.id) {
                ledger.delete_category(id);
            }
        }
        other => return Err(BatchError::UnknownVerb(other.to_string())),
    }
    Ok(())
}

fn lookup(ledger: &Ledger, name: &str) -> Result<CategoryId, BatchError> {
    ledger
        .find_by_name(name)
        .map(|c| c.id)
        .ok_or_else(|| BatchError::UnknownCategory(name.to_string()))
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod batch_tests;
