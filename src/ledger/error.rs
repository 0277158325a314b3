//! Ledger error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::CategoryId;

/// Reasons a ledger operation was rejected. A rejected call never mutates the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Category name is empty or only whitespace.
    #[error("Category name cannot be empty")]
    EmptyName,

    /// Budget limit is below zero.
    #[error("Budget limit cannot be negative: {0}")]
    NegativeLimit(Decimal),

    /// Expense amount is zero or negative.
    #[error("Expense amount must be positive: {0}")]
    InvalidAmount(Decimal),

    /// Corrected spent amount is below zero.
    #[error("Spent amount cannot be negative: {0}")]
    NegativeSpent(Decimal),

    /// No category with this id.
    #[error("Category not found: {0}")]
    NotFound(CategoryId),

    /// Result is too large for a `Decimal`.
    #[error("Amount too large: {0}")]
    Overflow(Decimal),

    /// Text that does not parse as an amount.
    #[error("Not a valid amount: '{0}'")]
    InvalidNumber(String),
}
