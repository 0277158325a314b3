//! In-memory budget bookkeeping: categories, expenses and derived totals.

mod error;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Category, CategoryId, ColorTag};

pub use error::LedgerError;

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    /// Negative once spending exceeds the combined budget.
    pub remaining: Decimal,
}

/// A partial overwrite of a category. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub budget_limit: Option<Decimal>,
    pub color: Option<ColorTag>,
    pub spent: Option<Decimal>,
}

impl CategoryUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.budget_limit.is_none()
            && self.color.is_none()
            && self.spent.is_none()
    }

    fn validate(&self) -> LedgerResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(LedgerError::EmptyName);
            }
        }
        if let Some(limit) = self.budget_limit {
            check_limit(limit)?;
        }
        if let Some(spent) = self.spent {
            if spent < Decimal::ZERO {
                return Err(LedgerError::NegativeSpent(spent));
            }
        }
        Ok(())
    }
}

/// Owns the category collection. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    categories: Vec<Category>,
    next_id: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four demo categories the tracker starts with.
    pub fn with_sample_data() -> Self {
        let mut ledger = Self::new();
        let samples = [
            ("Groceries", 500, 125, ColorTag::Emerald),
            ("Entertainment", 200, 75, ColorTag::Indigo),
            ("Transport", 150, 150, ColorTag::Amber),
            ("Dining", 300, 225, ColorTag::Rose),
        ];
        for (name, limit, spent, color) in samples {
            let id = ledger.allocate_id();
            let mut cat = Category::new(id, name.to_string(), Decimal::from(limit), color);
            cat.spent = Decimal::from(spent);
            ledger.categories.push(cat);
        }
        ledger
    }

    fn allocate_id(&mut self) -> CategoryId {
        self.next_id += 1;
        CategoryId(self.next_id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        Category::find_by_name(&self.categories, name)
    }

    /// Whether another category already uses `name`, ignoring case.
    pub fn name_taken(&self, name: &str, except: Option<CategoryId>) -> bool {
        let lower = name.trim().to_lowercase();
        self.categories
            .iter()
            .any(|c| Some(c.id) != except && c.name.to_lowercase() == lower)
    }

    fn get_mut(&mut self, id: CategoryId) -> LedgerResult<&mut Category> {
        self.categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(LedgerError::NotFound(id))
    }

    pub fn add_category(
        &mut self,
        name: &str,
        budget_limit: Decimal,
        color: ColorTag,
    ) -> LedgerResult<CategoryId> {
        let name = name.trim();
        if name.is_empty() {
            debug!("rejected add: empty name");
            return Err(LedgerError::EmptyName);
        }
        if let Err(e) = check_limit(budget_limit) {
            debug!(%budget_limit, "rejected add: negative limit");
            return Err(e);
        }

        let id = self.allocate_id();
        self.categories
            .push(Category::new(id, name.to_string(), budget_limit, color));
        debug!(%id, name, %budget_limit, %color, "category added");
        Ok(id)
    }

    /// Adds `amount` to the category's spent total and returns the new total.
    pub fn record_expense(&mut self, id: CategoryId, amount: Decimal) -> LedgerResult<Decimal> {
        if amount <= Decimal::ZERO {
            debug!(%id, %amount, "rejected expense: amount not positive");
            return Err(LedgerError::InvalidAmount(amount));
        }
        let cat = self.get_mut(id).inspect_err(|_| {
            debug!(%id, "rejected expense: unknown category");
        })?;
        let Some(spent) = cat.spent.checked_add(amount) else {
            debug!(%id, %amount, "rejected expense: total overflows");
            return Err(LedgerError::Overflow(amount));
        };
        cat.spent = spent;
        debug!(%id, %amount, spent = %cat.spent, "expense recorded");
        Ok(cat.spent)
    }

    /// Applies every field of `update` or none of them.
    pub fn edit_category(&mut self, id: CategoryId, update: CategoryUpdate) -> LedgerResult<()> {
        let cat = self.get_mut(id)?;
        if let Err(e) = update.validate() {
            debug!(%id, error = %e, "rejected edit");
            return Err(e);
        }

        if let Some(name) = update.name {
            cat.name = name.trim().to_string();
        }
        if let Some(limit) = update.budget_limit {
            cat.budget_limit = limit;
        }
        if let Some(color) = update.color {
            cat.color = color;
        }
        if let Some(spent) = update.spent {
            cat.spent = spent;
        }
        debug!(%id, "category edited");
        Ok(())
    }

    /// Returns whether a category was removed. Deleting an absent id is a no-op.
    pub fn delete_category(&mut self, id: CategoryId) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        let removed = self.categories.len() != before;
        debug!(%id, removed, "delete category");
        removed
    }

    /// Sums saturate at `Decimal::MAX`.
    pub fn totals(&self) -> Totals {
        let total_budget = saturating_sum(self.categories.iter().map(|c| c.budget_limit));
        let total_spent = saturating_sum(self.categories.iter().map(|c| c.spent));
        Totals {
            total_budget,
            total_spent,
            remaining: total_budget - total_spent,
        }
    }

    pub fn percent_spent(&self, id: CategoryId) -> Option<Decimal> {
        self.get(id).map(Category::percent_spent)
    }

    pub fn over_budget(&self) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.is_over_budget()).collect()
    }

    /// Each category's share of the total spent, in percent.
    /// All shares are zero when nothing has been spent.
    pub fn spending_breakdown(&self) -> Vec<(&Category, Decimal)> {
        let total = self.totals().total_spent;
        self.categories
            .iter()
            .map(|c| {
                let share = c
                    .spent
                    .checked_div(total)
                    .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
                    .unwrap_or(Decimal::ZERO);
                (c, share)
            })
            .collect()
    }
}

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

fn check_limit(limit: Decimal) -> LedgerResult<()> {
    if limit < Decimal::ZERO {
        Err(LedgerError::NegativeLimit(limit))
    } else {
        Ok(())
    }
}
