use rust_decimal::Decimal;
use serde::Deserialize;

/// Ledger-assigned identifier. Never reused within a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub(crate) u64);

impl CategoryId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Emerald,
    Indigo,
    Amber,
    Rose,
    Blue,
    Purple,
    Pink,
    Cyan,
    #[default]
    Slate,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emerald => "emerald",
            Self::Indigo => "indigo",
            Self::Amber => "amber",
            Self::Rose => "rose",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Cyan => "cyan",
            Self::Slate => "slate",
        }
    }

    /// Accepts the bare name (`rose`) or a `bg-rose-500` style class.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let name = lower
            .strip_prefix("bg-")
            .map(|rest| rest.rsplit_once('-').map_or(rest, |(n, _)| n))
            .unwrap_or(&lower);
        Self::all().iter().copied().find(|c| c.as_str() == name)
    }

    pub fn all() -> &'static [ColorTag] {
        &[
            Self::Emerald,
            Self::Indigo,
            Self::Amber,
            Self::Rose,
            Self::Blue,
            Self::Purple,
            Self::Pink,
            Self::Cyan,
            Self::Slate,
        ]
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Percent thresholds used to classify a category's spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warn_percent: u32,
    pub alert_percent: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warn_percent: 70,
            alert_percent: 90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    OnTrack,
    NearLimit,
    Critical,
    OverBudget,
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnTrack => write!(f, "On track"),
            Self::NearLimit => write!(f, "Near limit"),
            Self::Critical => write!(f, "Critical"),
            Self::OverBudget => write!(f, "Over budget"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub budget_limit: Decimal,
    pub spent: Decimal,
    pub color: ColorTag,
    pub created_at: String,
}

impl Category {
    pub(crate) fn new(id: CategoryId, name: String, budget_limit: Decimal, color: ColorTag) -> Self {
        Self {
            id,
            name,
            budget_limit,
            spent: Decimal::ZERO,
            color,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Unclamped spent/limit percentage. `None` when the limit is zero.
    ///
    /// A ratio too large to represent reads as `Decimal::MAX`.
    pub fn spent_ratio(&self) -> Option<Decimal> {
        if self.budget_limit.is_zero() {
            return None;
        }
        let ratio = self
            .spent
            .checked_div(self.budget_limit)
            .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX);
        Some(ratio)
    }

    /// Display percentage, clamped to `[0, 100]`.
    ///
    /// A zero limit reads as 100 once anything has been spent, 0 otherwise.
    pub fn percent_spent(&self) -> Decimal {
        match self.spent_ratio() {
            Some(ratio) => ratio.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
            None if self.spent > Decimal::ZERO => Decimal::ONE_HUNDRED,
            None => Decimal::ZERO,
        }
    }

    pub fn remaining(&self) -> Decimal {
        self.budget_limit - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget_limit
    }

    pub fn status(&self, thresholds: &Thresholds) -> BudgetStatus {
        if self.is_over_budget() {
            return BudgetStatus::OverBudget;
        }
        let ratio = match self.spent_ratio() {
            Some(r) => r,
            // Zero limit and nothing spent
            None => return BudgetStatus::OnTrack,
        };
        if ratio >= Decimal::from(thresholds.alert_percent) {
            BudgetStatus::Critical
        } else if ratio >= Decimal::from(thresholds.warn_percent) {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::OnTrack
        }
    }

    /// Find a category by name (case-insensitive) in a slice.
    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        let lower = name.trim().to_lowercase();
        categories.iter().find(|c| c.name.to_lowercase() == lower)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
