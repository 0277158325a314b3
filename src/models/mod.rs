mod category;

pub use category::{BudgetStatus, Category, CategoryId, ColorTag, Thresholds};
