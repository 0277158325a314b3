use chrono::Local;

use crate::config::Config;
use crate::ledger::Ledger;
use super::util::Cursor;
use crate::models::{CategoryId, ColorTag, Thresholds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Budget,
    Overview,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Budget, Self::Overview]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Budget => write!(f, "Budget"),
            Self::Overview => write!(f, "Overview"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Expense,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Expense => write!(f, "EXPENSE"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteCategory { id: CategoryId, name: String },
}

/// View state only. The ledger is lent to every handler separately.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// Label of the budgeting period shown in titles, "YYYY-MM".
    pub(crate) period: String,

    /// Position in the Budget list.
    pub(crate) cursor: Cursor,

    pub(crate) currency_symbol: String,
    pub(crate) default_color: ColorTag,
    pub(crate) thresholds: Thresholds,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            running: true,
            screen: Screen::Budget,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            period: Local::now().format("%Y-%m").to_string(),

            cursor: Cursor::default(),

            currency_symbol: config.currency_symbol.clone(),
            default_color: config.default_color,
            thresholds: config.thresholds(),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn selected_id(&self, ledger: &Ledger) -> Option<CategoryId> {
        ledger.categories().get(self.cursor.index).map(|c| c.id)
    }

    pub(crate) fn select(&mut self, ledger: &Ledger, id: CategoryId) {
        if let Some(pos) = ledger.categories().iter().position(|c| c.id == id) {
            self.cursor.jump(pos, self.visible_rows);
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
