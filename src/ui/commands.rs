use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction, Screen};
use super::util::{format_amount, format_percent};
use crate::input::{
    parse_add_args, parse_amount, parse_edit_fields, split_edit_target, split_trailing, InputError,
};
use crate::ledger::{CategoryUpdate, Ledger};
use crate::models::{BudgetStatus, CategoryId, ColorTag};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("b", "Go to Budget", cmd_budget, r);
    register_command!("budget", "Go to Budget", cmd_budget, r);
    register_command!("o", "Go to Overview", cmd_overview, r);
    register_command!("overview", "Go to Overview", cmd_overview, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add category (e.g. :add Groceries 500 emerald)",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add category (e.g. :a Groceries 500 emerald)",
        cmd_add,
        r
    );
    register_command!(
        "expense",
        "Record expense (e.g. :expense 42.50 or :expense Dining 18)",
        cmd_expense,
        r
    );
    register_command!("x", "Record expense on selected category", cmd_expense, r);
    register_command!(
        "edit",
        "Edit category (e.g. :edit limit=600 color=rose spent=0)",
        cmd_edit,
        r
    );
    register_command!("rename", "Rename selected category", cmd_rename, r);
    register_command!(
        "delete",
        "Delete category (selected, or by name)",
        cmd_delete,
        r
    );
    register_command!("select", "Jump to category by name", cmd_select, r);
    register_command!("colors", "List available colors", cmd_colors, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::debug!(command = cmd_name, args, "running command");
        (cmd.run)(args, app, ledger)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Resolve `name` to a category, or fall back to the selected row when empty.
fn resolve_target(name: &str, app: &mut App, ledger: &Ledger) -> Option<CategoryId> {
    if name.is_empty() {
        let id = app.selected_id(ledger);
        if id.is_none() {
            app.set_status("No category selected");
        }
        return id;
    }
    let id = ledger.find_by_name(name).map(|c| c.id);
    if id.is_none() {
        app.set_status(format!("Category '{name}' not found"));
    }
    id
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_budget(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Budget;
    Ok(())
}

fn cmd_overview(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Overview;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :add <name> <limit> [color]. Example: :add Groceries 500 emerald");
        return Ok(());
    }

    let new = match parse_add_args(args) {
        Ok(n) => n,
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };

    if ledger.name_taken(&new.name, None) {
        app.set_status(InputError::DuplicateName(new.name.trim().to_string()).to_string());
        return Ok(());
    }

    let color = new.color.unwrap_or(app.default_color);
    match ledger.add_category(&new.name, new.budget_limit, color) {
        Ok(id) => {
            app.select(ledger, id);
            app.screen = Screen::Budget;
            app.set_status(format!(
                "Created category: {} ({} budget)",
                new.name.trim(),
                format_amount(new.budget_limit, &app.currency_symbol)
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_expense(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :expense <amount> or :expense <category> <amount>");
        return Ok(());
    }

    // A bare amount applies to the selected row
    let (name, amount_str) = if parse_amount(args).is_ok() {
        ("", args)
    } else {
        split_trailing(args).unwrap_or(("", args))
    };

    let amount = match parse_amount(amount_str) {
        Ok(a) => a,
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };

    let Some(id) = resolve_target(name, app, ledger) else {
        return Ok(());
    };

    match ledger.record_expense(id, amount) {
        Ok(_) => {
            let pct = ledger.percent_spent(id).unwrap_or_default();
            if let Some(cat) = ledger.get(id) {
                let symbol = &app.currency_symbol;
                let mut msg = format!(
                    "Recorded {} on {} ({} of {}, {})",
                    format_amount(amount, symbol),
                    cat.name,
                    format_amount(cat.spent, symbol),
                    format_amount(cat.budget_limit, symbol),
                    format_percent(pct),
                );
                if cat.status(&app.thresholds) == BudgetStatus::OverBudget {
                    msg.push_str(&format!(
                        ". Over budget by {}",
                        format_amount(-cat.remaining(), symbol)
                    ));
                }
                app.set_status(msg);
            }
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_edit(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :edit [category] name=<name> limit=<n> color=<c> spent=<n>");
        return Ok(());
    }

    let (name, fields) = split_edit_target(args);
    let update = match parse_edit_fields(fields) {
        Ok(u) => u,
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };
    let Some(id) = resolve_target(name, app, ledger) else {
        return Ok(());
    };
    apply_update(id, update, app, ledger);
    Ok(())
}

fn cmd_rename(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :rename <new name>");
        return Ok(());
    }
    let Some(id) = resolve_target("", app, ledger) else {
        return Ok(());
    };
    let update = CategoryUpdate {
        name: Some(args.to_string()),
        ..Default::default()
    };
    apply_update(id, update, app, ledger);
    Ok(())
}

fn apply_update(id: CategoryId, update: CategoryUpdate, app: &mut App, ledger: &mut Ledger) {
    if let Some(name) = &update.name {
        if ledger.name_taken(name, Some(id)) {
            app.set_status(InputError::DuplicateName(name.trim().to_string()).to_string());
            return;
        }
    }
    match ledger.edit_category(id, update) {
        Ok(()) => {
            let name = ledger.get(id).map_or("category", |c| c.name.as_str());
            app.set_status(format!("Updated {name}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
}

fn cmd_delete(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if ledger.is_empty() {
        app.set_status("No categories to delete");
        return Ok(());
    }
    let Some(id) = resolve_target(args, app, ledger) else {
        return Ok(());
    };
    if let Some(cat) = ledger.get(id) {
        let name = cat.name.clone();
        app.confirm_message = format!("Delete category '{name}'?");
        app.pending_action = Some(PendingAction::DeleteCategory { id, name });
        app.input_mode = InputMode::Confirm;
    }
    Ok(())
}

fn cmd_select(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :select <category>");
        return Ok(());
    }
    if let Some(id) = resolve_target(args, app, ledger) {
        app.select(ledger, id);
        app.screen = Screen::Budget;
    }
    Ok(())
}

fn cmd_colors(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    let names: Vec<&str> = ColorTag::all().iter().map(|c| c.as_str()).collect();
    app.set_status(format!(
        "Colors: {} (default: {})",
        names.join(", "),
        app.default_color
    ));
    Ok(())
}

/// Apply a confirmed action to the ledger.
pub(crate) fn confirm(action: PendingAction, app: &mut App, ledger: &mut Ledger) {
    match action {
        PendingAction::DeleteCategory { id, name } => {
            ledger.delete_category(id);
            app.cursor.clamp(ledger.len());
            app.set_status(format!("Deleted category: {name}"));
        }
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
