use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::batch;
use crate::config::Config;
use crate::ledger::Ledger;
use crate::ui::util::{format_amount, format_percent, truncate};

pub(crate) fn as_cli(args: &[String], ledger: &mut Ledger, config: &Config) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => {
            cli_summary(ledger, config);
            Ok(())
        }
        "categories" | "ls" => {
            cli_categories(ledger, config);
            Ok(())
        }
        "export" => write_csv(ledger, std::io::stdout().lock()),
        "batch" => cli_batch(&args[2..], ledger, config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("budgetrack - category budgets in the terminal");
    println!();
    println!("Usage: budgetrack [--empty] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary, s                    Print totals and per-category usage");
    println!("  categories, ls                List categories");
    println!("  export                        Write categories as CSV to stdout");
    println!("  batch <file>                  Apply add/expense/edit/delete lines from a file");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --empty                       Start without the sample categories");
}

fn cli_summary(ledger: &Ledger, config: &Config) {
    let symbol = config.currency_symbol.as_str();
    let totals = ledger.totals();
    let thresholds = config.thresholds();

    println!(
        "budgetrack - {}",
        chrono::Local::now().format("%Y-%m")
    );
    println!("{}", "─".repeat(40));
    println!("  Total Budget: {}", format_amount(totals.total_budget, symbol));
    println!("  Total Spent:  {}", format_amount(totals.total_spent, symbol));
    println!("  Remaining:    {}", format_amount(totals.remaining, symbol));
    println!("  Categories:   {}", ledger.len());

    if ledger.is_empty() {
        return;
    }

    println!();
    println!(
        "  {:<20} {:>12} {:>12} {:>6}  Status",
        "Category", "Spent", "Limit", "Used"
    );
    for cat in ledger.categories() {
        println!(
            "  {:<20} {:>12} {:>12} {:>6}  {}",
            truncate(&cat.name, 20),
            format_amount(cat.spent, symbol),
            format_amount(cat.budget_limit, symbol),
            format_percent(cat.percent_spent()),
            cat.status(&thresholds),
        );
    }
}

fn cli_categories(ledger: &Ledger, config: &Config) {
    if ledger.is_empty() {
        println!("No categories");
        return;
    }

    let symbol = config.currency_symbol.as_str();
    println!("{:<5} {:<20} {:<8} Spent / Limit", "ID", "Name", "Color");
    println!("{}", "─".repeat(55));
    for cat in ledger.categories() {
        println!(
            "{:<5} {:<20} {:<8} {} / {}",
            cat.id.to_string(),
            truncate(&cat.name, 20),
            cat.color.as_str(),
            format_amount(cat.spent, symbol),
            format_amount(cat.budget_limit, symbol),
        );
    }
}

/// Write the category table as CSV.
pub(crate) fn write_csv<W: Write>(ledger: &Ledger, out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record([
        "id",
        "name",
        "color",
        "budget_limit",
        "spent",
        "remaining",
        "percent_spent",
        "created_at",
    ])?;
    for cat in ledger.categories() {
        wtr.write_record([
            cat.id.get().to_string(),
            cat.name.clone(),
            cat.color.to_string(),
            cat.budget_limit.to_string(),
            cat.spent.to_string(),
            cat.remaining().to_string(),
            cat.percent_spent().round_dp(2).normalize().to_string(),
            cat.created_at.clone(),
        ])?;
    }
    wtr.flush().context("Failed to write CSV")?;
    Ok(())
}

fn cli_batch(args: &[String], ledger: &mut Ledger, config: &Config) -> Result<()> {
    let Some(file) = args.first() else {
        anyhow::bail!("Usage: budgetrack batch <file>");
    };

    let rejected = batch::apply_file(Path::new(file), ledger, config.default_color)?;
    for r in &rejected {
        eprintln!("{file}:{}: {}", r.line, r.error);
    }
    if !rejected.is_empty() {
        tracing::warn!(count = rejected.len(), "batch lines rejected");
    }

    cli_summary(ledger, config);
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
