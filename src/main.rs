mod config;
mod input;
mod ledger;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

const EMPTY_FLAG: &str = "--empty";

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().collect();
    let empty = args.iter().skip(1).any(|a| a == EMPTY_FLAG);
    args.retain(|a| a != EMPTY_FLAG);

    let interactive = args.len() == 1;
    if interactive {
        logging::init_tui()?;
    } else {
        logging::init_cli();
    }

    let config = config::Config::load()?;
    let mut ledger = if config.sample_data && !empty {
        ledger::Ledger::with_sample_data()
    } else {
        ledger::Ledger::new()
    };
    tracing::debug!(categories = ledger.len(), interactive, "ledger ready");

    if interactive {
        run::as_tui(&mut ledger, &config)
    } else {
        run::as_cli(&args, &mut ledger, &config)
    }
}
