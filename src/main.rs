use std::path::Path;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use menu_combo_maker_rs::cli::{Cli, Command};
use menu_combo_maker_rs::error::{MenuError, Result};
use menu_combo_maker_rs::interface::{display_catalog, display_combos};
use menu_combo_maker_rs::selector::ComboSelector;
use menu_combo_maker_rs::server::{self, AppState, ComboResponse};
use menu_combo_maker_rs::state::load_catalog;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("menu_combo_maker_rs=info,tower_http=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.selector_config();
    let command = cli.command.unwrap_or_default();

    let catalog = load_catalog(Path::new(&cli.catalog))?;
    let selector = ComboSelector::new(catalog, config);

    match command {
        Command::Generate { batches, json } => cmd_generate(selector, batches, json),
        Command::Serve { bind, debug } => cmd_serve(selector, &bind, debug),
        Command::Catalog => {
            display_catalog(selector.catalog());
            Ok(())
        }
    }
}

/// Generate one or more batches and print them, like a daily run.
fn cmd_generate(mut selector: ComboSelector, batches: usize, json: bool) -> Result<()> {
    if batches == 0 {
        return Err(MenuError::InvalidInput(
            "batches must be at least 1".to_string(),
        ));
    }

    let style = selector.remark_style();

    if !json {
        println!("Date: {}", Local::now().format("%Y-%m-%d"));
    }

    let mut all = Vec::with_capacity(batches);
    for batch in 1..=batches {
        let combos = selector.generate_combos()?;

        if json {
            let formatted: Vec<ComboResponse> = combos
                .iter()
                .enumerate()
                .map(|(i, combo)| ComboResponse::new(i + 1, combo, style))
                .collect();
            all.push(formatted);
        } else {
            if batches > 1 {
                println!();
                println!("=== Batch {} ===", batch);
            }
            display_combos(&combos, style);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&all)?);
    }

    Ok(())
}

/// Run the HTTP server on a fresh tokio runtime.
fn cmd_serve(selector: ComboSelector, bind: &str, debug: bool) -> Result<()> {
    let state = AppState::new(selector, debug);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(state, bind))
}
