//! Card catalog command implementations.

use churchafrica_dashboard::registry::CardRegistry;
use std::process::ExitCode;

/// Prints the builtin card catalog.
///
/// `format` is either `table` (aligned columns for humans) or `json`
/// (the full definitions, for scripting).
pub(crate) fn run_cards_command(format: &str) -> ExitCode {
    let registry = CardRegistry::builtin();
    match format {
        "table" => {
            println!(
                "{:<24} {:<12} {:<12} {}",
                "ID", "CATEGORY", "RECOMMENDED", "TITLE"
            );
            for card in registry.cards() {
                println!(
                    "{:<24} {:<12} {:<12} {}",
                    card.id,
                    card.category.to_string(),
                    if card.recommended { "yes" } else { "no" },
                    card.title,
                );
            }
            ExitCode::SUCCESS
        }
        "json" => match serde_json::to_string_pretty(registry.cards()) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: failed to serialize catalog: {e}");
                ExitCode::FAILURE
            }
        },
        other => {
            eprintln!("Error: unknown format '{other}' (expected 'table' or 'json')");
            ExitCode::FAILURE
        }
    }
}
