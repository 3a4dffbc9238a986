//! Persisted dashboard layout command implementations.
//!
//! These commands open the same state file the TUI uses, so `cad layout
//! show` prints exactly what the dashboard will load next time.

use churchafrica_dashboard::store::{ConfigStore, FileStorage, StorageError};
use churchafrica_dashboard::DashboardConfig;
use std::path::PathBuf;
use std::process::ExitCode;

/// Opens the configuration store over the given (or default) state file.
fn open_store(state_file: Option<PathBuf>) -> Result<ConfigStore, StorageError> {
    let storage = match state_file {
        Some(path) => FileStorage::open(path)?,
        None => FileStorage::open_default()?,
    };
    Ok(ConfigStore::open(
        Box::new(storage),
        DashboardConfig::default(),
    ))
}

/// Prints the persisted dashboard layout as pretty JSON.
pub(crate) fn run_layout_show_command(state_file: Option<PathBuf>) -> ExitCode {
    let store = match open_store(state_file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    match serde_json::to_string_pretty(store.config()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to serialize layout: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Drops the persisted layout, reverting to the starter configuration.
pub(crate) fn run_layout_reset_command(state_file: Option<PathBuf>) -> ExitCode {
    let mut store = match open_store(state_file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    store.reset();
    println!("Dashboard layout reset to the starter configuration");
    ExitCode::SUCCESS
}
