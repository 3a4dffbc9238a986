//! Configuration file command implementations.

use churchafrica_dashboard::config::{default, xdg, ConfigError, ConfigLoader};
use std::path::PathBuf;
use std::process::ExitCode;

/// Creates the default configuration file.
pub(crate) fn run_config_init_command(force: bool) -> ExitCode {
    match default::create_default_config(force) {
        Ok(path) => {
            println!("Created configuration at {}", path.display());
            ExitCode::SUCCESS
        }
        Err(ConfigError::AlreadyExists { path }) => {
            eprintln!(
                "Error: configuration already exists at {} (use --force to overwrite)",
                path.display()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the configuration file path.
pub(crate) fn run_config_path_command() -> ExitCode {
    println!("{}", xdg::config_path().display());
    ExitCode::SUCCESS
}

/// Validates the configuration file, or the default one if no path given.
pub(crate) fn run_config_validate_command(file: Option<PathBuf>) -> ExitCode {
    let result = match &file {
        Some(path) => ConfigLoader::load_from_path(path),
        None => ConfigLoader::load_default(),
    };
    match result {
        Ok(_) => {
            println!("Configuration is valid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
