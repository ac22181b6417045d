//! FILENAME: app/src/lib.rs
//! Application library: CLI surface, session orchestration and
//! rendering around the core comparison crates.

pub mod assets;
pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod session;

pub use assets::{AssetStore, ResolvedAsset};
pub use cli::{Cli, Command, GlobalArgs, DEFAULT_DATA_STEM, DEFAULT_IMAGES_DIR};
pub use session::{build_definition, global_filters, parse_choice, parse_selector, Session};

use clap::Parser;
use persistence::TableSource;
use std::path::PathBuf;
use std::process::ExitCode;

/// Parses the command line and runs one interaction cycle.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_log_file() {
        // Logging is best-effort; the comparison still runs without it.
        eprintln!("warning: {}", e);
    }

    let data = cli
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_STEM));
    let source = TableSource::from_path(&data);
    let assets = AssetStore::new(
        cli.images
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR)),
    );
    let mut session = Session::new(source);

    let result = match &cli.command {
        Command::Columns => commands::cmd_columns(&mut session, cli.json),
        Command::Options {
            global,
            country,
            brand,
            year,
        } => commands::cmd_options(&mut session, global, country, brand, year, cli.json),
        Command::Compare {
            global,
            picks,
            export,
            export_xlsx,
        } => commands::cmd_compare(
            &mut session,
            &assets,
            global,
            picks,
            export,
            export_xlsx,
            cli.json,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            crate::log_error!("CMD", "{}", message);
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}
