//! FILENAME: app/src/main.rs
// PURPOSE: CLI entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    app_lib::run()
}
