//! Quill: SEO blog article generator backed by a local Ollama model.
//!
//! This is the main entry point for the `quill` CLI. It parses arguments,
//! runs the generation pipeline, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod model;
pub mod output;
pub mod prompt;
pub mod request;
pub mod runlog;
pub mod slug;
pub mod validate;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::generate(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
