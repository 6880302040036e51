//! The Kea programming language CLI.
//!
//! This binary provides `kea run` and `kea repl` commands and delegates
//! interpretation to the driver module.

use clap::{Parser, Subcommand};

mod diagnostics;
mod driver;

/// Command-line interface for the Kea interpreter.
#[derive(Parser)]
#[command(name = "kea")]
#[command(about = "The Kea programming language", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Interpret a Kea source file.
    Run {
        /// The source file to run (e.g., `hello.kea`).
        file: String,
    },
    /// Start an interactive session.
    Repl,
}

/// Entry point for the Kea interpreter.
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file } => match driver::run_file(&file) {
            Ok(exit_code) => std::process::exit(exit_code),
            Err(error) => {
                eprintln!("Error: {}", error);
                std::process::exit(1);
            }
        },
        Commands::Repl => std::process::exit(driver::repl()),
    }
}
