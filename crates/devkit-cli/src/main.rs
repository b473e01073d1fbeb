//! devkit CLI
//!
//! The command-line interface for bootstrapping and maintaining package
//! tooling features.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::InitOptions;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} devkit", "devkit".green().bold());
            println!();
            println!("Run {} for available commands.", "devkit --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Init {
            no_typescript,
            no_typedoc,
            no_mocha,
            eslint,
            jest,
            prettier,
        } => {
            let options = InitOptions {
                typescript: !no_typescript,
                typedoc: !no_typedoc,
                mocha: !no_mocha,
                eslint,
                jest,
                prettier,
            };
            commands::run_init(&cwd, &options)
        }
        Commands::Feature { name, remove } => commands::run_feature(&cwd, &name, remove),
        Commands::List => commands::run_list(&cwd),
        Commands::Test { coverage, args } => commands::run_test(&cwd, coverage, &args),
        Commands::Coverage { args } => commands::run_test(&cwd, true, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_init_defaults() {
        let options = InitOptions::default();
        assert_eq!(
            options.selected(),
            vec!["typescript", "typedoc", "mocha"]
        );
    }

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }
}
