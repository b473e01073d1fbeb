//! Command implementations

mod feature;
mod init;
mod list;

pub use feature::run_feature;
pub use init::{InitOptions, run_init};
pub use list::run_list;
pub use test::run_test;

use colored::Colorize;
use devkit_core::FinishReport;

/// Print the invocation summary shared by init and feature commands.
fn print_report(report: &FinishReport) {
    if report.active.is_empty() {
        println!("{} No features active.", "OK".green().bold());
    } else {
        println!(
            "{} Active features: {}",
            "OK".green().bold(),
            report.active.join(", ").cyan()
        );
    }
    if report.reinstall_needed() {
        println!(
            "{} Dependencies changed ({}). Run {} to update node_modules.",
            "=>".blue().bold(),
            report.changed.join(", "),
            "npm install".cyan()
        );
    }
}
