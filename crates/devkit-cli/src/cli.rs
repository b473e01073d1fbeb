//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// devkit - Bootstrap and maintain package tooling features
#[derive(Parser, Debug)]
#[command(name = "devkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Bootstrap the package with the default feature set
    ///
    /// Creates package.json if absent, then enables the selected features.
    /// Defaults: typescript, typedoc, and mocha on; the rest off.
    ///
    /// Examples:
    ///   devkit init                       # typescript + typedoc + mocha
    ///   devkit init --eslint --prettier   # add lint and formatter
    ///   devkit init --no-mocha --jest     # swap the test runner
    Init {
        /// Skip the TypeScript toolchain (enabled by default)
        #[arg(long)]
        no_typescript: bool,

        /// Skip the typedoc documentation generator (enabled by default)
        #[arg(long)]
        no_typedoc: bool,

        /// Skip the mocha test runner (enabled by default)
        #[arg(long)]
        no_mocha: bool,

        /// Enable the ESLint toolchain
        #[arg(long)]
        eslint: bool,

        /// Enable the jest test runner
        #[arg(long)]
        jest: bool,

        /// Enable the prettier code formatter
        #[arg(long)]
        prettier: bool,
    },

    /// Enable or disable a single feature
    ///
    /// Use 'devkit list' to see available features.
    ///
    /// Examples:
    ///   devkit feature typescript           # enable
    ///   devkit feature typescript --remove  # disable (cascades dependents)
    Feature {
        /// Name of the feature (use 'devkit list' to see options)
        name: String,

        /// Disable the feature instead of enabling it
        #[arg(long)]
        remove: bool,
    },

    /// List catalog features and whether they are active
    List,

    /// Run the active test-runner feature
    Test {
        /// Collect coverage while running
        #[arg(long)]
        coverage: bool,

        /// Extra arguments forwarded to the runner
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run the active test-runner feature with coverage
    Coverage {
        /// Extra arguments forwarded to the runner
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}
