use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Branchline: hierarchical plugin event dispatch
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Simple ping command for testing
    #[arg(long)]
    pub ping: bool,

    /// Engine configuration file (.json, .yaml, .yml or .toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the namespace segment from the configuration
    #[arg(long)]
    pub namespace: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate an editor session: start, save, shutdown
    Demo,
    /// Emit one event to the bundled plugins
    Emit {
        /// Short event name, e.g. onSave
        event: String,
        /// JSON payload delivered as the handlers' meta
        #[arg(long, default_value = "{}")]
        payload: String,
    },
    /// List the registered plugins and their handler paths
    Plugins,
}
