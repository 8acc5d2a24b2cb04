pub mod process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "compass-builtins")]
#[command(about = "Compass built-in function runner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run SetUserName against a JSON call input
    Process {
        #[arg(long, default_value = "builtins.toml")]
        config: String,
        /// Path to a JSON-encoded ContractCallInput
        #[arg(long)]
        input: String,
        /// Treat the recipient account as resident on this shard
        #[arg(long, default_value = "false")]
        present: bool,
        /// Hex username already bound to the recipient (implies --present)
        #[arg(long)]
        current_username: Option<String>,
    },
    /// Print the username hash for a human-readable name
    Hash {
        name: String,
    },
    /// Write a default config file
    InitConfig {
        #[arg(long, default_value = "builtins.toml")]
        path: String,
    },
}
