use clap::Parser;
use tracing::error;

use compass_builtins::cli::{self, Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process { config, input, present, current_username } => {
            match cli::process::handle_process_command(&config, &input, present, current_username) {
                Ok(report) => println!("{}", serde_json::to_string_pretty(&report)?),
                Err(e) => {
                    error!("{}", cli::process::failure_message(&e));
                    std::process::exit(1);
                }
            }
        }
        Commands::Hash { name } => {
            println!("{}", cli::process::handle_hash_command(&name));
        }
        Commands::InitConfig { path } => {
            cli::process::handle_init_config(&path)?;
            println!("Wrote default config to {}", path);
        }
    }

    Ok(())
}
