use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use keteai::{run_repl_mode, setup_from_cli, Cli};

async fn run(cli: Cli) -> Result<()> {
    let client_config = setup_from_cli(&cli)?;
    run_repl_mode(&cli, client_config).await
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Fatal errors are reported but the process still exits 0
    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "❌ Erreur fatale:".bright_red().bold(), e);
    }
}
