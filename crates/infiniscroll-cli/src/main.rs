mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("INFINISCROLL_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "infiniscroll", &mut std::io::stdout());
        }
        Some(Commands::Fetch(args)) => {
            let config = cli
                .resolve_config()
                .unwrap_or_else(|e| output::output_error(&e.to_string()));
            if let Err(e) = handlers::fetch::handle(&config, args).await {
                output::output_error(&e.to_string());
            }
        }
        None => {
            let config = cli.resolve_config()?;
            handlers::browse::handle(&config).await?;
        }
    }

    Ok(())
}
