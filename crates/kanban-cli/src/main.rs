mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use kanban_core::AppConfig;
use kanban_tui::App;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_logging() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("KANBAN_DEBUG_LOG") {
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
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn run_command(data_dir: Option<PathBuf>, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Board(board_cmd) => {
            handlers::board::handle(&mut CliContext::load(data_dir), board_cmd.action)
        }
        Commands::List(list_cmd) => {
            handlers::list::handle(&mut CliContext::load(data_dir), list_cmd.action)
        }
        Commands::Card(card_cmd) => {
            handlers::card::handle(&mut CliContext::load(data_dir), card_cmd.action)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "kanban", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        None => {
            let mut config = AppConfig::load();
            if cli.data_dir.is_some() {
                config.data_dir = cli.data_dir;
            }
            let (mut app, worker) = App::open(&config);
            app.run(worker).await?;
        }
        Some(command) => {
            if let Err(e) = run_command(cli.data_dir, command) {
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}
