mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use tracing_subscriber::EnvFilter;

fn init_logging() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("BOARDIFY_DEBUG_LOG") {
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
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "boardify", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = CliContext::load(&cli)?;

    match cli.command {
        Commands::Login(args) => handlers::session::handle_login(&ctx, args).await,
        Commands::Register(args) => handlers::session::handle_register(&ctx, args).await,
        Commands::Logout => handlers::session::handle_logout(&ctx).await,
        Commands::Status => handlers::session::handle_status(&ctx).await,
        Commands::Whoami => handlers::session::handle_whoami(&ctx).await,
        Commands::Board(board_cmd) => handlers::board::handle(&ctx, board_cmd.action).await,
        Commands::Ticket(ticket_cmd) => handlers::ticket::handle(&ctx, ticket_cmd.action).await,
        Commands::Completions { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        output::output_error(&format!("Could not open debug log: {}", e));
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::debug!("Command failed: {:?}", e);
        output::output_error(&format!("{:#}", e));
    }
}
