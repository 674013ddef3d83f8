use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use coach_intake::config::AppConfig;
use coach_intake::error::AppError;
use coach_intake::telemetry;
use coach_intake::wizard::{application_router, LoggingGateway};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "coach-intake",
    about = "Run the coach application intake service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let Command::Serve(args) = cli.command.unwrap_or(Command::Serve(ServeArgs::default()));
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let addr = config.server.socket_addr()?;
    let router = application_router(Arc::new(LoggingGateway));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.environment, "coach intake service listening");
    axum::serve(listener, router).await?;

    Ok(())
}
