use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use devstack_launcher::{run_backend, run_stack, LauncherConfig};

/// Devstack - development stack launcher
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (YAML); script defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Backend PORT value (overrides config)
    #[arg(long)]
    backend_port: Option<u16>,

    /// Frontend PORT value (overrides config)
    #[arg(long)]
    frontend_port: Option<u16>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the backend process only
    Backend,
    /// Launch backend and frontend together
    Up,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.debug)?;

    // Load configuration
    let mut config = match &args.config {
        Some(path) => {
            info!("Config file: {}", path);
            LauncherConfig::load_from_file(path)?
        }
        None => LauncherConfig::default(),
    };

    // Override ports if specified
    if let Some(port) = args.backend_port {
        config.backend.port = port;
    }
    if let Some(port) = args.frontend_port {
        config.frontend.port = port;
    }
    config.validate()?;

    match args.command {
        Command::Backend => {
            info!("Launching backend");
            run_backend(&config).await?;
        }
        Command::Up => {
            info!("Launching backend and frontend");
            run_stack(&config).await?;
        }
    }

    Ok(())
}

fn initialize_logging(debug: bool) -> Result<()> {
    let level = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .init();

    Ok(())
}
