//! Wearables gateway entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wearables_gateway::api::{create_router, AppState};
use wearables_gateway::config::Config;
use wearables_gateway::telemetry;
use wearables_gateway::utils::shutdown_signal;

/// HTTP gateway for the wearables API.
#[derive(Parser, Debug)]
#[command(name = "wearables-gateway")]
#[command(about = "HTTP gateway fronting the versioned wearables API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Override the configured bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the configured bind port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the gateway (default).
    Run {
        /// Override the configured bind host.
        #[arg(long)]
        host: Option<String>,

        /// Override the configured bind port.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Run { host, port }) => cmd_run(host, port, args.verbose).await,
        None => cmd_run(args.host, args.port, args.verbose).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("WEARABLES GATEWAY - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}:{}", config.app_host, config.app_port);
    println!("  Debug Mode: {}", config.app_debug);
    println!("  API Versions: {}", version_list(&config));
    println!(
        "  Telemetry: {}",
        if config.sentry_dsn.is_some() {
            "configured"
        } else {
            "disabled"
        }
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the gateway.
async fn cmd_run(
    host_override: Option<String>,
    port_override: Option<u16>,
    verbose: bool,
) -> anyhow::Result<()> {
    // Environment first: everything below reads the loaded config.
    let mut config = Config::load()?;

    // Override with CLI args if provided
    if let Some(host) = host_override {
        config.app_host = host;
    }
    if let Some(port) = port_override {
        config.app_port = port;
    }

    config.validate()?;

    // Initialize logging
    let filter = if verbose || config.app_debug {
        EnvFilter::new("wearables_gateway=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Telemetry is best-effort and must never block startup; the disabled
    // case is dropped without logging or retry.
    let _telemetry = telemetry::init(&config);

    info!("Configuration loaded successfully");
    info!(
        "Mode: {}",
        if config.app_debug { "DEBUG" } else { "PRODUCTION" }
    );
    info!("Mounted API versions: {}", version_list(&config));

    // Route table is built once, before the listener starts
    let state = AppState::new(&config);
    let router = create_router(state, &config);

    let listener = TcpListener::bind((config.app_host.as_str(), config.app_port)).await?;
    info!("Gateway listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn version_list(config: &Config) -> String {
    config
        .app_api_versions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
