//! Calculator HTTP API entry point.

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use calc_api::api::docs::openapi_json;
use calc_api::api::AppState;
use calc_api::config::{Config, LogFormat};
use calc_api::metrics;
use calc_api::server::serve;
use calc_api::utils::shutdown_signal;

/// Arithmetic over an HTTP JSON API.
#[derive(Parser, Debug)]
#[command(name = "calc-api")]
#[command(about = "Addition, subtraction and multiplication over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Openapi) => cmd_openapi(),
        Some(Command::Serve) | None => cmd_serve(config, args.verbose).await,
    }
}

/// Initialize the tracing subscriber from configuration.
fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("calc_api=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

/// Serve the API until a shutdown signal arrives.
async fn cmd_serve(config: Config, verbose: bool) -> anyhow::Result<()> {
    init_logging(&config, verbose);
    config.validate()?;

    let handle = metrics::init_metrics()?;
    let outcome = serve(&config, AppState::new(handle), shutdown_signal()).await?;
    debug!(?outcome, "Serve finished");

    Ok(())
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("CALC API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed"));
    }
    println!("OK");

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}", config.socket_addr());
    println!("  Environment: {}", config.app_env);
    println!(
        "  Listener: {}",
        if config.is_test() { "Suppressed" } else { "Enabled" }
    );
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", config.log_format);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document as pretty JSON.
fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", openapi_json()?);
    Ok(())
}
