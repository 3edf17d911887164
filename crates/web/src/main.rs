//! Password Analyser - HTTP server for the analyser site.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use web_lib::config::WebConfig;

#[derive(Parser)]
#[command(name = "password-analyser")]
#[command(about = "Password analyser site")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "WEB_HOST")]
        host: Option<String>,
        #[arg(long, env = "WEB_PORT")]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = WebConfig::from_env();

    init_tracing(&config, cli.verbose);

    match cli.command {
        Commands::Serve { host, port } => {
            web_lib::run_server(config.with_address(host, port)).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &WebConfig, verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new(config.service.filter_directive(true))
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| config.service.filter_directive(false).into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
