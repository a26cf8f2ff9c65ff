//! ijlink - Main entry point
//!
//! Discovers printers on the local network and prepares remote method calls.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ijlink_core::{endpoint_url, parse_printer_ip, DeviceTypeFilter};
use ijlink_discovery::DiscoveryScanner;
use ijlink_rpc::{parse_command_line, Command, Dispatcher};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ijlink")]
#[command(about = "Industrial printer discovery and remote call tool")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "ijlink.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Broadcast locate requests on every interface and list the replies
    Discover {
        /// Device type to ask for (tag or label); repeatable
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Probe window in milliseconds
        #[arg(short, long)]
        timeout_ms: Option<u64>,

        /// Print replies as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the printer methods and their arguments
    Commands,
    /// Show the call envelope a command line produces
    Plan {
        /// Printer IP address
        #[arg(long)]
        ip: Option<String>,

        /// Method name followed by its arguments
        #[arg(
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        command_line: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("ijlink v{}", env!("CARGO_PKG_VERSION"));

    let mut config = config::load_config(&args.config)?;

    match args.command {
        Action::Discover {
            filters,
            timeout_ms,
            json,
        } => {
            if !filters.is_empty() {
                config.discovery.filters = filters
                    .iter()
                    .map(|f| f.parse::<DeviceTypeFilter>())
                    .collect::<Result<_, _>>()?;
            }
            if let Some(timeout_ms) = timeout_ms {
                config.discovery.timeout_ms = timeout_ms;
            }

            let scanner = DiscoveryScanner::new(config.to_scanner_config());
            let replies = scanner.discover(&config.discovery.filters).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&replies)?);
            } else {
                println!("Discovered {} replies:", replies.len());
                for reply in &replies {
                    println!("  - {}", reply);
                }
            }
        }
        Action::Commands => {
            for command in Command::ALL {
                println!("{}", command.usage());
            }
        }
        Action::Plan { ip, command_line } => {
            if let Some(ip) = ip {
                config.printer.ip = parse_printer_ip(&ip)?;
            }

            let line = command_line.join(" ");
            let invocation = parse_command_line(&line)?;

            match invocation.method.parse::<Command>() {
                Ok(command) => {
                    if let Some(mismatch) = command.signature_mismatch(&invocation.arguments) {
                        warn!("{}", mismatch);
                    }
                }
                Err(e) => warn!("{}", e),
            }

            let dispatcher = Dispatcher::new(config.to_dispatcher_config());
            let request = dispatcher.build_request(&invocation);

            println!("Endpoint: {}", endpoint_url(config.printer.ip, config.printer.port));
            println!(
                "{}",
                serde_json::to_string_pretty(&request).context("Failed to encode call request")?
            );
        }
    }

    Ok(())
}
