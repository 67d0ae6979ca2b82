#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod argv;
mod config;
mod input;
mod logging;
mod menu;
mod signals;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use calculator::Service;
use calculator_sdk::CalculatorApi;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::config::{AppConfig, CliOverrides};

/// Scientific calculator: sqrt, factorial, ln and power
#[derive(Parser)]
#[command(name = "sci-calc")]
#[command(about = "Scientific calculator: sqrt, factorial, ln and power")]
#[command(version)]
#[command(after_help = "One-shot evaluation: sci-calc <op> <x> [b]\n  \
    ops: sqrt|sqrtx, fact|factorial, ln|log, pow|power")]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,
    /// Start the HTTP server
    Serve {
        /// Host override for HTTP server (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port override for HTTP server (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Validate configuration and exit
    Check,
    #[command(external_subcommand)]
    Eval(Vec<String>),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Menu);

    let mut overrides = CliOverrides {
        verbose: cli.verbose,
        ..CliOverrides::default()
    };
    if let Commands::Serve { host, port } = &command {
        overrides.host.clone_from(host);
        overrides.port = *port;
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (SCI_CALC__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(&overrides);

    logging::init_logging(&config.logging)?;

    match command {
        Commands::Menu => {
            tracing::debug!("starting interactive menu");
            let calculator = Service::with_config(config.service_config());
            menu::run_menu(&calculator, std::io::stdin().lock(), std::io::stdout())?;
        }
        Commands::Eval(args) => {
            let calculator = Service::with_config(config.service_config());
            argv::run_op(&calculator, &args, &mut std::io::stdout().lock())?;
        }
        Commands::Check => check_config(&config)?,
        Commands::Serve { .. } => run_server(config).await?,
    }
    Ok(())
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    // Loading and resolving the bind address is the whole validation.
    config.server_options()?;
    println!("Configuration is valid");
    println!("{}", config.to_json()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let opts = config.server_options()?;
    let calculator: Arc<dyn CalculatorApi> =
        Arc::new(Service::with_config(config.service_config()));
    tracing::info!(
        addr = %opts.bind_addr,
        max_factorial_input = ?config.calculator.max_factorial_input,
        "SciCalc server starting"
    );

    let cancel = CancellationToken::new();
    tokio::spawn(signals::shutdown_signal(cancel.clone()));

    calculator::serve(calculator, opts, cancel).await
}
