use clap::{Parser, Subcommand};
use playoff_series::data_provider::{FileProvider, SeasonDataProvider};
use playoff_series::{commands, config};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "playoff-series")]
#[command(
    about = "Playoff series records and status",
    long_about = "Playoff series records and status\n\nResolves game-by-game series records from a season's game data."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Directory containing <season>.json game files
    #[arg(short = 'D', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Serve built-in fixture data instead of reading season files
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the game-by-game series between two teams
    Series {
        /// First team (id or code)
        team1: String,

        /// Second team (id or code)
        team2: String,

        /// Season start year (optional, defaults to the current season)
        #[arg(short, long, value_parser = season_parser())]
        season: Option<i32>,

        /// Print the annotated games as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every playoff series of a season
    Playoffs {
        /// Season start year (optional, defaults to the current season)
        #[arg(short, long, value_parser = season_parser())]
        season: Option<i32>,
    },
    /// Keep a series on screen, refreshing periodically (Enter refreshes now)
    Watch {
        /// First team (id or code)
        team1: String,

        /// Second team (id or code)
        team2: String,

        /// Season start year (optional, defaults to the current season)
        #[arg(short, long, value_parser = season_parser())]
        season: Option<i32>,
    },
    /// Display current configuration
    Config,
}

/// Season start years accepted on the command line
fn season_parser() -> clap::builder::RangedI64ValueParser<i32> {
    clap::value_parser!(i32).range(1..=9998)
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("time_format: {}", cfg.time_format);
    match cfg.data_dir() {
        Some(dir) => println!("data_dir: {}", dir.display()),
        None => println!("data_dir: (unavailable)"),
    }
    println!();
    println!("[playoffs]");
    println!("stage: {}", cfg.playoffs.stage);
    println!("window_start: {}", cfg.playoffs.window_start);
    println!("window_end: {}", cfg.playoffs.window_end);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

#[cfg(feature = "development")]
fn mock_client(cli: &Cli) -> Option<Arc<dyn SeasonDataProvider>> {
    if cli.mock {
        Some(Arc::new(playoff_series::dev::mock_client::MockClient::new()))
    } else {
        None
    }
}

#[cfg(not(feature = "development"))]
fn mock_client(_cli: &Cli) -> Option<Arc<dyn SeasonDataProvider>> {
    None
}

fn create_client(
    cli: &Cli,
    config: &config::Config,
) -> anyhow::Result<Arc<dyn SeasonDataProvider>> {
    if let Some(client) = mock_client(cli) {
        return Ok(client);
    }

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| config.data_dir())
        .ok_or_else(|| {
            anyhow::anyhow!("No data directory. Pass --data-dir or set data_dir in the config file")
        })?;
    tracing::info!("Using season data from {}", data_dir.display());
    Ok(Arc::new(FileProvider::new(data_dir)))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: Arc<dyn SeasonDataProvider>,
    config: &config::Config,
    command: Commands,
) -> anyhow::Result<()> {
    let settings = config.series_settings();
    match command {
        Commands::Config => {
            unreachable!("Config command should be handled before execute_command")
        }
        Commands::Series {
            team1,
            team2,
            season,
            json,
        } => {
            commands::series::run(
                client.as_ref(),
                &settings,
                &config.display,
                &team1,
                &team2,
                season,
                json,
            )
            .await
        }
        Commands::Playoffs { season } => {
            commands::playoffs::run(client.as_ref(), &settings, &config.display, season).await
        }
        Commands::Watch {
            team1,
            team2,
            season,
        } => commands::watch::run(client, config, &team1, &team2, season).await,
    }
}


#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need a client)
    if let Commands::Config = cli.command {
        handle_config_command(&config);
        return;
    }

    let client = match create_client(&cli, &config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = execute_command(client, &config, cli.command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
