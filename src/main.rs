// reposeek - search GitHub repositories as you type
//
// Type a query, wait for the debounce to settle, and the first page of
// matching repositories appears. Scroll to the bottom of the list and the
// next page is appended.
//
// Architecture:
// - Search (reqwest + tokio): debounced queries, pagination, result state
// - TUI (ratatui): search box, result list, banner, logs panel
// - CLI (clap): headless one-shot search and config management
// - Logging (tracing): TUI buffer or stderr, plus optional rotating JSON files

mod cli;
mod config;
mod logging;
mod search;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management never needs logging or a valid config file
    if let Some(Commands::Config { show, path, reset }) = cli.command {
        return cli::handle_config(show, path, reset);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::load()?;

    match cli.command {
        Some(Commands::Search { query, page, json }) => {
            let guard = init_tracing(&config, None);
            let succeeded = cli::handle_search(&config, &query, page, json).await?;
            if !succeeded {
                // Flush file logs before exiting
                drop(guard);
                std::process::exit(1);
            }
            Ok(())
        }
        _ => {
            let log_buffer = LogBuffer::new();
            let _file_guard = init_tracing(&config, Some(log_buffer.clone()));
            tui::run_tui(config, log_buffer, cli.query).await
        }
    }
}

/// Install the global subscriber
///
/// With a log buffer (TUI mode) events go to the logs panel; without one they
/// go to stderr so stdout stays clean for results. File logging is added on
/// top when enabled. The returned guard must outlive the program's logging.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config, log_buffer: Option<LogBuffer>) -> Option<WorkerGuard> {
    let default_filter = format!("reposeek={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_writer, guard) = match file_appender(&config.logging) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    // File layer uses JSON format for structured log parsing
    let file_layer = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
    });

    let stderr_layer = log_buffer
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    let tui_layer = log_buffer.map(TuiLogLayer::new);

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Rolling file appender for the configured rotation, if file logging is on
fn file_appender(logging: &LoggingConfig) -> Option<tracing_appender::rolling::RollingFileAppender> {
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };
    Some(appender)
}
