use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global tracing subscriber
///
/// With a log directory, output goes to a timestamped file inside it;
/// otherwise to stderr. `RUST_LOG` takes precedence over the default level.
pub fn init_logger(log_dir: Option<&str>, verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_dir {
        Some(dir) => {
            // Create log directory if it doesn't exist
            if !Path::new(dir).exists() {
                fs::create_dir_all(dir)?;
            }

            // Create log file with timestamp
            let timestamp = Local::now().format("%Y%m%d_%H%M%S");
            let log_file = format!("{}/url_inspector_{}.log", dir, timestamp);

            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(fs::File::create(log_file)?))
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        None => {
            // No log directory configured, write to stderr
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    info!("Logger initialized");
    Ok(())
}
