//! Tutor Desk Client - Main Entry Point
//!
//! Create a study group on the tutoring backend from the terminal.

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use tutor_desk::app::application::run_app;
use tutor_desk::constants::LOG_FILE_PREFIX;
use tutor_desk::helpers::{get_or_create_data_dir, is_development};

/// Console gets warnings (or `RUST_LOG`), the daily log file gets everything
/// from INFO up (DEBUG in development builds).
fn init_tracing() -> anyhow::Result<Option<WorkerGuard>> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.as_str()));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_level = if is_development() { Level::DEBUG } else { Level::INFO };

    match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file = fmt::layer()
                .with_ansi(false)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer)
                .with_filter(EnvFilter::new(file_level.as_str()));

            tracing_subscriber::registry().with(console).with(file).try_init()?;
            Ok(Some(guard))
        }
        Err(e) => {
            tracing_subscriber::registry().with(console).try_init()?;
            tracing::warn!(error = %e, "File logging disabled");
            Ok(None)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = init_tracing()?;

    tracing::info!("Starting Tutor Desk client...");

    let exit = run_app()?;
    tracing::info!(exit = ?exit, "Tutor Desk client finished");
    Ok(())
}
