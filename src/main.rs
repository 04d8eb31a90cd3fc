use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use arena::audio::{AudioToggle, Muted, Playback};
use arena::catalog::Catalog;
use arena::config::Settings;
use arena::controller::ArenaController;
use arena::rating::{LogSink, SubmissionSink};
use arena::server::{ApiServer, AppState};
use arena::shell;

#[derive(Parser)]
#[command(name = "arena", version, about = "Browse and rate AI models")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server in the background and the interactive shell
    Run,
    /// Start only the API server
    Serve,
    /// Start only the interactive shell
    Browse,
}

/// Main entry point for the Model Arena application
///
/// Loads settings, sets up file logging and then runs the selected mode.
/// Without a subcommand `run` is assumed.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load settings first
    let settings = Settings::new().context("Failed to load settings")?;

    let log_path = settings.log_dir().to_path_buf();
    std::fs::create_dir_all(&log_path)
        .with_context(|| format!("Failed to create log directory {}", log_path.display()))?;

    let file_appender = tracing_appender::rolling::RollingFileAppender::new(
        tracing_appender::rolling::Rotation::DAILY,
        &log_path,
        "arena",
    );
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        // Disable ANSI colors for cleaner log files
        .with_ansi(false)
        .with_line_number(true)
        .with_file(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_env_filter(EnvFilter::new(&settings.logging.level))
        .init();

    info!("Model Arena starting up...");
    info!("Log directory: {}", log_path.display());

    let catalog = Arc::new(
        Catalog::load(settings.catalog.path.as_deref()).context("Failed to load model catalog")?,
    );
    // The shell echoes its own submissions, the server only logs them
    let sink: Arc<dyn SubmissionSink> = Arc::new(LogSink::new(true));
    let state = AppState::logging(Arc::clone(&catalog), settings.rating_limits());
    let server = ApiServer::new(state, settings.server.host.clone(), settings.server.port);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Serve => {
            println!(
                "Serving Model Arena API on http://{}:{}",
                settings.server.host, settings.server.port
            );
            server
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
        }
        Commands::Run => {
            // Start server in a separate task
            tokio::spawn(async move {
                if let Err(e) = server.start().await {
                    error!("Server error: {}", e);
                    eprintln!("Server error: {}", e);
                }
            });
            run_shell(catalog, sink, &settings).await?;
        }
        Commands::Browse => run_shell(catalog, sink, &settings).await?,
    }

    info!("Model Arena shutting down");
    Ok(())
}

async fn run_shell(
    catalog: Arc<Catalog>,
    sink: Arc<dyn SubmissionSink>,
    settings: &Settings,
) -> anyhow::Result<()> {
    let music: AudioToggle<Box<dyn Playback>> =
        AudioToggle::new(Box::new(Muted), settings.audio.volume);
    let mut controller = ArenaController::new(catalog, settings.rating_limits(), sink, music)
        .with_music_on_gesture(settings.audio.enabled);

    // rustyline blocks, keep it off the runtime threads
    tokio::task::spawn_blocking(move || shell::shell_loop(&mut controller))
        .await
        .context("Shell task panicked")?
        .map_err(|e| anyhow::anyhow!("Shell error: {}", e))
}
