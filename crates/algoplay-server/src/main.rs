//! Algoplay Server - HTTP API for the algorithm catalog
//!
//! Also carries the operator commands for inspecting the built-in catalog
//! without starting the server.

use algoplay_core::Catalog;
use algoplay_server::{PlaygroundServer, build_router, config::Config};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Algoplay Server CLI arguments
#[derive(Parser, Debug)]
#[command(name = "algoplay-server")]
#[command(about = "Algorithm Playground metadata server", long_about = None)]
struct Args {
    /// Enable verbose logging (debug output for server and catalog)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// List all algorithms grouped by category
    ListAlgorithms,
    /// Count algorithms per category
    CountAlgorithms,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Config loading may warn before the real subscriber exists
    let config = tracing::subscriber::with_default(
        fmt().with_writer(std::io::stderr).finish(),
        Config::from_env,
    )?;

    let catalog = Catalog::builtin().context("Built-in catalog is invalid")?;

    match args.command.unwrap_or(Command::Serve) {
        Command::ListAlgorithms => {
            print!("{}", list_algorithms(&catalog));
            Ok(())
        }
        Command::CountAlgorithms => {
            print!("{}", count_algorithms(&catalog));
            Ok(())
        }
        Command::Serve => {
            init_tracing(&config, args.verbose)?;

            let rt = tokio::runtime::Builder::new_multi_thread()
                .thread_name("algoplay-worker")
                .enable_all()
                .build()?;

            let server = Arc::new(PlaygroundServer::new(Arc::new(catalog), Arc::new(config)));
            rt.block_on(serve(server))
        }
    }
}

fn init_tracing(config: &Config, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { config.log_level() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "algoplay_server={level},algoplay_core={level},tower_http={level}",
            level = level
        )
        .into()
    });

    let file_layer = if config.log.to_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log.file)
            .with_context(|| format!("Failed to open log file {}", config.log.file))?;
        Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    info!(
        "Environment: {} (debug: {}), log level: {}",
        config.environment,
        config.environment.is_debug(),
        level
    );
    Ok(())
}

async fn serve(server: Arc<PlaygroundServer>) -> anyhow::Result<()> {
    let addr = server.config.addr;
    info!(
        "Catalog ready: {} algorithms in {} categories",
        server.catalog.total_algorithms(),
        server.catalog.total_categories()
    );

    let app = build_router(server);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Algorithm Playground listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn list_algorithms(catalog: &Catalog) -> String {
    let mut out = String::new();
    for category in catalog.categories() {
        out.push_str(&format!(
            "\n{} ({} algorithms):\n",
            category.id().to_uppercase(),
            category.len()
        ));
        for record in category.records() {
            out.push_str(&format!("  - {} | {}\n", record.name, record.time_complexity));
        }
    }
    out
}

fn count_algorithms(catalog: &Catalog) -> String {
    let stats = catalog.get_statistics();
    let mut out = format!("Total algorithms: {}\n", stats.total_algorithms);
    for (category, count) in &stats.counts_by_category {
        out.push_str(&format!("  {}: {}\n", category, count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_to_serve() {
        let args = Args::parse_from(["algoplay-server"]);
        assert!(args.command.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_subcommands() {
        let args = Args::parse_from(["algoplay-server", "list-algorithms"]);
        assert_eq!(args.command, Some(Command::ListAlgorithms));

        let args = Args::parse_from(["algoplay-server", "count-algorithms", "-v"]);
        assert_eq!(args.command, Some(Command::CountAlgorithms));
        assert!(args.verbose);
    }

    #[test]
    fn test_list_algorithms_output() {
        let catalog = Catalog::builtin().unwrap();
        let out = list_algorithms(&catalog);

        assert!(out.starts_with("\nSORTING (10 algorithms):\n"));
        assert!(out.contains("  - Bubble Sort | O(n²)\n"));
        assert!(out.contains("\nBACKTRACKING (4 algorithms):\n"));
    }

    #[test]
    fn test_count_algorithms_output() {
        let catalog = Catalog::builtin().unwrap();
        let out = count_algorithms(&catalog);
        let mut lines = out.lines();

        assert_eq!(lines.next(), Some("Total algorithms: 102"));
        assert_eq!(lines.next(), Some("  sorting: 10"));
        assert_eq!(out.lines().count(), 1 + catalog.total_categories());
    }
}
