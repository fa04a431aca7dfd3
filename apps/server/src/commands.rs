//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing::info;

use docrouter_resolver::LibraryRegistry;
use docrouter_server::{AppState, app};
use docrouter_shared::{AppConfig, DocRequest, init_config, load_config, load_config_from};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// docrouter: documentation context for coding agents.
#[derive(Parser)]
#[command(
    name = "docrouter",
    version,
    about = "Serve library documentation snippets for coding agents.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ~/.docrouter/docrouter.toml).
    #[arg(long, global = true, env = "DOCROUTER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Start the HTTP server.
    Serve {
        /// Interface to bind.
        #[arg(long, env = "DOCROUTER_HOST")]
        host: Option<String>,

        /// Port to bind.
        #[arg(long, env = "DOCROUTER_PORT")]
        port: Option<u16>,

        /// Per-fetch timeout in seconds.
        #[arg(long, env = "DOCROUTER_FETCH_TIMEOUT")]
        fetch_timeout: Option<u64>,
    },

    /// Resolve one function and print its documentation.
    Resolve {
        /// Library id, e.g. `aws` or `openai-agents`.
        library: String,

        /// Function name, e.g. `boto3.client`.
        function: String,

        /// Language echoed in the context.
        #[arg(short, long, default_value = "python")]
        language: String,
    },

    /// Configuration management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. `RUST_LOG` takes precedence.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "docrouter=info,tower_http=info",
        1 => "docrouter=debug,tower_http=debug",
        _ => "docrouter=trace,tower_http=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;
    match cli.command {
        Command::Serve {
            host,
            port,
            fetch_timeout,
        } => {
            let mut config = read_config(config_path.as_deref())?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(secs) = fetch_timeout {
                config.fetch.timeout_secs = secs;
            }
            docrouter_shared::validate_config(&config)?;
            cmd_serve(&config).await
        }
        Command::Resolve {
            library,
            function,
            language,
        } => cmd_resolve(config_path.as_deref(), &library, &function, &language).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(config_path.as_deref()),
        },
    }
}

fn read_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config)
}

async fn cmd_serve(config: &AppConfig) -> Result<()> {
    let registry = LibraryRegistry::from_config(config)?;
    let router = app(AppState::new(registry));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("failed to bind {addr}: {e}"))?;

    info!(%addr, "docrouter listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

async fn cmd_resolve(
    config_path: Option<&Path>,
    library: &str,
    function: &str,
    language: &str,
) -> Result<()> {
    let config = read_config(config_path)?;
    let registry = LibraryRegistry::from_config(&config)?;
    let resolver = registry
        .get(library)
        .ok_or_else(|| eyre!("unknown library '{library}'"))?;

    let context = resolver.resolve(&DocRequest::new(language, function)).await;
    println!("{}", context.documentation);
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = read_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
