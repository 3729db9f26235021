//! analytiq-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! file and serves the site API over HTTP.
//!
//! ```
//! analytiq-server                        # same as `serve`
//! analytiq-server init                   # create tables and exit
//! analytiq-server export subscribers     # one JSON object per line
//! ```

use std::{path::PathBuf, sync::Arc};

use analytiq_store_sqlite::SqliteStore;
use analytiq_web::{AppState, ServerConfig};
use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "AnalytIQ site backend")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml", global = true)]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Create the tables if needed, then serve HTTP (default).
  Serve,
  /// Create the tables if needed and exit.
  Init,
  /// Print every row of a table to stdout as JSON lines.
  Export {
    #[arg(value_enum)]
    table: Table,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum Table {
  Subscribers,
  Contacts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr so `export` output stays clean.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let store = SqliteStore::open(&server_cfg.database_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", server_cfg.database_path)
    })?;

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => {
      initialize(&store).await?;
      serve(store, server_cfg).await
    }
    Command::Init => {
      initialize(&store).await?;
      tracing::info!(path = ?server_cfg.database_path, "database ready");
      Ok(())
    }
    Command::Export { table } => export(&store, table).await,
  }
}

async fn initialize(store: &SqliteStore) -> anyhow::Result<()> {
  store
    .initialize()
    .await
    .context("failed to initialise database schema")
}

async fn serve(store: SqliteStore, server_cfg: ServerConfig) -> anyhow::Result<()> {
  let address = server_cfg.address();
  let state = AppState {
    store:  Arc::new(store),
    config: Arc::new(server_cfg),
  };
  let app = analytiq_web::router(state);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

async fn export(store: &SqliteStore, table: Table) -> anyhow::Result<()> {
  let lines = match table {
    Table::Subscribers => store
      .list_subscribers()
      .await?
      .iter()
      .map(serde_json::to_string)
      .collect::<Result<Vec<_>, _>>()?,
    Table::Contacts => store
      .list_contact_messages()
      .await?
      .iter()
      .map(serde_json::to_string)
      .collect::<Result<Vec<_>, _>>()?,
  };
  for line in lines {
    println!("{line}");
  }
  Ok(())
}
