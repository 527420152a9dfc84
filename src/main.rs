use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use academy_reports::api::{create_router, AppState};
use academy_reports::auth::TokenAuth;
use academy_reports::config::ConfigLoader;
use academy_reports::query::PgReportStore;
use academy_reports::render::ChromiumEngine;

#[derive(Parser)]
#[command(name = "academy-reports")]
#[command(about = "Report export service for the academy administration", long_about = None)]
struct Cli {
    /// Directory holding the YAML configuration files
    #[arg(long, default_value = "./config/academia")]
    config: PathBuf,
    /// Address to listen on, overriding server.yaml
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?
        .into_config();

    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.set_database_url(url);
    }
    if let Some(bind) = cli.bind {
        config.set_bind_address(bind);
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.server().max_connections)
        .connect_lazy(&config.server().database_url)
        .context("invalid DATABASE_URL")?;

    let source = Arc::new(PgReportStore::new(pool));
    let pdf = Arc::new(ChromiumEngine::new(&config.export().pdf));
    let auth = Arc::new(TokenAuth::new(config.access()));
    let bind_address = config.server().bind_address.clone();

    let app = create_router(AppState::new(source, pdf, auth, config));
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    info!(address = %bind_address, "Report service listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
