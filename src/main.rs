use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use counter_sync::cli::{Cli, Command};
use counter_sync::config::Config;
use counter_sync::data::{service_from_config, InMemoryCounterRepository};
use counter_sync::logging::init_tracing;
use counter_sync::server::{CounterServer, ServerState};
use counter_sync::session::Session;
use counter_sync::store::AppStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    cli.apply_overrides(&mut config);
    config.validate()?;

    match cli.command {
        Command::Serve { .. } => serve(&config).await,
        Command::Demo { .. } => demo(&config).await,
    }
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = ServerState::new(
        InMemoryCounterRepository::default(),
        config.server.latency(),
    );
    let server = CounterServer::bind(&config.server.bind_addr, state)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;

    server
        .run(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}

async fn demo(config: &Config) -> anyhow::Result<()> {
    let service = service_from_config(&config.service, InMemoryCounterRepository::default())
        .context("Failed to build counter service")?;
    let session = Session::new(AppStore::new(service), config.sync.debounce());

    session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;
    Ok(())
}
