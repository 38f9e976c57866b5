//! Service entry point.
//!
//! Configuration problems (a missing or empty API credential above all)
//! abort startup before the gateway binds; nothing is ever served without
//! a working credential.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use boratbot::chat::{ChatEngine, SessionManager};
use boratbot::config::{Config, UiVariant};
use boratbot::llm::create_provider;
use boratbot::persona;
use boratbot::web::{AppState, WebGateway};

#[derive(Parser, Debug)]
#[command(name = "boratbot", about = "Borat persona chatbot web service")]
struct Cli {
    /// Bind address (overrides BORAT_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides BORAT_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Chat page header layout (overrides BORAT_UI_VARIANT)
    #[arg(long, value_enum)]
    ui: Option<UiVariant>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boratbot=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(ui) = cli.ui {
        config.ui_variant = ui;
    }

    let persona = persona::borat();
    tracing::info!(
        "Starting {} chatbot (model {}, window {} exchanges)",
        persona.name,
        config.model,
        config.memory_exchanges
    );

    let provider = create_provider(&config);
    let engine = Arc::new(ChatEngine::new(
        provider,
        persona.clone(),
        config.temperature,
    ));
    let sessions = Arc::new(SessionManager::new(persona, config.memory_exchanges));

    let state = AppState {
        engine,
        sessions,
        ui_variant: config.ui_variant,
    };

    WebGateway::start(state, &config.host, config.port).await?;
    Ok(())
}
