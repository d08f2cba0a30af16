use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use skate_contest_server::{app_with_state, config::{read_config, CONFIG_ENV_VAR}, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(about = "Registration, heats and scoring for a skateboard contest")]
struct Cli {
    /// YAML config file
    #[arg(long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    let config = read_config(cli.config.as_deref());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.logging_config))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = app_with_state(AppState::new(&config));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
