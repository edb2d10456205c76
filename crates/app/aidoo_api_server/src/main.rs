//! ai.doo chat relay server binary.
//!
//! Serves `POST /api/chat` and its CORS preflight. The completion-service
//! credential comes from `OPENAI_API_KEY`; when it is missing the server
//! still starts and each chat request fails with a server error.

use aidoo_api::config::ApiConfig;
use clap::Parser;
use tracing::{info, warn};

/// CLI arguments for the relay server. Unset flags fall back to the
/// environment, see [`ApiConfig::from_env`].
#[derive(Parser, Debug)]
#[command(name = "aidoo_api_server", version, about = "ai.doo chat relay server")]
struct Args {
    /// Address to listen on [env: BIND_ADDR, default: 127.0.0.1:3100].
    #[arg(long)]
    bind_addr: Option<String>,

    /// Root URL of the OpenAI-compatible completion API
    /// [env: OPENAI_BASE_URL, default: https://api.openai.com/v1].
    #[arg(long)]
    openai_base_url: Option<String>,

    /// Browser origin allowed to call the relay; repeat for several
    /// [env: ALLOWED_ORIGINS, comma-separated].
    #[arg(long = "allowed-origin", value_delimiter = ',')]
    allowed_origins: Vec<String>,
}

impl Args {
    fn into_config(self) -> ApiConfig {
        let mut config = ApiConfig::from_env();
        if let Some(bind_addr) = self.bind_addr {
            config.bind_addr = bind_addr;
        }
        if let Some(url) = self.openai_base_url {
            config.openai_base_url = url;
        }
        if !self.allowed_origins.is_empty() {
            config.allowed_origins = self.allowed_origins;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,aidoo_api=debug,aidoo_core=debug".into()),
        )
        .init();

    let config = Args::parse().into_config();

    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; chat requests will fail");
    }

    info!(
        bind_addr = %config.bind_addr,
        openai_base_url = %config.openai_base_url,
        allowed_origins = ?config.allowed_origins,
        "starting aidoo_api_server"
    );

    let state = aidoo_api::AppState::from_config(config.clone());
    let app = aidoo_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "chat relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;

    Ok(())
}
