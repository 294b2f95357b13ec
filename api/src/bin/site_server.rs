use std::net::SocketAddr;
use std::time::Duration;

use api::logging::init_server_logger;
use api::server::{router, SiteState};
use api::{ApiConfig, ContentClient};
use clap::Parser;

/// Crawler-facing companion service for the Manzil site.
#[derive(Debug, Parser)]
#[command(name = "site-server", version, about)]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "MANZIL_BIND", default_value = "0.0.0.0:8081")]
    bind: SocketAddr,

    /// Base URL of the content API.
    #[arg(long, env = "MANZIL_API_URL", default_value = api::config::DEFAULT_API_URL)]
    api_url: String,

    /// Public origin of the site, used for absolute sitemap links.
    #[arg(long, env = "MANZIL_SITE_URL", default_value = api::config::DEFAULT_SITE_URL)]
    site_url: String,

    /// Content API request timeout in seconds.
    #[arg(
        long,
        env = "MANZIL_API_TIMEOUT_SECS",
        default_value_t = api::config::DEFAULT_TIMEOUT_SECS
    )]
    timeout_secs: u64,

    /// Emit JSON log lines.
    #[arg(long)]
    json_logs: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_server_logger(cli.verbose, cli.json_logs);

    let config = ApiConfig::new(&cli.api_url, &cli.site_url)?
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    tracing::info!(api = %config.api_url, site = %config.site_url, "starting site server");

    let client = ContentClient::new(config)?;
    let app = router(SiteState::new(client));

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!(addr = %cli.bind, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("site server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
