use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use petpal_vets::config::Config;
use petpal_vets::{AuthInterceptor, ReqwestTransport, StaticToken, VetLookupClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting nearby vets lookup against {} ({})", config.api_url, config.environment);

    let transport = ReqwestTransport::new(config.request_timeout())
        .context("Error building the HTTP client")?;
    let transport = AuthInterceptor::new(transport, StaticToken::new(config.auth_token.clone()));
    let client = VetLookupClient::new(&config.api_url, transport);

    let vets = match client.fetch_nearby(config.lat, config.lng).await {
        Ok(vets) => vets,
        Err(e) => {
            warn!("Nearby vets lookup failed due to: {}", e);
            return Err(e).context("Failed to retrieve nearby vets");
        }
    };

    info!("Found {} vets near {}, {}", vets.len(), config.lat, config.lng);
    println!("{}", serde_json::to_string_pretty(&vets)?);

    Ok(())
}
