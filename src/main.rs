use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, build_router};
use referral_core::{
    AirtableStore, ReferralConfig, ReferralResult, ReferralService,
    config::{api_url_from_env_value, table_from_env_value, timeout_from_env_value},
};

/// Main entry point for the referral lookup server
///
/// Serves the REST API on port 3000 (configurable via REFERRAL_REST_ADDR).
///
/// Missing or invalid record store settings do not stop the server: the problem is logged once
/// here and every lookup answers with a configuration error.
///
/// # Environment Variables
/// - `REFERRAL_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `AIRTABLE_BASE_ID`: Airtable base holding the referral table
/// - `AIRTABLE_TOKEN`: Airtable personal access token
/// - `AIRTABLE_TABLE`: Table name (default: "RequestSpecialist")
/// - `AIRTABLE_API_URL`: API endpoint (default: "https://api.airtable.com/v0")
/// - `AIRTABLE_TIMEOUT_SECS`: Outbound request timeout (default: 10)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If logging cannot be initialised, the address cannot be bound, or
///   the server fails while running
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("referral=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("REFERRAL_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let state = match build_state() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Record store is not configured: {}", e);
            AppState::unconfigured()
        }
    };

    tracing::info!("++ Starting referral REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, build_router(state)).await?;

    Ok(())
}

/// Resolve record store configuration from the environment and wire up the lookup service.
fn build_state() -> ReferralResult<AppState> {
    let cfg = ReferralConfig::new(
        std::env::var("AIRTABLE_BASE_ID").ok(),
        std::env::var("AIRTABLE_TOKEN").ok(),
        table_from_env_value(std::env::var("AIRTABLE_TABLE").ok()),
        api_url_from_env_value(std::env::var("AIRTABLE_API_URL").ok()),
        timeout_from_env_value(std::env::var("AIRTABLE_TIMEOUT_SECS").ok())?,
    )?;
    tracing::info!("Record store: {:?}", cfg);

    let store = AirtableStore::new(cfg)?;
    Ok(AppState::new(ReferralService::new(Arc::new(store))))
}
