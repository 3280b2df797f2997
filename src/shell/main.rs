use event_registration::shared::config::RegistrationConfig;
use event_registration::shell::{build_state, http::router};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = RegistrationConfig::from_env()?;
    let addr = config.listen_addr;
    let app = router(build_state(config));

    tracing::info!("Registration page driver: http://{}/registration", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
