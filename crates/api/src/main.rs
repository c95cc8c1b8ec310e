use tasko_api::config::AppConfig;
use tasko_api::routes::create_router;
use tasko_api::server::Server;
use tasko_api::state::AppState;
use tasko_infrastructure::RepositoryFactory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!("Tasko - Starting Server");

    let config = AppConfig::from_env()?;

    let repository = RepositoryFactory::new(config.repository.clone())
        .create()
        .await?;

    let router = create_router(AppState::new(repository), &config.cors);

    let server = Server::new(config.server);
    server.run(router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tasko_api=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
