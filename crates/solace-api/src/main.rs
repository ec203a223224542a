use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use solace_api::{
    build_router,
    config::{Config, StorageBackend},
    state::AppState,
};
use solace_engine::Responder;
use solace_llm::ClientFactory;
use solace_persist::{
    CachedPersistenceClient, LocalCache, MemoryPersistenceClient, MongoPersistenceClient, PersistenceClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config);

    tracing::info!("Starting Solace API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    let persist = init_persistence(&config).await?;

    let mut responder = Responder::builder().config(config.responder_config());
    let mut generator_name = None;
    match config.provider_config() {
        Some(provider) => {
            let generator = ClientFactory::create_generator(provider)?;
            tracing::info!(provider = generator.provider_name(), model = %config.llm.model, "Remote generation enabled");
            generator_name = Some(generator.provider_name().to_string());
            responder = responder.generator(generator);
        }
        None => tracing::warn!("No text generation provider configured, using fallback replies only"),
    }

    let state = Arc::new(AppState::new(
        config.clone(),
        persist,
        Arc::new(responder.build()),
        generator_name,
    ));

    spawn_session_sweeper(&state);

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("API docs: http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn init_persistence(config: &Config) -> anyhow::Result<Arc<dyn PersistenceClient>> {
    let backend: Arc<dyn PersistenceClient> = match config.persist.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Arc::new(MemoryPersistenceClient::new())
        }
        StorageBackend::MongoDb => {
            let uri = config
                .mongodb_uri
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("MONGODB_URI is not set"))?;
            tracing::info!("Connecting to MongoDB");
            let client = MongoPersistenceClient::connect(uri, &config.persist.database).await?;
            tracing::info!("MongoDB connected");
            Arc::new(client)
        }
    };

    Ok(match &config.persist.cache_path {
        Some(path) => {
            tracing::info!(path = %path, "Mirroring chats to local cache");
            Arc::new(CachedPersistenceClient::new(backend, LocalCache::new(path)))
        }
        None => backend,
    })
}

/// Periodically drop idle live sessions so the registry stays bounded
fn spawn_session_sweeper(state: &AppState) {
    let sessions = state.sessions.clone();
    let period = sessions.idle_ttl().max(Duration::from_secs(1)) / 2;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let evicted = sessions.evict_idle().await;
            if evicted > 0 {
                tracing::debug!(evicted, "Evicted idle sessions");
            }
        }
    });
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry.with(tracing_subscriber::fmt::layer().json()).init();
        }
        _ => {
            registry.with(tracing_subscriber::fmt::layer().pretty()).init();
        }
    }
}
