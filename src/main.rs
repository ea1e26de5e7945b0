use poi_router::cache::{KeyValueCache, MemoryCacheService, RedisCacheService};
use poi_router::config::Config;
use poi_router::db::{create_pool, PgPoiRepository};
use poi_router::h3_index::H3Index;
use poi_router::services::{
    HttpEmbeddingClient, MultiQueryOrchestrator, PoiInfoStore, QdrantVectorStore, ReplacementService, SemanticSearchClient,
};
use poi_router::AppState;
use qdrant_client::Qdrant;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "easyroute=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting EasyRoute POI router");
    tracing::info!("Configuration loaded successfully");

    tracing::info!("Connecting to database...");
    let db_pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&db_pool).await?;
    tracing::info!("Database migrations completed");

    let cache: Arc<dyn KeyValueCache> = if let Some(ref redis_url) = config.redis_url {
        tracing::info!("Connecting to Redis cache...");
        match RedisCacheService::new(redis_url).await {
            Ok(redis) => Arc::new(redis),
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Falling back to in-memory cache.", e);
                Arc::new(MemoryCacheService::new(config.redis_cache_ttl, config.memory_cache_max_entries))
            }
        }
    } else {
        tracing::info!("Redis URL not configured. Using in-memory cache.");
        Arc::new(MemoryCacheService::new(config.redis_cache_ttl, config.memory_cache_max_entries))
    };

    tracing::info!("Connecting to Qdrant at {}...", config.qdrant_url);
    let mut qdrant_builder = Qdrant::from_url(&config.qdrant_url);
    if let Some(ref api_key) = config.qdrant_api_key {
        qdrant_builder = qdrant_builder.api_key(api_key.clone());
    }
    let qdrant_client = qdrant_builder.build()?;

    let poi_repo: Arc<dyn poi_router::db::PoiRepository> = Arc::new(PgPoiRepository::new(db_pool));
    let h3_index = Arc::new(H3Index::new(
        poi_repo.clone(),
        cache.clone(),
        config.h3_resolution,
        config.h3_cache_ttl,
    )?);
    let poi_store = Arc::new(PoiInfoStore::new(poi_repo.clone(), cache.clone(), config.poi_cache_ttl));

    let embedding_client = Arc::new(HttpEmbeddingClient::new(
        config.embedding_service_url.clone(),
        config.embedding_model.clone(),
    ));
    let vector_store = Arc::new(QdrantVectorStore::new(qdrant_client, config.qdrant_collection_name.clone()));
    let semantic = Arc::new(SemanticSearchClient::new(embedding_client, vector_store));

    let orchestrator = Arc::new(MultiQueryOrchestrator::new(h3_index.clone(), semantic.clone()));
    let replacement_service = Arc::new(ReplacementService::new(cache.clone(), poi_store.clone(), config.route_cache_ttl));

    let state = Arc::new(AppState {
        poi_repo,
        cache,
        h3_index,
        poi_store,
        semantic,
        orchestrator,
        replacement_service,
        config: Arc::new(config.clone()),
    });

    let app = poi_router::routes::create_router(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http());

    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
