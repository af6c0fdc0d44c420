mod config;
mod errors;
mod graph;
mod llm_client;
mod models;
mod pathway;
mod resources;
mod routes;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::graph::seed::seed_default_graph;
use crate::llm_client::LlmClient;
use crate::pathway::assembler::PathwayAssembler;
use crate::resources::aggregator::ResourceAggregator;
use crate::resources::strategies::ResourceSearchProvider;
use crate::resources::validation::{HttpReachabilityChecker, UrlReachabilityChecker};
use crate::routes::build_router;
use crate::skills::extractor::{KeywordSkillExtractor, LlmSkillExtractor, SkillExtractor};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathway API v{}", env!("CARGO_PKG_VERSION"));

    // Seed the skill/role graph (read-only from here on)
    let graph = Arc::new(seed_default_graph()?);

    // LLM client is optional: without a key, discovery and extraction stay local
    let llm = config
        .anthropic_api_key
        .clone()
        .map(LlmClient::new)
        .transpose()?;
    match &llm {
        Some(_) => info!("LLM client initialized (model: {})", llm_client::MODEL),
        None => info!("ANTHROPIC_API_KEY not set; intelligent search and LLM skill extraction disabled"),
    }

    // Discovery uses a single attempt per call
    let search_provider = llm.clone().map(|client| {
        Arc::new(client.with_max_attempts(1)) as Arc<dyn ResourceSearchProvider>
    });

    let checker: Option<Arc<dyn UrlReachabilityChecker>> = if config.validate_resource_urls {
        Some(Arc::new(HttpReachabilityChecker::new()?))
    } else {
        info!("URL validation disabled (offline mode)");
        None
    };

    let aggregator = Arc::new(ResourceAggregator::with_default_strategies(
        &config,
        search_provider,
        checker,
    ));
    let assembler = Arc::new(PathwayAssembler::new(graph.clone(), aggregator.clone()));

    let skill_extractor: Arc<dyn SkillExtractor> = match llm {
        Some(client) => Arc::new(LlmSkillExtractor::new(client, graph.clone())),
        None => Arc::new(KeywordSkillExtractor::new(graph.clone())),
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        graph,
        aggregator,
        assembler,
        skill_extractor,
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict CORS origins once the web client's domain is fixed
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
