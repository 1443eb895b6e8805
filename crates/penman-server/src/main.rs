use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{AwsTransport, BedrockInferenceClient, S3ObjectStore};
use application::GenerationPipeline;
use config::AppConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<GenerationPipeline>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Penman API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the router with docs, health and generation routes
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::generate::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🖋️  Penman API initializing...");

    dotenvy::dotenv().ok();

    let config = AppConfig::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
        .map_err(anyhow::Error::from)?;

    let transport = AwsTransport::new(
        config.credentials.clone(),
        config.region.clone(),
        config.read_timeout,
        config.max_attempts,
    )
    .map_err(anyhow::Error::from)?;

    let inference = Arc::new(BedrockInferenceClient::new(
        transport.clone(),
        config.bedrock_endpoint.clone(),
        config.model_id.clone(),
    ));
    let objects = Arc::new(S3ObjectStore::new(
        transport.clone(),
        config.s3_endpoint.clone(),
        config.bucket.clone(),
    ));

    tracing::info!(
        "☁️  AWS region {} (up to {} attempts per call)",
        transport.region(),
        transport.max_attempts()
    );
    tracing::info!("🤖 Model: {}", config.model_id);
    tracing::info!("🪣 Bucket: {}", objects.bucket());

    let state = AppState {
        pipeline: Arc::new(GenerationPipeline::new(inference, objects)),
    };

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Penman API ready");

    Ok(router.into())
}
