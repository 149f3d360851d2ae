//! JSON routes for the voice cart.
//!
//! - `GET  /products`       - catalog passthrough
//! - `GET  /cart`           - current cart lines and total
//! - `POST /process_voice`  - interpret one utterance and apply it to the cart
//! - `GET  /health`         - catalog readiness (see `health`)

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;
use voicecart_agent::runtime::{AssistantRuntime, VoiceOutcome};
use voicecart_core::catalog::CatalogSource;
use voicecart_core::{CartView, InterfaceError, Product};

use crate::health;

#[derive(Clone)]
pub struct ApiState {
    runtime: Arc<AssistantRuntime>,
}

impl ApiState {
    pub fn new(runtime: Arc<AssistantRuntime>) -> Self {
        Self { runtime }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VoiceRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError(pub InterfaceError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            InterfaceError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorBody { error: self.0.message().to_string() })).into_response()
    }
}

pub fn router(runtime: Arc<AssistantRuntime>) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/cart", get(show_cart))
        .route("/process_voice", post(process_voice))
        .with_state(ApiState::new(runtime))
}

/// Full HTTP surface: API routes, health, optional permissive CORS and request tracing.
pub fn app(
    runtime: Arc<AssistantRuntime>,
    catalog: Arc<dyn CatalogSource>,
    cors_enabled: bool,
) -> Router {
    let mut service = Router::new().merge(router(runtime)).merge(health::router(catalog));

    if cors_enabled {
        let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
        service = service.layer(cors);
    }

    service.layer(TraceLayer::new_for_http())
}

async fn list_products(State(state): State<ApiState>) -> Result<Json<ProductsResponse>, ApiError> {
    let correlation_id = new_correlation_id();
    let products = state.runtime.products().await.map_err(|error| {
        warn!(
            event_name = "api.products.failed",
            correlation_id = %correlation_id,
            error = %error,
            "product listing failed"
        );
        ApiError(InterfaceError::internal(error.to_string(), correlation_id.as_str()))
    })?;
    Ok(Json(ProductsResponse { products }))
}

async fn show_cart(State(state): State<ApiState>) -> Json<CartView> {
    Json(state.runtime.cart_view().await)
}

async fn process_voice(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<VoiceOutcome>, ApiError> {
    let correlation_id = new_correlation_id();
    // Any content type is accepted and an unparsable body counts as empty text.
    let request = serde_json::from_slice::<VoiceRequest>(&body).unwrap_or_default();
    let text = request.text.unwrap_or_default();

    info!(
        event_name = "api.process_voice.received",
        correlation_id = %correlation_id,
        text_length = text.len(),
        "voice command received"
    );

    let outcome = state
        .runtime
        .process_utterance(&text, &correlation_id)
        .await
        .map_err(|error| ApiError(error.into_interface(correlation_id.as_str())))?;
    Ok(Json(outcome))
}

fn new_correlation_id() -> String {
    Uuid::new_v4().to_string()
}
