use std::env;
use std::net::SocketAddr;

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use waitlist::{resolve_rejection, ProviderClient, ProviderConfig, SUCCESS_MESSAGE};

#[derive(Clone)]
struct AppState {
    provider: ProviderClient,
}

#[derive(Debug, Deserialize)]
struct SubscribeRequest {
    email: String,
}

#[derive(Debug, Serialize)]
struct SubscribeResponse {
    message: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr: SocketAddr = env::var("WAITLIST_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:9200".to_string())
        .parse()
        .expect("invalid WAITLIST_ADDR");

    let config = ProviderConfig {
        base_url: env::var("MAILING_API_URL")
            .unwrap_or_else(|_| "https://us1.api.mailchimp.com".to_string()),
        list_id: env::var("MAILING_LIST_ID").unwrap_or_default(),
        api_key: env::var("MAILING_API_KEY").unwrap_or_default(),
    };

    let state = AppState {
        provider: ProviderClient::new(config),
    };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/api/subscribe", post(subscribe))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("waitlist server listening on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

/// Thin pass-through to the provider's add-list-member call. Members are
/// added as `pending` so they confirm via double opt-in.
async fn subscribe(State(state): State<AppState>, Json(req): Json<SubscribeRequest>) -> Response {
    match state.provider.add_pending_member(&req.email).await {
        Ok(()) => (
            StatusCode::OK,
            Json(SubscribeResponse {
                message: SUCCESS_MESSAGE.to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            error!("subscribe failed: {err}");
            let rejection = resolve_rejection(&err);
            let status = StatusCode::from_u16(rejection.status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(SubscribeResponse {
                    message: rejection.message,
                }),
            )
                .into_response()
        }
    }
}
