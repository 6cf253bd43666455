//! HTTP server setup and handlers.
//!
//! # Responsibilities
//! - Create the Axum router: `POST /message` plus the static-file fallback
//! - Serve `index.html`, `message.html` and other assets from the static root
//! - Answer unknown paths with the configured `error.html` and a 404 status
//! - Relay each submission and redirect the browser to the confirmation page
//!
//! The redirect is sent regardless of the relay outcome: acknowledging the
//! submission to the browser is independent of whether the message survived
//! the hand-off.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::{any, post},
};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::config::Settings;
use crate::relay::client;
use crate::relay::codec;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay_addr: String,
    pub static_root: PathBuf,
}

/// Build the Axum router with the submission route and the static fallback.
pub fn build_router(state: AppState) -> Router {
    let not_found = any(not_found_page).with_state(state.clone());
    let static_files = ServeDir::new(&state.static_root)
        .not_found_service(not_found)
        // POST to anything but /message gets the 404 page, not a 405
        .call_fallback_on_method_not_allowed(true);

    Router::new()
        .route("/message", post(submit_message))
        .with_state(state)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
}

/// Run the server, accepting connections on the configured address.
pub async fn start_web_server(settings: &Settings) -> Result<(), std::io::Error> {
    let state = AppState {
        relay_addr: settings.relay_addr(),
        static_root: PathBuf::from(&settings.http.static_root),
    };
    let app = build_router(state);

    let listener = TcpListener::bind(settings.http_addr()).await?;
    info!("HTTP server running on http://{}", settings.http_addr());

    axum::serve(listener, app).await
}

/// Accept one form submission and hand it to the relay client.
async fn submit_message(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    match codec::decode(&body) {
        Ok(msg) => {
            if let Err(e) = client::send(&state.relay_addr, &msg).await {
                // Best effort: the browser still gets its redirect.
                error!("Failed to relay submission: {e}");
            }
        }
        Err(e) => {
            warn!("Ignoring undecodable submission body: {e}");
        }
    }

    (StatusCode::FOUND, [(header::LOCATION, "/message.html")])
}

/// Serve the error page with a 404 status for anything the static root
/// does not cover.
async fn not_found_page(State(state): State<AppState>) -> impl IntoResponse {
    match tokio::fs::read_to_string(state.static_root.join("error.html")).await {
        Ok(page) => (StatusCode::NOT_FOUND, Html(page)),
        Err(e) => {
            warn!("Error page missing from static root: {e}");
            (StatusCode::NOT_FOUND, Html("<h1>404 Not Found</h1>".to_string()))
        }
    }
}
