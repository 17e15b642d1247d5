// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::net::SocketAddr;

use axum::http::HeaderValue;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use finadmin_server::{
    api::router,
    auth::{SigningKeys, TokenIssuer},
    config::Settings,
    state::AppState,
    storage::{FileStorage, StoragePaths},
};

#[tokio::main]
async fn main() {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(settings.log_json);

    // One key value feeds both token issuance and validation
    let keys = SigningKeys::from_base64(&settings.token_key)
        .expect("FINADMIN_TOKEN_KEY is not valid base64");

    let mut storage = FileStorage::new(StoragePaths::new(&settings.data_dir));
    storage
        .initialize()
        .expect("Failed to initialize account storage");

    let state = AppState::new(storage, TokenIssuer::new(keys));

    let allowed_origin = settings.cors_origin.as_deref().map(|origin| {
        origin
            .parse::<HeaderValue>()
            .expect("FINADMIN_CORS_ORIGIN is not a valid header value")
    });
    let app = router(state, allowed_origin);

    let addr: SocketAddr = settings
        .bind_addr()
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!(%addr, "finadmin server listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
    tracing::info!("shutdown signal received");
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
