// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        AccountListResponse, AccountStatsResponse, AccountSummary, LoginRequest, RegisterRequest,
        RegistrationResponse, TokenResponse,
    },
    state::AppState,
};

use self::health::{HealthChecks, HealthResponse, ReadyResponse};
use self::users::UserMeResponse;

pub mod admin;
pub mod auth;
pub mod health;
pub mod users;

/// Build the application router.
///
/// When `allowed_origin` is set, CORS is restricted to that origin;
/// otherwise the permissive default applies.
pub fn router(state: AppState, allowed_origin: Option<HeaderValue>) -> Router {
    let api_routes = Router::new()
        .route("/auth/user-registration", post(auth::register))
        .route("/auth/user-login", post(auth::login))
        .route("/auth/me", get(users::get_current_user))
        .route("/admin/accounts", get(admin::list_accounts))
        .route("/admin/accounts/{account_id}", delete(admin::delete_account))
        .route("/admin/stats", get(admin::account_stats));

    let cors = match allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };

    Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .nest("/api", api_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        users::get_current_user,
        admin::list_accounts,
        admin::account_stats,
        admin::delete_account,
        health::health,
        health::liveness
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            RegistrationResponse,
            TokenResponse,
            AccountSummary,
            AccountListResponse,
            AccountStatsResponse,
            UserMeResponse,
            ReadyResponse,
            HealthChecks,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration, login and caller identity"),
        (name = "Admin", description = "Account oversight"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
