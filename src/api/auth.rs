// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Registration and login endpoints.
//!
//! Both endpoints accept form-encoded bodies. The unknown-email and
//! bad-password login failures return distinguishable messages.

use axum::{extract::State, Form, Json};

use crate::{
    accounts::{CredentialError, RegisterError},
    error::ApiError,
    models::{LoginRequest, RegisterRequest, RegistrationResponse, TokenResponse},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/user-registration",
    request_body(content = RegisterRequest, content_type = "application/x-www-form-urlencoded"),
    tag = "Auth",
    responses(
        (status = 200, description = "Account created", body = RegistrationResponse),
        (status = 400, description = "Validation failed (malformed email, short password, duplicate email)")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Form(request): Form<RegisterRequest>,
) -> Result<Json<RegistrationResponse>, ApiError> {
    state
        .accounts
        .register(&request.username, &request.email, &request.password)
        .map_err(|e| match e {
            RegisterError::Invalid(errors) => ApiError::validation(errors),
            RegisterError::Store(e) => ApiError::internal(format!("Failed to create account: {e}")),
        })?;

    Ok(Json(RegistrationResponse {
        message: "User Registered Successfully.".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/user-login",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    tag = "Auth",
    responses(
        (status = 200, description = "Credentials accepted", body = TokenResponse),
        (status = 401, description = "Unknown email or wrong password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Form(request): Form<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let identity = state
        .accounts
        .verify(&request.email, &request.password)
        .map_err(|e| match e {
            CredentialError::UnknownEmail => ApiError::unauthorized("Invalid User Email"),
            CredentialError::BadPassword => ApiError::unauthorized("Invalid User Password"),
            CredentialError::Store(e) => {
                ApiError::internal(format!("Credential check failed: {e}"))
            }
        })?;

    let token = state
        .tokens
        .issue(&identity.id, &identity.email)
        .map_err(|e| ApiError::internal(format!("Failed to issue token: {e}")))?;

    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{SigningKeys, TokenIssuer};
    use crate::storage::{FileStorage, StoragePaths};
    use axum::http::StatusCode;
    use tempfile::TempDir;

    const TEST_KEY: &str = "lIyu7tg4oS9GAO3qwuJcloXxNh5nNjErgJYJfoLa6D0=";

    fn test_state() -> (AppState, TempDir) {
        let dir = TempDir::new().expect("create temp dir");
        let mut storage = FileStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().expect("initialize storage");

        let issuer = TokenIssuer::new(SigningKeys::from_base64(TEST_KEY).unwrap());
        (AppState::new(storage, issuer), dir)
    }

    fn register_form(username: &str, email: &str, password: &str) -> Form<RegisterRequest> {
        Form(RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    fn login_form(email: &str, password: &str) -> Form<LoginRequest> {
        Form(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    #[tokio::test]
    async fn register_returns_confirmation_message() {
        let (state, _dir) = test_state();

        let Json(response) = register(
            State(state),
            register_form("alice", "alice@example.com", "secret1"),
        )
        .await
        .expect("registration succeeds");

        assert_eq!(response.message, "User Registered Successfully.");
    }

    #[tokio::test]
    async fn duplicate_registration_is_a_field_error() {
        let (state, _dir) = test_state();

        register(
            State(state.clone()),
            register_form("alice", "alice@example.com", "secret1"),
        )
        .await
        .expect("first registration succeeds");

        let err = register(
            State(state),
            register_form("alice2", "alice@example.com", "other1"),
        )
        .await
        .expect_err("duplicate email rejected");

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        let fields = err.fields.expect("field detail present");
        assert!(fields.contains_key("Email"));
    }

    #[tokio::test]
    async fn short_password_is_rejected_with_field_detail() {
        let (state, _dir) = test_state();

        let err = register(
            State(state),
            register_form("bob", "bob@example.com", "12345"),
        )
        .await
        .expect_err("short password rejected");

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        let fields = err.fields.expect("field detail present");
        assert!(fields.contains_key("Password"));
    }

    #[tokio::test]
    async fn login_returns_verifiable_token() {
        let (state, _dir) = test_state();

        register(
            State(state.clone()),
            register_form("alice", "alice@example.com", "secret1"),
        )
        .await
        .expect("registration succeeds");

        let Json(response) = login(
            State(state.clone()),
            login_form("alice@example.com", "secret1"),
        )
        .await
        .expect("login succeeds");

        let claims = state.tokens.verify(&response.token).expect("token valid");
        assert_eq!(claims.email, "alice@example.com");
        assert!(!claims.sub.is_empty());
    }

    #[tokio::test]
    async fn login_failures_are_distinguishable() {
        let (state, _dir) = test_state();

        register(
            State(state.clone()),
            register_form("alice", "alice@example.com", "secret1"),
        )
        .await
        .expect("registration succeeds");

        let unknown = login(State(state.clone()), login_form("nobody@example.com", "x"))
            .await
            .expect_err("unknown email rejected");
        assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown.message, "Invalid User Email");

        let bad = login(
            State(state),
            login_form("alice@example.com", "wrongpw"),
        )
        .await
        .expect_err("wrong password rejected");
        assert_eq!(bad.status, StatusCode::UNAUTHORIZED);
        assert_eq!(bad.message, "Invalid User Password");
    }
}
