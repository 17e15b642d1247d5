// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Admin endpoints for account oversight.
//!
//! These endpoints require a valid bearer token and provide the account
//! overview the admin surface is built on. Password credentials never
//! leave the storage layer.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use crate::{
    auth::Auth,
    error::ApiError,
    models::{AccountListResponse, AccountStatsResponse, AccountSummary},
    state::AppState,
    storage::{AccountRepository, StorageError},
};

#[utoipa::path(
    get,
    path = "/api/admin/accounts",
    tag = "Admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All registered accounts", body = AccountListResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_accounts(
    Auth(_user): Auth,
    State(state): State<AppState>,
) -> Result<Json<AccountListResponse>, ApiError> {
    let repo = AccountRepository::new(&state.storage);
    let accounts = repo
        .list_all()
        .map_err(|e| ApiError::internal(format!("Failed to list accounts: {e}")))?;

    let summaries: Vec<AccountSummary> = accounts.into_iter().map(Into::into).collect();
    Ok(Json(AccountListResponse {
        total: summaries.len(),
        accounts: summaries,
    }))
}

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = "Admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Account statistics", body = AccountStatsResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn account_stats(
    Auth(_user): Auth,
    State(state): State<AppState>,
) -> Result<Json<AccountStatsResponse>, ApiError> {
    let repo = AccountRepository::new(&state.storage);
    let accounts = repo
        .list_all()
        .map_err(|e| ApiError::internal(format!("Failed to read accounts: {e}")))?;

    Ok(Json(AccountStatsResponse {
        total_accounts: accounts.len(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/admin/accounts/{account_id}",
    params(("account_id" = String, Path, description = "Account to delete")),
    tag = "Admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn delete_account(
    Auth(user): Auth,
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<(), ApiError> {
    let repo = AccountRepository::new(&state.storage);
    repo.delete(&account_id).map_err(|e| match e {
        StorageError::NotFound(_) => ApiError::not_found("Account not found"),
        _ => ApiError::internal(format!("Failed to delete account: {e}")),
    })?;

    tracing::info!(%account_id, deleted_by = %user.account_id, "account deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthenticatedUser, SigningKeys, TokenIssuer};
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

    fn mock_auth() -> Auth {
        Auth(AuthenticatedUser {
            account_id: "acc-admin".to_string(),
            email: "admin@example.com".to_string(),
            token_id: "jti-admin".to_string(),
            expires_at: 0,
        })
    }

    fn register(state: &AppState, username: &str, email: &str) -> String {
        state
            .accounts
            .register(username, email, "secret1")
            .expect("registration succeeds")
            .id
    }

    #[tokio::test]
    async fn list_accounts_returns_summaries() {
        let (state, _dir) = test_state();
        register(&state, "alice", "alice@example.com");
        register(&state, "bob", "bob@example.com");

        let Json(response) = list_accounts(mock_auth(), State(state))
            .await
            .expect("listing succeeds");

        assert_eq!(response.total, 2);
        assert_eq!(response.accounts.len(), 2);
        assert!(response
            .accounts
            .iter()
            .any(|a| a.email == "alice@example.com"));
    }

    #[tokio::test]
    async fn stats_count_accounts() {
        let (state, _dir) = test_state();
        register(&state, "alice", "alice@example.com");

        let Json(response) = account_stats(mock_auth(), State(state))
            .await
            .expect("stats succeed");

        assert_eq!(response.total_accounts, 1);
    }

    #[tokio::test]
    async fn delete_account_removes_record() {
        let (state, _dir) = test_state();
        let account_id = register(&state, "alice", "alice@example.com");

        delete_account(mock_auth(), State(state.clone()), Path(account_id.clone()))
            .await
            .expect("delete succeeds");

        let err = delete_account(mock_auth(), State(state), Path(account_id))
            .await
            .expect_err("second delete fails");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
