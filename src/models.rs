// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! API request and response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::storage::StoredAccount;

/// Registration form body.
///
/// Field names are PascalCase on the wire
/// (`Username=alice&Email=...&Password=...`).
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterRequest {
    /// Display name for the new account
    #[serde(default)]
    pub username: String,
    /// Unique email address
    #[serde(default)]
    pub email: String,
    /// Password (minimum 6 characters)
    #[serde(default)]
    pub password: String,
}

/// Login form body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Successful registration response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Successful login response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Compact signed bearer token, valid for 2 hours
    pub token: String,
}

/// Account as shown on the admin surface. Never carries the password
/// credential.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountSummary {
    /// Stable account identifier
    pub id: String,
    /// Display name
    pub username: String,
    /// Account email
    pub email: String,
    /// When the account was registered
    pub created_at: DateTime<Utc>,
}

impl From<StoredAccount> for AccountSummary {
    fn from(account: StoredAccount) -> Self {
        Self {
            id: account.id,
            username: account.username,
            email: account.email,
            created_at: account.created_at,
        }
    }
}

/// Admin account listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountListResponse {
    /// All registered accounts
    pub accounts: Vec<AccountSummary>,
    /// Total count
    pub total: usize,
}

/// Admin account statistics.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountStatsResponse {
    /// Total number of registered accounts
    pub total_accounts: usize,
    /// Current timestamp
    pub timestamp: String,
}
