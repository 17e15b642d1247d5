// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token claims and authenticated caller representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims carried by an issued bearer token.
///
/// Issuer and audience are deliberately not part of the token contract;
/// validity is signature plus expiry only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject - the account identifier
    pub sub: String,

    /// Account email
    pub email: String,

    /// Unique token identifier, fresh per token.
    /// Reserved for revocation bookkeeping; nothing consumes it yet.
    pub jti: String,

    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
}

/// Authenticated caller extracted from a verified bearer token.
///
/// This is the type handlers receive for protected endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Canonical account ID (token `sub` claim)
    pub account_id: String,

    /// Account email
    pub email: String,

    /// Token identifier (not serialized in responses)
    #[serde(skip)]
    pub token_id: String,

    /// Token expiration (Unix timestamp, not serialized in responses)
    #[serde(skip)]
    pub expires_at: i64,
}

impl AuthenticatedUser {
    /// Create from verified token claims.
    pub fn from_claims(claims: TokenClaims) -> Self {
        Self {
            account_id: claims.sub,
            email: claims.email,
            token_id: claims.jti,
            expires_at: claims.exp,
        }
    }
}
