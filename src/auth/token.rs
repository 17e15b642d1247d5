// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer-token issuance and verification.
//!
//! Both paths share one [`SigningKeys`] value built from the configured
//! secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::claims::TokenClaims;
use super::AuthError;

/// Token lifetime (2 hours). No refresh mechanism exists.
const TOKEN_TTL_HOURS: i64 = 2;

/// Symmetric HMAC-SHA-256 key material, built once at startup from the
/// base64-encoded `FINADMIN_TOKEN_KEY` secret.
pub struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKeys {
    /// Build the key pair from a base64-encoded secret.
    pub fn from_base64(secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        Ok(Self {
            encoding: EncodingKey::from_base64_secret(secret)?,
            decoding: DecodingKey::from_base64_secret(secret)?,
        })
    }
}

/// Issues and verifies bearer tokens for authenticated accounts.
pub struct TokenIssuer {
    keys: SigningKeys,
}

impl TokenIssuer {
    /// Create an issuer over shared key material.
    pub fn new(keys: SigningKeys) -> Self {
        Self { keys }
    }

    /// Mint a signed token for a verified account.
    ///
    /// Claims: `sub` (account id), `email`, a fresh `jti`, and
    /// `exp` = now + 2 hours. Pure function of inputs, clock and key;
    /// nothing is persisted.
    pub fn issue(&self, account_id: &str, email: &str) -> Result<String, AuthError> {
        let expires_at = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);
        self.issue_with_expiry(account_id, email, expires_at.timestamp())
    }

    fn issue_with_expiry(
        &self,
        account_id: &str,
        email: &str,
        exp: i64,
    ) -> Result<String, AuthError> {
        let claims = TokenClaims {
            sub: account_id.to_string(),
            email: email.to_string(),
            jti: Uuid::new_v4().to_string(),
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| AuthError::InternalError(format!("Failed to sign token: {e}")))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// Issuer and audience validation are disabled: they are not part of
    /// the token contract. Leeway is zero because issuance and validation
    /// share the same clock.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::ImmatureSignature => AuthError::TokenNotYetValid,
                _ => AuthError::MalformedToken,
            })
    }
}
