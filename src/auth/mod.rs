// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Bearer-token authentication for the admin API.
//!
//! ## Auth Flow
//!
//! 1. Client logs in via `POST /api/auth/user-login`
//! 2. The token issuer mints a signed HMAC-SHA-256 token
//!    (`sub`, `email`, `jti`, `exp` = issuance + 2 hours)
//! 3. Client sends `Authorization: Bearer <token>` on protected requests
//! 4. The `Auth` extractor verifies signature and expiry against the
//!    same signing key and hands the handler an [`AuthenticatedUser`]
//!
//! ## Security
//!
//! - One symmetric key, loaded once from configuration, shared by the
//!   issuance and validation paths
//! - Tokens are stateless: no server-side session, no revocation list
//! - Issuer/audience claims are not used
//! - No lockout policy on repeated login failures

pub mod claims;
pub mod error;
pub mod extractor;
pub mod token;

pub use claims::{AuthenticatedUser, TokenClaims};
pub use error::AuthError;
pub use extractor::Auth;
pub use token::{SigningKeys, TokenIssuer};
