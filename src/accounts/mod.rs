// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Accounts Module
//!
//! Account registration and credential verification for the admin API.
//!
//! ## Flow
//!
//! 1. Client submits registration or login (form-encoded)
//! 2. [`AccountService`] applies the validation policy and delegates to
//!    the identity store behind the [`AccountStore`] seam
//! 3. On successful login, the caller hands the resulting
//!    [`AccountIdentity`] to the token issuer
//!
//! The store owns password hashing (bcrypt) and email uniqueness; the
//! service owns the policy (password ≥ 6 chars, well-formed email) and
//! the unknown-email / bad-password distinction.

pub mod service;
pub mod store;

pub use service::{AccountService, CredentialError, RegisterError, ValidationErrors};
pub use store::{AccountIdentity, AccountStore, FsAccountStore, NewAccount, StoreError};
