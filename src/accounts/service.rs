// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Credential verification and registration policy.
//!
//! `AccountService` is the single entry point for registration and login
//! credential checks. It owns the input-validation policy (password
//! length, email shape) and the distinction between unknown-email and
//! bad-password failures; storage and hashing live behind the
//! [`AccountStore`] seam.
//!
//! No lockout or throttling policy is applied to repeated failures.

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::store::{AccountIdentity, AccountStore, NewAccount, StoreError};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field-level validation failures, keyed by the form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Record a failure against a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    /// True when no failures have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The messages recorded for a field, if any.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Consume into the underlying field → messages map.
    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

/// Registration failure.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// One or more fields failed validation (includes duplicate email)
    #[error("validation failed")]
    Invalid(ValidationErrors),
    /// Identity-store fault
    #[error(transparent)]
    Store(StoreError),
}

/// Credential verification failure.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// No account matches the email
    #[error("unknown email")]
    UnknownEmail,
    /// The password does not match the stored credential
    #[error("password mismatch")]
    BadPassword,
    /// Identity-store fault
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The credential verifier.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    /// Create a service over an identity store.
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Register a new account.
    ///
    /// Validates the username, email and password, then delegates the
    /// account-creation write (and password hashing) to the identity
    /// store. A duplicate email is reported as a field-level validation
    /// error, matching how the other constraints surface.
    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AccountIdentity, RegisterError> {
        let mut errors = ValidationErrors::default();

        if username.trim().is_empty() {
            errors.add("Username", "The Username field is required.");
        }
        if !is_valid_email(email) {
            errors.add("Email", "The Email field is not a valid e-mail address.");
        }
        if password.len() < MIN_PASSWORD_LEN {
            errors.add(
                "Password",
                format!("Passwords must be at least {MIN_PASSWORD_LEN} characters."),
            );
        }
        if !errors.is_empty() {
            return Err(RegisterError::Invalid(errors));
        }

        let account = NewAccount {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        match self.store.create_account(account) {
            Ok(identity) => {
                info!(account_id = %identity.id, username = %identity.username, "registered account");
                Ok(identity)
            }
            Err(StoreError::DuplicateEmail) => {
                errors.add("Email", format!("Email '{}' is already taken.", email.trim()));
                Err(RegisterError::Invalid(errors))
            }
            Err(e) => Err(RegisterError::Store(e)),
        }
    }

    /// Verify login credentials.
    ///
    /// Looks the account up by email, then checks the password against the
    /// stored credential. The two failure modes stay distinguishable.
    pub fn verify(&self, email: &str, password: &str) -> Result<AccountIdentity, CredentialError> {
        let account = self
            .store
            .find_by_email(email)?
            .ok_or(CredentialError::UnknownEmail)?;

        if !self.store.verify_password(&account, password)? {
            return Err(CredentialError::BadPassword);
        }

        Ok(AccountIdentity::from(&account))
    }
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }
    !parts[0].is_empty() && parts[1].contains('.')
}
