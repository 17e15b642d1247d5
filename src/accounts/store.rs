// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Identity-store seam.
//!
//! The credential verifier needs exactly three capabilities from the
//! account backend: create an account, find one by email, and check a
//! password. Keeping the seam this narrow lets the verifier be exercised
//! against an in-memory implementation in tests.

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::storage::{AccountRepository, FileStorage, StorageError, StoredAccount};

/// Error type for identity-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email address is already registered
    #[error("email already registered")]
    DuplicateEmail,
    /// Underlying storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Password hashing or verification failure
    #[error("password hash failure: {0}")]
    Hash(String),
}

/// Identity of a stored account, as handed to the token issuer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountIdentity {
    /// Stable account identifier
    pub id: String,
    /// Display name
    pub username: String,
    /// Account email (lowercased)
    pub email: String,
}

impl From<&StoredAccount> for AccountIdentity {
    fn from(account: &StoredAccount) -> Self {
        Self {
            id: account.id.clone(),
            username: account.username.clone(),
            email: account.email.clone(),
        }
    }
}

/// Request to create an account.
///
/// The password arrives in plain text and is hashed by the store; it is
/// never persisted as-is.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Narrow capability interface over the account backend.
pub trait AccountStore: Send + Sync {
    /// Create an account, hashing the password.
    ///
    /// Fails with `StoreError::DuplicateEmail` when the email is taken.
    fn create_account(&self, account: NewAccount) -> Result<AccountIdentity, StoreError>;

    /// Look up an account by email.
    fn find_by_email(&self, email: &str) -> Result<Option<StoredAccount>, StoreError>;

    /// Check a candidate password against the stored credential.
    fn verify_password(&self, account: &StoredAccount, candidate: &str)
        -> Result<bool, StoreError>;
}

/// File-backed identity store.
///
/// Owns bcrypt hashing and email normalization; persistence is delegated
/// to [`AccountRepository`].
#[derive(Debug, Clone)]
pub struct FsAccountStore {
    storage: FileStorage,
}

impl FsAccountStore {
    /// Create a new store over initialized file storage.
    pub fn new(storage: FileStorage) -> Self {
        Self { storage }
    }
}

impl AccountStore for FsAccountStore {
    fn create_account(&self, account: NewAccount) -> Result<AccountIdentity, StoreError> {
        let repo = AccountRepository::new(&self.storage);
        let email = normalize_email(&account.email);

        if repo.get_by_email(&email).is_ok() {
            return Err(StoreError::DuplicateEmail);
        }

        let stored = StoredAccount {
            id: Uuid::new_v4().to_string(),
            username: account.username,
            email,
            password_hash: hash_password(&account.password)?,
            created_at: Utc::now(),
        };

        match repo.create(&stored) {
            Ok(()) => Ok(AccountIdentity::from(&stored)),
            // A concurrent registration can win the race between the lookup
            // above and the write; surface it as the same duplicate error.
            Err(StorageError::AlreadyExists(_)) => Err(StoreError::DuplicateEmail),
            Err(e) => Err(e.into()),
        }
    }

    fn find_by_email(&self, email: &str) -> Result<Option<StoredAccount>, StoreError> {
        let repo = AccountRepository::new(&self.storage);
        match repo.get_by_email(&normalize_email(email)) {
            Ok(account) => Ok(Some(account)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn verify_password(
        &self,
        account: &StoredAccount,
        candidate: &str,
    ) -> Result<bool, StoreError> {
        bcrypt::verify(candidate, &account.password_hash)
            .map_err(|e| StoreError::Hash(e.to_string()))
    }
}

/// Emails are matched case-insensitively; store them lowercased.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Hash a password using bcrypt.
fn hash_password(password: &str) -> Result<String, StoreError> {
    // Lower cost factor keeps the test suite fast
    let cost = if cfg!(debug_assertions) { 4 } else { 10 };
    bcrypt::hash(password, cost).map_err(|e| StoreError::Hash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoragePaths;
    use tempfile::TempDir;

    fn test_store() -> (FsAccountStore, TempDir) {
        let dir = TempDir::new().expect("create temp dir");
        let mut storage = FileStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().expect("initialize storage");
        (FsAccountStore::new(storage), dir)
    }

    fn new_account(email: &str) -> NewAccount {
        NewAccount {
            username: "alice".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
        }
    }

    #[test]
    fn create_account_hashes_password() {
        let (store, _dir) = test_store();

        let identity = store.create_account(new_account("alice@example.com")).unwrap();
        let stored = store
            .find_by_email("alice@example.com")
            .unwrap()
            .expect("account exists");

        assert_eq!(stored.id, identity.id);
        assert_ne!(stored.password_hash, "secret1");
        assert!(store.verify_password(&stored, "secret1").unwrap());
        assert!(!store.verify_password(&stored, "wrongpw").unwrap());
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let (store, _dir) = test_store();

        store.create_account(new_account("dup@example.com")).unwrap();
        let result = store.create_account(new_account("dup@example.com"));
        assert!(matches!(result, Err(StoreError::DuplicateEmail)));
    }

    #[test]
    fn email_lookup_is_case_insensitive() {
        let (store, _dir) = test_store();

        store
            .create_account(new_account("Mixed.Case@Example.COM"))
            .unwrap();

        let found = store.find_by_email("mixed.case@example.com").unwrap();
        assert!(found.is_some());

        let also_found = store.find_by_email("MIXED.CASE@EXAMPLE.COM").unwrap();
        assert!(also_found.is_some());
    }

    #[test]
    fn find_unknown_email_is_none() {
        let (store, _dir) = test_store();
        assert!(store.find_by_email("nobody@example.com").unwrap().is_none());
    }
}
