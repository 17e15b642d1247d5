// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account repository.
//!
//! Each account is stored as a separate JSON file under `accounts/` in the
//! data directory. Email uniqueness is enforced at create time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::{FileStorage, StorageError, StorageResult};

/// Account record stored on disk.
///
/// The password credential is kept only as a bcrypt hash (the salt is
/// embedded in the hash string). It must never leave the storage layer
/// through an API response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredAccount {
    /// Unique account identifier (UUID)
    pub id: String,
    /// Display name chosen at registration
    pub username: String,
    /// Unique email address (stored lowercased)
    pub email: String,
    /// Bcrypt hash of the account password
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Repository for account operations on file storage.
pub struct AccountRepository<'a> {
    storage: &'a FileStorage,
}

impl<'a> AccountRepository<'a> {
    /// Create a new AccountRepository.
    pub fn new(storage: &'a FileStorage) -> Self {
        Self { storage }
    }

    /// Check if an account exists.
    pub fn exists(&self, account_id: &str) -> bool {
        self.storage
            .exists(self.storage.paths().account(account_id))
    }

    /// Get an account by ID.
    pub fn get(&self, account_id: &str) -> StorageResult<StoredAccount> {
        let path = self.storage.paths().account(account_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("Account {account_id}")));
        }
        self.storage.read_json(path)
    }

    /// Get an account by email.
    pub fn get_by_email(&self, email: &str) -> StorageResult<StoredAccount> {
        let account_ids = self
            .storage
            .list_files(self.storage.paths().accounts_dir(), "json")?;

        for id in account_ids {
            if let Ok(account) = self.get(&id) {
                if account.email == email {
                    return Ok(account);
                }
            }
        }

        Err(StorageError::NotFound(format!("Account with email {email}")))
    }

    /// Create a new account.
    ///
    /// Fails with `AlreadyExists` when the id or the email is taken.
    pub fn create(&self, account: &StoredAccount) -> StorageResult<()> {
        let account_id = &account.id;

        if self.exists(account_id) {
            return Err(StorageError::AlreadyExists(format!("Account {account_id}")));
        }

        if self.get_by_email(&account.email).is_ok() {
            return Err(StorageError::AlreadyExists(format!(
                "Account with email {}",
                account.email
            )));
        }

        self.storage
            .write_json(self.storage.paths().account(account_id), account)
    }

    /// Delete an account.
    pub fn delete(&self, account_id: &str) -> StorageResult<()> {
        if !self.exists(account_id) {
            return Err(StorageError::NotFound(format!("Account {account_id}")));
        }

        self.storage.delete(self.storage.paths().account(account_id))
    }

    /// List all accounts (admin view).
    pub fn list_all(&self) -> StorageResult<Vec<StoredAccount>> {
        let account_ids = self
            .storage
            .list_files(self.storage.paths().accounts_dir(), "json")?;

        let mut accounts = Vec::new();
        for id in account_ids {
            if let Ok(account) = self.get(&id) {
                accounts.push(account);
            }
        }

        Ok(accounts)
    }
}
