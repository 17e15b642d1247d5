// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::accounts::{AccountService, FsAccountStore};
use crate::auth::TokenIssuer;
use crate::storage::FileStorage;

/// Shared application state.
///
/// Cheap to clone; handlers hold no mutable state of their own.
#[derive(Clone)]
pub struct AppState {
    /// File storage handle, used directly by admin handlers
    pub storage: FileStorage,
    /// Credential verifier over the file-backed identity store
    pub accounts: AccountService,
    /// Bearer-token issuer/verifier
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(storage: FileStorage, tokens: TokenIssuer) -> Self {
        let accounts = AccountService::new(Arc::new(FsAccountStore::new(storage.clone())));
        Self {
            storage,
            accounts,
            tokens: Arc::new(tokens),
        }
    }
}
