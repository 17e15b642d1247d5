// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Storage Module
//!
//! Persistent storage for account records, backed by JSON files under the
//! data directory (`FINADMIN_DATA_DIR`, `/data` by default).
//!
//! ## Storage Layout
//!
//! ```text
//! /data/
//!   accounts/
//!     {account_id}.json   # Account record (email, username, password hash)
//! ```
//!
//! Password credentials are stored only as bcrypt hashes; hashing itself
//! happens in the identity store (`accounts::FsAccountStore`), not here.

pub mod files;
pub mod paths;
pub mod repository;

pub use files::{FileStorage, StorageError, StorageResult};
pub use paths::StoragePaths;
pub use repository::{AccountRepository, StoredAccount};
