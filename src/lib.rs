// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Finadmin Server - Personal Finance Platform Administration Service
//!
//! This crate provides account registration, credential verification and
//! bearer-token issuance for the personal-finance platform admin surface.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `accounts` - Credential verification over the identity store
//! - `auth` - Bearer-token issuance and validation
//! - `storage` - File-backed account persistence

pub mod accounts;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
