// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup into an
//! immutable [`Settings`] value.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `FINADMIN_DATA_DIR` | Root directory for account storage | `/data` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `FINADMIN_TOKEN_KEY` | Base64-encoded symmetric token-signing secret | Required |
//! | `FINADMIN_CORS_ORIGIN` | Allowed CORS origin | Permissive |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable name for the account storage directory.
pub const DATA_DIR_ENV: &str = "FINADMIN_DATA_DIR";

/// Environment variable name for the token-signing secret.
///
/// The value is the single source of key material for both token
/// issuance and token validation.
pub const TOKEN_KEY_ENV: &str = "FINADMIN_TOKEN_KEY";

/// Environment variable name for the allowed CORS origin.
pub const CORS_ORIGIN_ENV: &str = "FINADMIN_CORS_ORIGIN";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Configuration error.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("FINADMIN_TOKEN_KEY must be set to a base64-encoded secret")]
    MissingTokenKey,
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Immutable runtime settings, loaded once at process start.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root directory for account storage
    pub data_dir: PathBuf,
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Base64-encoded token-signing secret
    pub token_key: String,
    /// Allowed CORS origin; permissive when unset
    pub cors_origin: Option<String>,
    /// Emit JSON-formatted logs
    pub log_json: bool,
}

impl Settings {
    /// Load settings from the environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        let token_key = env::var(TOKEN_KEY_ENV).map_err(|_| SettingsError::MissingTokenKey)?;
        if token_key.trim().is_empty() {
            return Err(SettingsError::MissingTokenKey);
        }

        let port_raw = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let port: u16 = port_raw
            .parse()
            .map_err(|_| SettingsError::InvalidPort(port_raw))?;

        Ok(Self {
            data_dir: env::var(DATA_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/data")),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            token_key,
            cors_origin: env::var(CORS_ORIGIN_ENV).ok(),
            log_json: env::var(LOG_FORMAT_ENV)
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }

    /// The address to bind, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
