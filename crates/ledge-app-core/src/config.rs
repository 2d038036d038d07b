// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON config blobs behind a storage port.
//!
//! [`ConfigStore`] moves raw bytes by key; [`ConfigService`] layers
//! `serde_json` on top. A missing key and an empty blob both read as "no
//! value", so a fresh install and a truncated file behave the same.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Byte storage addressed by a logical key such as `"prefs"`.
pub trait ConfigStore {
    /// Reads the blob stored under `key`; [`ConfigError::NotFound`] when absent.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replaces the blob stored under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failures surfaced by [`ConfigStore`] and [`ConfigService`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing stored under the key.
    #[error("no config stored under that key")]
    NotFound,
    /// The key cannot be mapped onto the store (empty, path separators, dots).
    #[error("invalid config key {0:?}")]
    InvalidKey(String),
    /// The platform reported no per-user config directory.
    #[error("no per-user config directory on this platform")]
    NoConfigDir,
    /// Underlying storage failed.
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    /// Stored bytes are not valid JSON for the requested type.
    #[error("malformed config: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Typed access to a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the service.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Decodes the value under `key`; `Ok(None)` when nothing usable is stored.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let bytes = match self.store.load_raw(key) {
            Err(ConfigError::NotFound) => return Ok(None),
            other => other?,
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Encodes `value` as pretty JSON and stores it under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let json = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &json)
    }
}
