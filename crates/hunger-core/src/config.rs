// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service and storage port for hunger tools.
//!
//! Config documents are JSON blobs compiled into the binary. Nothing is read
//! from the filesystem or the environment at runtime.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::error::HungerError;
use crate::greeting::GREETING;

/// Key of the greeting document.
pub const GREETING_KEY: &str = "greeting";

const BUILTIN: &[(&str, &[u8])] = &[(GREETING_KEY, include_bytes!("../config/greeting.json"))];

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, HungerError>;
}

/// Read-only store over documents baked in at compile time.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedConfigStore {
    entries: &'static [(&'static str, &'static [u8])],
}

impl EmbeddedConfigStore {
    /// Store holding the documents shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN)
    }

    /// Store over an arbitrary static table of `(key, json)` pairs.
    pub fn from_entries(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { entries }
    }
}

impl ConfigStore for EmbeddedConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, HungerError> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, bytes)| bytes.to_vec())
            .ok_or(HungerError::NotFound)
    }
}

/// Thin service that deserializes config values and delegates storage to a `ConfigStore`.
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize a config value for `key`. Returns `Ok(None)` if missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, HungerError>
    where
        T: DeserializeOwned,
    {
        debug!(key, "loading config");
        match self.store.load_raw(key) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    return Ok(None);
                }
                let value = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Err(HungerError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Like [`ConfigService::load`], falling back to `T::default()` when missing.
    pub fn load_or_default<T>(&self, key: &str) -> Result<T, HungerError>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.load(key)?.unwrap_or_default())
    }
}

/// What the CLI prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    /// Line text, without the terminator.
    pub text: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            text: GREETING.to_owned(),
        }
    }
}
