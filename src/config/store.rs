//! Shared configuration handle.
//!
//! The gateway reads the API endpoint and timeout at request time, so the
//! config lives behind a lock and handles are cheap clones.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Cloneable handle to the current [`Config`].
///
/// Readers take a snapshot clone; [`ConfigStore::reload`] swaps the whole
/// config atomically so an in-flight request sees either the old or the
/// new settings, never a mix.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Snapshot of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Re-read the config file and swap it in.
    ///
    /// A file that fails to read, parse, or validate leaves the current
    /// config in place and returns the error.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config;
        Ok(())
    }

    /// Path the store reloads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
