//! Persistence for match lists.
//!
//! Each list lives under a fixed key in a [`KvStore`]. Changes go through
//! [`KvStore::update`], so a list is read and rewritten as one step.

pub mod bootstrap;
pub mod file;
pub mod matches;

use crate::config::resolve_path;
use crate::error::Result;
use crate::types::config::CrichitConfig;
use file::FileStore;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

pub const LIVE_MATCHES_KEY: &str = "crichit_live_matches";
pub const COMPLETED_MATCHES_KEY: &str = "crichit_completed_matches";

pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Hands the current value of `key` to `apply` and stores what it
    /// returns. `None` leaves the store untouched.
    fn update<F>(&mut self, key: &str, apply: F) -> Result<()>
    where
        F: FnOnce(Option<Value>) -> Result<Option<Value>>,
    {
        let current = self.get(key)?;
        match apply(current)? {
            Some(value) => self.set(key, value),
            None => Ok(()),
        }
    }
}

/// Something that can report whether it is ready to be used.
pub trait Readiness {
    fn is_ready(&self) -> bool;
}

/// Opens the store configured for `root`, waiting until it is ready.
pub fn connect(root: &Path, config: Option<&CrichitConfig>) -> Result<FileStore> {
    let settings = config.map(CrichitConfig::store_settings).unwrap_or_default();
    let path = resolve_path(root, &settings.path);
    debug!(path = %path.display(), "connecting to store");

    let store = FileStore::new(path);
    bootstrap::wait_until_ready(&store, settings.ready_timeout, settings.poll_interval)
        .map_err(|unavailable| store.unavailable(unavailable.waited))?;
    Ok(store)
}
