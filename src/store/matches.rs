use super::{KvStore, COMPLETED_MATCHES_KEY, LIVE_MATCHES_KEY};
use crate::error::{CricketError, Result};
use crate::types::matches::Match;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

fn decode(key: &str, value: Option<Value>) -> Result<Vec<Match>> {
    match value {
        Some(value) => serde_json::from_value(value)
            .map_err(|error| CricketError::StoreCorrupt(format!("{key}: {error}"))),
        None => Ok(Vec::new()),
    }
}

fn load_list<S: KvStore + ?Sized>(store: &S, key: &str) -> Result<Vec<Match>> {
    decode(key, store.get(key)?)
}

/// Replaces the entry with the same id, or appends when the id is new.
fn upsert<S: KvStore + ?Sized>(store: &mut S, key: &str, match_to_save: Match) -> Result<()> {
    store.update(key, |current| {
        let mut matches = decode(key, current)?;
        match matches.iter_mut().find(|m| m.id == match_to_save.id) {
            Some(existing) => {
                debug!(key, id = %match_to_save.id, "replacing stored match");
                *existing = match_to_save;
            }
            None => {
                debug!(key, id = %match_to_save.id, "appending stored match");
                matches.push(match_to_save);
            }
        }
        Ok(Some(serde_json::to_value(&matches)?))
    })
}

pub fn live_matches<S: KvStore + ?Sized>(store: &S) -> Result<Vec<Match>> {
    load_list(store, LIVE_MATCHES_KEY)
}

pub fn save_live_match<S: KvStore + ?Sized>(store: &mut S, match_to_save: Match) -> Result<()> {
    upsert(store, LIVE_MATCHES_KEY, match_to_save)
}

/// Returns whether a live match with `id` was removed. The store is left
/// untouched when there was nothing to remove.
pub fn remove_live_match<S: KvStore + ?Sized>(store: &mut S, id: &str) -> Result<bool> {
    let mut removed = false;
    store.update(LIVE_MATCHES_KEY, |current| {
        let matches = decode(LIVE_MATCHES_KEY, current)?;
        let before = matches.len();
        let remaining: Vec<_> = matches.into_iter().filter(|m| m.id != id).collect();
        if remaining.len() == before {
            return Ok(None);
        }
        removed = true;
        Ok(Some(serde_json::to_value(&remaining)?))
    })?;
    if removed {
        info!(id, "removed live match");
    }
    Ok(removed)
}

pub fn find_live_match<S: KvStore + ?Sized>(store: &S, id: &str) -> Result<Option<Match>> {
    Ok(live_matches(store)?.into_iter().find(|m| m.id == id))
}

pub fn completed_matches<S: KvStore + ?Sized>(store: &S) -> Result<Vec<Match>> {
    load_list(store, COMPLETED_MATCHES_KEY)
}

/// Stores a finished match, stamping the completion time on first save.
pub fn save_completed_match<S: KvStore + ?Sized>(
    store: &mut S,
    mut match_to_save: Match,
) -> Result<()> {
    if match_to_save.completed_at.is_none() {
        match_to_save.completed_at = Some(Utc::now());
    }
    upsert(store, COMPLETED_MATCHES_KEY, match_to_save)
}

pub fn find_completed_match<S: KvStore + ?Sized>(store: &S, id: &str) -> Result<Option<Match>> {
    Ok(completed_matches(store)?.into_iter().find(|m| m.id == id))
}
