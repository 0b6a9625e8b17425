use dashmap::DashMap;
use std::sync::Arc;

const INITIAL_CAPACITY: usize = 1024;

/// Short code -> target URL mappings for the lifetime of the process.
///
/// DashMap keeps each shard behind its own RwLock, so an insert is published
/// to readers in one step and lookups on other shards never wait for it.
/// Handles are cheap to clone and all point at the same map.
#[derive(Clone, Debug)]
pub struct LinkStore {
    links: Arc<DashMap<String, String>>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self {
            links: Arc::new(DashMap::with_capacity(INITIAL_CAPACITY)),
        }
    }

    /// Last write wins: an existing code is silently repointed.
    pub fn put(&self, code: impl Into<String>, target_url: impl Into<String>) {
        self.links.insert(code.into(), target_url.into());
    }

    pub fn get(&self, code: &str) -> Option<String> {
        self.links
            .get(code)
            .map(|entry| entry.value().to_owned())
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for LinkStore {
    fn default() -> Self {
        Self::new()
    }
}
