//! Persisted preference flags
//!
//! The only thing that survives a page reload is the "qualified" flag. On the
//! web it lives in a cookie; everywhere else it is held in memory.

pub mod cookie;

use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
pub use cookie::CookieStore;

/// Name of the qualification flag
pub const QUALIFIED_KEY: &str = "qualified";
/// How long the qualification flag is kept
pub const QUALIFIED_MAX_AGE_DAYS: u32 = 365;

/// A tiny string key/value store with per-entry expiry
pub trait FlagStore {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&mut self, name: &str, value: &str, max_age_days: u32);
}

/// Read the qualification flag (anything other than "true" counts as unset)
pub fn load_qualified(store: &impl FlagStore) -> bool {
    let qualified = store.get(QUALIFIED_KEY).as_deref() == Some("true");
    if qualified {
        log::info!("Restored qualified status");
    }
    qualified
}

/// Remember that the player qualified
pub fn persist_qualified(store: &mut impl FlagStore) {
    store.set(QUALIFIED_KEY, "true", QUALIFIED_MAX_AGE_DAYS);
    log::info!("Qualified status saved");
}

/// In-memory store for native builds and tests (expiry is ignored)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str, _max_age_days: u32) {
        self.entries.insert(name.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_round_trip() {
        let mut store = MemoryStore::new();
        assert!(!load_qualified(&store));

        persist_qualified(&mut store);
        assert!(load_qualified(&store));
        assert_eq!(store.get(QUALIFIED_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_other_values_are_not_qualified() {
        let mut store = MemoryStore::new();
        store.set(QUALIFIED_KEY, "yes", 1);
        assert!(!load_qualified(&store));
        store.set(QUALIFIED_KEY, "", 1);
        assert!(!load_qualified(&store));
    }
}
