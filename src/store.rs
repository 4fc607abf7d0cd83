//! Concurrent locale → translation-set store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::locale::Locale;

/// The full set of translations for one locale.
///
/// Replaced wholesale on every update event: the external source delivers
/// full snapshots, never diffs, so entry maps must not be merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSet {
    pub locale: Locale,
    /// Normalized message key → template string.
    pub entries: HashMap<String, String>,
    /// Marks the process-wide default language.
    pub is_default: bool,
}

impl TranslationSet {
    #[must_use]
    pub fn new(locale: Locale, entries: HashMap<String, String>, is_default: bool) -> Self {
        Self { locale, entries, is_default }
    }
}

/// A point-in-time view of the store, sufficient for resolution and listing.
///
/// Values are shared `Arc`s, so taking a snapshot clones no entry maps.
pub type StoreSnapshot = HashMap<Locale, Arc<TranslationSet>>;

/// Concurrent mapping from locale to its translation set.
///
/// The only shared mutable state in the crate: written by the sync task,
/// read by `translate` / `available_locales`. Cloning shares the underlying
/// map. Writers swap whole `Arc<TranslationSet>` values under the write
/// lock, so a reader observes either the previous or the new set for a
/// locale, never a partially updated entry map.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    sets: Arc<RwLock<HashMap<Locale, Arc<TranslationSet>>>>,
}

impl TranslationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the set under its own locale, replacing any previous entry map.
    pub async fn put(&self, set: TranslationSet) {
        let locale = set.locale.clone();
        self.sets.write().await.insert(locale, Arc::new(set));
    }

    /// Remove the set for `locale`; no-op when absent.
    pub async fn remove(&self, locale: &Locale) {
        self.sets.write().await.remove(locale);
    }

    /// A consistent snapshot of the current store contents.
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.sets.read().await.clone()
    }

    /// The locales currently present, in no particular order.
    pub async fn locales(&self) -> Vec<Locale> {
        self.sets.read().await.keys().cloned().collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    fn set(locale: &str, entries: &[(&str, &str)]) -> TranslationSet {
        TranslationSet::new(
            Locale::from_tag(locale),
            entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect(),
            false,
        )
    }

    #[googletest::test]
    #[tokio::test]
    async fn put_then_snapshot_shows_the_set() {
        let store = TranslationStore::new();

        store.put(set("en", &[("greeting", "Hello")])).await;

        let snapshot = store.snapshot().await;
        let stored = snapshot.get(&Locale::from_tag("en")).unwrap();
        assert_that!(stored.entries.get("greeting"), some(eq(&"Hello".to_string())));
    }

    #[googletest::test]
    #[tokio::test]
    async fn remove_then_snapshot_no_longer_shows_it() {
        let store = TranslationStore::new();
        store.put(set("en", &[("greeting", "Hello")])).await;

        store.remove(&Locale::from_tag("en")).await;

        expect_that!(store.snapshot().await.is_empty(), eq(true));
    }

    #[googletest::test]
    #[tokio::test]
    async fn remove_of_absent_locale_is_a_noop() {
        let store = TranslationStore::new();
        store.put(set("en", &[])).await;

        store.remove(&Locale::from_tag("de")).await;

        assert_that!(store.locales().await, elements_are![eq(&Locale::from_tag("en"))]);
    }

    #[googletest::test]
    #[tokio::test]
    async fn second_put_replaces_the_entry_map_without_merging() {
        let store = TranslationStore::new();
        store.put(set("en", &[("old.key", "old"), ("shared", "first")])).await;

        store.put(set("en", &[("shared", "second"), ("new.key", "new")])).await;

        let snapshot = store.snapshot().await;
        let stored = snapshot.get(&Locale::from_tag("en")).unwrap();
        expect_that!(stored.entries.len(), eq(2));
        expect_that!(stored.entries.get("old.key"), none());
        expect_that!(stored.entries.get("shared"), some(eq(&"second".to_string())));
        expect_that!(stored.entries.get("new.key"), some(eq(&"new".to_string())));
    }

    #[googletest::test]
    #[tokio::test]
    async fn snapshot_is_unaffected_by_later_writes() {
        let store = TranslationStore::new();
        store.put(set("en", &[("greeting", "Hello")])).await;

        let snapshot = store.snapshot().await;
        store.remove(&Locale::from_tag("en")).await;

        assert_that!(snapshot.len(), eq(1));
    }

    #[googletest::test]
    #[tokio::test]
    async fn clone_shares_the_underlying_map() {
        let store = TranslationStore::new();
        let clone = store.clone();

        store.put(set("de", &[])).await;

        assert_that!(clone.locales().await, elements_are![eq(&Locale::from_tag("de"))]);
    }
}
