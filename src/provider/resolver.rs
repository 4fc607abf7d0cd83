//! Fallback resolution from a requested locale to an available set.

use std::sync::Arc;

use crate::locale::Locale;
use crate::store::{
    StoreSnapshot,
    TranslationSet,
};

/// Pick the best available translation set for `requested`.
///
/// Precedence, first match wins:
/// 1. exact tag match
/// 2. any set sharing the base language subtag
/// 3. the set flagged as the default language
///
/// Ties in steps 2 and 3 are broken by the lexicographically smallest tag,
/// which keeps resolution deterministic for a given snapshot without any
/// ingest-order bookkeeping.
///
/// Absence is not an error: `None` means the caller should fall back to the
/// untranslated key.
#[must_use]
pub fn resolve<'a>(
    requested: &Locale,
    snapshot: &'a StoreSnapshot,
) -> Option<&'a Arc<TranslationSet>> {
    if let Some(set) = snapshot.get(requested) {
        return Some(set);
    }

    let same_language = snapshot
        .iter()
        .filter(|(locale, _)| locale.same_language(requested))
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, set)| set);
    if same_language.is_some() {
        return same_language;
    }

    default_set(snapshot)
}

fn default_set(snapshot: &StoreSnapshot) -> Option<&Arc<TranslationSet>> {
    let defaults: Vec<_> = snapshot.values().filter(|set| set.is_default).collect();
    if defaults.len() > 1 {
        tracing::debug!(
            count = defaults.len(),
            "multiple sets flagged as default language, resolving to the smallest tag"
        );
    }
    defaults.into_iter().min_by(|a, b| a.locale.cmp(&b.locale))
}
