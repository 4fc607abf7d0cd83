//! The public translation facade.

use crate::format::{
    self,
    FormatArg,
};
use crate::locale::Locale;
use crate::store::TranslationStore;

use super::key::normalize_message_key;
use super::resolver;

/// Answers `translate` and locale listing out of the shared store.
///
/// Cheap to clone (clones share the store); hand one to every render path.
#[derive(Debug, Clone)]
pub struct TranslationProvider {
    store: TranslationStore,
}

impl TranslationProvider {
    #[must_use]
    pub fn new(store: TranslationStore) -> Self {
        Self { store }
    }

    /// The locales currently available, in no particular order.
    pub async fn available_locales(&self) -> Vec<Locale> {
        self.store.locales().await
    }

    /// Translate `key` for `locale`, substituting `args` into the template.
    ///
    /// Resolution falls back along exact tag → same base language → default
    /// language. Every failure mode (no resolvable locale, unknown key,
    /// malformed template, argument mismatch) degrades to returning `key`
    /// unchanged; this never errors into the render path.
    pub async fn translate(&self, key: &str, locale: &Locale, args: &[FormatArg]) -> String {
        let snapshot = self.store.snapshot().await;
        let Some(set) = resolver::resolve(locale, &snapshot) else {
            return key.to_string();
        };

        let normalized = normalize_message_key(key);
        let Some(template) = set.entries.get(&normalized) else {
            return key.to_string();
        };

        // Formatting renders under the resolved locale: a `de` template
        // answering a `de-DE` request uses German separators.
        match format::format_message(template, &set.locale, args) {
            Ok(formatted) => formatted,
            Err(error) => {
                tracing::warn!(%error, key, locale = %set.locale, "failed to format translation");
                key.to_string()
            }
        }
    }
}
