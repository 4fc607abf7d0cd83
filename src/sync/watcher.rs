//! ストアを外部ソースと同期させる監視コンポーネント

use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::config::ProviderSettings;
use crate::locale::Locale;
use crate::store::{
    TranslationSet,
    TranslationStore,
};

use super::source::{
    ConfigResource,
    TranslationSource,
    WatchAction,
    WatchEvent,
};

/// Mirrors the external source into a [`TranslationStore`].
///
/// Performs one full listing, then applies watch events as they arrive.
/// Owns the only write path into the store.
#[derive(Debug)]
pub struct SourceSync<S> {
    source: S,
    store: TranslationStore,
    settings: ProviderSettings,
}

impl<S: TranslationSource> SourceSync<S> {
    #[must_use]
    pub fn new(source: S, store: TranslationStore, settings: ProviderSettings) -> Self {
        Self { source, store, settings }
    }

    /// Run the initial sync, then keep applying watch events in the
    /// background.
    ///
    /// The store reflects the full initial listing before this returns, so
    /// the provider is immediately queryable (possibly with zero locales).
    /// Source failures are logged and non-fatal: the provider keeps
    /// answering out of whatever the store holds, and the returned handle is
    /// inert.
    pub async fn start(self) -> SyncHandle {
        let Self { source, store, settings } = self;

        match source.list(&settings.language_tag_label).await {
            Ok(resources) => {
                for resource in &resources {
                    let set = translation_set_from(resource, &settings);
                    tracing::info!(
                        locale = %set.locale,
                        resource = %resource.name,
                        "loaded translations"
                    );
                    store.put(set).await;
                }
            }
            Err(error) => {
                tracing::warn!(%error, "initial listing failed, starting with zero locales");
                return SyncHandle::inert();
            }
        }

        let stream = match source.watch(&settings.language_tag_label).await {
            Ok(stream) => stream,
            Err(error) => {
                tracing::warn!(%error, "watch subscription failed, live updates disabled");
                return SyncHandle::inert();
            }
        };

        let task = tokio::spawn(async move {
            // 単一のコンシューマーなので、イベントは到着順に適用される
            let mut stream = stream;
            while let Some(event) = stream.next().await {
                apply_event(&store, &settings, event).await;
            }
            tracing::info!("watch stream closed, live updates stopped");
        });
        SyncHandle { task: Some(task) }
    }
}

async fn apply_event(store: &TranslationStore, settings: &ProviderSettings, event: WatchEvent) {
    let WatchEvent { action, resource } = event;
    let locale = locale_of(&resource, settings);

    match action {
        WatchAction::Added | WatchAction::Modified => {
            tracing::info!(%locale, resource = %resource.name, ?action, "updating translations");
            store.put(translation_set_from(&resource, settings)).await;
        }
        WatchAction::Deleted => {
            tracing::info!(%locale, resource = %resource.name, "removing translations");
            store.remove(&locale).await;
        }
    }
}

/// Derive a full-replacement translation set from a resource.
fn translation_set_from(resource: &ConfigResource, settings: &ProviderSettings) -> TranslationSet {
    TranslationSet::new(
        locale_of(resource, settings),
        resource.data.clone(),
        is_default_language(resource, settings),
    )
}

fn locale_of(resource: &ConfigResource, settings: &ProviderSettings) -> Locale {
    let tag = resource
        .labels
        .get(&settings.language_tag_label)
        .map(String::as_str)
        .filter(|tag| !tag.trim().is_empty());

    match tag {
        Some(tag) => Locale::from_tag(tag),
        None => {
            tracing::warn!(
                resource = %resource.name,
                fallback = %settings.default_language_tag,
                "resource carries no language tag label"
            );
            settings.default_language_tag.clone()
        }
    }
}

fn is_default_language(resource: &ConfigResource, settings: &ProviderSettings) -> bool {
    resource
        .labels
        .get(&settings.default_marker_label)
        .is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

/// Lifecycle handle for the watch task.
///
/// Dropping the handle leaves the task running; abort explicitly on
/// shutdown.
#[derive(Debug)]
pub struct SyncHandle {
    task: Option<JoinHandle<()>>,
}

impl SyncHandle {
    fn inert() -> Self {
        Self { task: None }
    }

    /// Whether live updates are still being applied.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop applying watch events. The store keeps its last contents.
    pub fn abort(&self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}
