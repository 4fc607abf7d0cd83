//! テスト用ユーティリティ
//!
//! 複数のテストモジュールで使用される共通のフィクスチャを提供します。
#![cfg(test)]
#![allow(clippy::expect_used)]

use std::collections::HashMap;

use tokio::sync::{
    Mutex,
    mpsc,
};

use crate::config::ProviderSettings;
use crate::sync::{
    ConfigResource,
    EventStream,
    SourceError,
    TranslationSource,
    WatchEvent,
};

/// Build a resource labeled the way the default [`ProviderSettings`] expect.
///
/// An empty `tag` produces a resource without a language tag label.
pub(crate) fn resource(
    name: &str,
    tag: &str,
    is_default: bool,
    entries: &[(&str, &str)],
) -> ConfigResource {
    let settings = ProviderSettings::default();
    let mut labels = HashMap::new();
    if !tag.is_empty() {
        labels.insert(settings.language_tag_label.clone(), tag.to_string());
    }
    if is_default {
        labels.insert(settings.default_marker_label.clone(), "true".to_string());
    }
    ConfigResource {
        name: name.to_string(),
        labels,
        data: entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect(),
    }
}

/// In-memory [`TranslationSource`]: a fixed listing plus a channel-fed watch
/// stream, with switchable list/watch failure.
pub(crate) struct FakeSource {
    resources: Vec<ConfigResource>,
    fail_list: bool,
    fail_watch: bool,
    events_tx: mpsc::UnboundedSender<WatchEvent>,
    events_rx: Mutex<Option<mpsc::UnboundedReceiver<WatchEvent>>>,
}

impl FakeSource {
    pub(crate) fn with_resources(resources: Vec<ConfigResource>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            resources,
            fail_list: false,
            fail_watch: false,
            events_tx,
            events_rx: Mutex::new(Some(events_rx)),
        }
    }

    pub(crate) fn failing_list() -> Self {
        let mut source = Self::with_resources(Vec::new());
        source.fail_list = true;
        source
    }

    pub(crate) fn without_watch(mut self) -> Self {
        self.fail_watch = true;
        self
    }

    /// Sender feeding the watch stream. Dropping every sender closes the
    /// stream.
    pub(crate) fn event_sender(&self) -> mpsc::UnboundedSender<WatchEvent> {
        self.events_tx.clone()
    }
}

impl TranslationSource for FakeSource {
    async fn list(&self, _label: &str) -> Result<Vec<ConfigResource>, SourceError> {
        if self.fail_list {
            return Err(SourceError::List("connection refused".to_string()));
        }
        Ok(self.resources.clone())
    }

    async fn watch(&self, _label: &str) -> Result<EventStream, SourceError> {
        if self.fail_watch {
            return Err(SourceError::Watch("connection reset".to_string()));
        }
        let receiver = self.events_rx.lock().await.take().expect("watch may only be called once");
        Ok(Box::pin(futures::stream::unfold(receiver, |mut receiver| async move {
            receiver.recv().await.map(|event| (event, receiver))
        })))
    }
}
