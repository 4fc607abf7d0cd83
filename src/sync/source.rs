//! The boundary to the external configuration source.

use std::collections::HashMap;
use std::future::Future;

use futures::stream::BoxStream;
use thiserror::Error;

/// A labeled key-value resource of the external source (a ConfigMap-shaped
/// object).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigResource {
    pub name: String,
    pub labels: HashMap<String, String>,
    /// Normalized message key → translation template.
    pub data: HashMap<String, String>,
}

/// What happened to a watched resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchAction {
    Added,
    Modified,
    Deleted,
}

/// One notification from the watch stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEvent {
    pub action: WatchAction,
    pub resource: ConfigResource,
}

impl WatchEvent {
    #[must_use]
    pub fn new(action: WatchAction, resource: ConfigResource) -> Self {
        Self { action, resource }
    }
}

/// Stream of watch notifications. The source delivers events for a single
/// resource in causal order; no ordering is promised across resources.
pub type EventStream = BoxStream<'static, WatchEvent>;

/// Errors from the external source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to list translation resources: {0}")]
    List(String),

    #[error("failed to establish watch: {0}")]
    Watch(String),
}

/// The subscribe/notify seam to the external configuration source.
///
/// Implementations select resources carrying the given label key. The
/// production implementation wraps the orchestration-API client; tests use
/// an in-memory fake.
pub trait TranslationSource: Send + Sync + 'static {
    /// List all currently matching resources.
    fn list(
        &self,
        label: &str,
    ) -> impl Future<Output = Result<Vec<ConfigResource>, SourceError>> + Send;

    /// Subscribe to changes of matching resources.
    ///
    /// Stream end means the subscription closed, normally or not;
    /// re-subscription with backoff is the caller's concern, not this
    /// crate's.
    fn watch(&self, label: &str) -> impl Future<Output = Result<EventStream, SourceError>> + Send;
}
