//! Synchronization with the external configuration source.

mod source;
mod watcher;

pub use source::{
    ConfigResource,
    EventStream,
    SourceError,
    TranslationSource,
    WatchAction,
    WatchEvent,
};
pub use watcher::{
    SourceSync,
    SyncHandle,
};
