//! # Branchline Event System
//!
//! Hierarchical event indexing and the data shapes delivered to handlers.
//!
//! - **[`path`]**: [`EventPath`] (dot-separated full path) and [`EventName`]
//!   (validated short name declared by plugins).
//! - **[`types`]**: built-in [`LifecycleEvent`]s.
//! - **[`context`]**: the [`Context`] mapping handlers receive.
//! - **[`handler`]**: the [`PluginEventHandler`] trait and closure adapters.
//! - **[`trie`]**: [`TrieIndex`], the prefix tree holding handler records.
//! - **[`error`]**: [`EventSystemError`](error::EventSystemError).
pub mod context;
pub mod error;
pub mod handler;
pub mod path;
pub mod trie;
pub mod types;

/// Re-export important types
pub use context::{Context, META_KEY};
pub use handler::{
    HandlerError, HandlerResult, PluginEventHandler, SharedHandler, async_handler, sync_handler,
};
pub use path::{EventName, EventPath, SEGMENT_DELIMITER};
pub use trie::{HandlerRecord, TrieIndex, TrieNode};
pub use types::LifecycleEvent;
