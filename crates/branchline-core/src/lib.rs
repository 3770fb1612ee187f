//! # Branchline Core
//!
//! Trie-indexed plugin event dispatch: plugins declare handlers for short
//! event names, the engine indexes them under `<namespace>.<event>` and
//! fans emitted events out to every handler at the exact path as
//! independent, error-isolated tokio tasks.
pub mod config;
pub mod engine;
pub mod event;
pub mod kernel;
pub mod plugin_system;

// Re-export key public types for the binary and plugin crates
pub use config::{ConfigFormat, EngineConfig};
pub use engine::{DispatchHandle, EventDispatchEngine, SharedEngine};
pub use event::{
    Context, EventName, EventPath, HandlerError, HandlerResult, LifecycleEvent, PluginEventHandler,
    SharedHandler, async_handler, sync_handler,
};
pub use kernel::error::{Error, Result};
pub use plugin_system::PluginDescriptor;

#[cfg(test)]
mod tests;
