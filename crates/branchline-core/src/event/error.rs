//! # Branchline Event System Errors
//!
//! Defines [`EventSystemError`], covering malformed event paths and names
//! as well as failures raised by handlers during deferred dispatch. Handler
//! failures never leave the dispatch boundary; they are formatted through
//! this type and written to the log.
use crate::event::handler::HandlerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventSystemError {
    #[error("Invalid event path '{path}': {reason}")]
    InvalidEventPath {
        path: String,
        reason: String,
    },

    #[error("Invalid event name '{name}': {reason}")]
    InvalidEventName {
        name: String,
        reason: String,
    },

    #[error("Invalid namespace '{namespace}': {reason}")]
    InvalidNamespace {
        namespace: String,
        reason: String,
    },

    #[error("Error in plugin handler of '{plugin_id}' for event {event_path}: {source}")]
    HandlerFailed {
        event_path: String,
        plugin_id: String,
        #[source]
        source: HandlerError,
    },

    #[error("Plugin handler of '{plugin_id}' panicked for event {event_path}: {message}")]
    HandlerPanicked {
        event_path: String,
        plugin_id: String,
        message: String,
    },

    #[error("No async runtime available to dispatch {handler_count} handler(s) for event {event_path}")]
    NoRuntime {
        event_path: String,
        handler_count: usize,
    },
}
