use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex; // Use tokio's Mutex

use crate::engine::{DispatchHandle, EventDispatchEngine};
use crate::event::path::EventName;
use crate::plugin_system::descriptor::PluginDescriptor;

/// Cloneable handle to one engine, for hosts and handlers that need to
/// reach it from several places.
///
/// The lock is held only for the synchronous part of each call. `emit`
/// releases it before any handler runs, so a handler may lock the engine
/// again, for instance to unregister its own plugin.
#[derive(Clone)]
pub struct SharedEngine {
    engine: Arc<Mutex<EventDispatchEngine>>,
}

// Manual Debug impl for SharedEngine
impl fmt::Debug for SharedEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedEngine").finish_non_exhaustive()
    }
}

impl SharedEngine {
    /// Wrap a default engine
    pub fn new() -> Self {
        Self::from_engine(EventDispatchEngine::new())
    }

    pub fn from_engine(engine: EventDispatchEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// The underlying Arc, for callers that need several operations under
    /// one lock
    pub fn clone_engine(&self) -> Arc<Mutex<EventDispatchEngine>> {
        self.engine.clone()
    }

    pub async fn register(&self, descriptor: &PluginDescriptor) {
        let mut engine = self.engine.lock().await;
        engine.register(descriptor);
    }

    pub async fn unregister(&self, plugin_id: &str) -> bool {
        let mut engine = self.engine.lock().await;
        engine.unregister(plugin_id)
    }

    pub async fn emit(&self, full_path: &str, payload: Value) -> DispatchHandle {
        let engine = self.engine.lock().await;
        engine.emit(full_path, payload)
    }

    pub async fn emit_event(&self, event: &EventName, payload: Value) -> DispatchHandle {
        let engine = self.engine.lock().await;
        engine.emit_event(event, payload)
    }

    pub async fn is_registered(&self, plugin_id: &str) -> bool {
        self.engine.lock().await.is_registered(plugin_id)
    }

    pub async fn registered_plugins(&self) -> Vec<String> {
        self.engine.lock().await.registered_plugins()
    }

    pub async fn handler_count_for(&self, full_path: &str) -> usize {
        self.engine.lock().await.handler_count_for(full_path)
    }
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl From<EventDispatchEngine> for SharedEngine {
    fn from(engine: EventDispatchEngine) -> Self {
        Self::from_engine(engine)
    }
}
