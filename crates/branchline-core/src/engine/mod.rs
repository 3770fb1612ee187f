//! # Branchline Dispatch Engine
//!
//! [`EventDispatchEngine`] ties the pieces together: it registers plugin
//! descriptors into a [`TrieIndex`] under its namespace, tracks which
//! plugins are live, and fans emitted events out to every handler at the
//! exact path as independent tokio tasks.
//!
//! The engine itself takes no locks. `register`/`unregister` need
//! `&mut self`; hosts that share one engine between components (or with
//! handlers) wrap it in a [`SharedEngine`].
pub mod dispatch;
pub mod shared;

use log::{debug, info, warn};
use serde_json::Value;

use crate::config::EngineConfig;
use crate::event::context::Context;
use crate::event::error::EventSystemError;
use crate::event::path::{EventName, EventPath, SEGMENT_DELIMITER};
use crate::event::trie::{HandlerRecord, TrieIndex};
use crate::kernel::constants::DEFAULT_NAMESPACE;
use crate::kernel::error::Result;
use crate::plugin_system::descriptor::PluginDescriptor;
use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::registry::RegisteredPluginSet;

pub use dispatch::DispatchHandle;
pub use shared::SharedEngine;

/// Trie-indexed plugin event dispatcher
#[derive(Debug)]
pub struct EventDispatchEngine {
    namespace: EventPath,
    plugins: RegisteredPluginSet,
    index: TrieIndex,
    baseline: Context,
}

impl EventDispatchEngine {
    /// Create an engine with the default namespace and baseline context
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            namespace: EventPath::trusted_segment(DEFAULT_NAMESPACE),
            plugins: RegisteredPluginSet::new(),
            index: TrieIndex::new(),
            baseline: config.baseline_context(),
        }
    }

    /// Create an engine with an explicit namespace segment and baseline
    pub fn with_namespace(namespace: &str, baseline: Context) -> Result<Self> {
        Ok(Self {
            namespace: parse_namespace(namespace)?,
            plugins: RegisteredPluginSet::new(),
            index: TrieIndex::new(),
            baseline,
        })
    }

    /// Create an engine from a loaded configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::with_namespace(&config.namespace, config.baseline_context())
    }

    /// The namespace segment prefixed to every registered event
    pub fn namespace(&self) -> String {
        self.namespace.to_string()
    }

    /// Baseline context shared (by copy) with every emission
    pub fn baseline(&self) -> &Context {
        &self.baseline
    }

    /// Mutable baseline, for host-side updates between emissions
    pub fn baseline_mut(&mut self) -> &mut Context {
        &mut self.baseline
    }

    /// Read access to the underlying index
    pub fn index(&self) -> &TrieIndex {
        &self.index
    }

    /// Full path a short event name is registered under
    pub fn event_path(&self, event: &EventName) -> EventPath {
        self.namespace.child(event)
    }

    /// Register every handler a plugin declares.
    ///
    /// Registering a live name is a logged no-op. Declared events without a
    /// handler are skipped with a warning.
    pub fn register(&mut self, descriptor: &PluginDescriptor) {
        let plugin_id = descriptor.name();
        if self.plugins.contains(plugin_id) {
            warn!(
                "{}",
                PluginSystemError::RegistrationConflict {
                    plugin_id: plugin_id.to_string(),
                }
            );
            return;
        }

        for (event, handler) in descriptor.events() {
            let Some(handler) = handler else {
                warn!(
                    "{}",
                    PluginSystemError::MissingHandler {
                        plugin_id: plugin_id.to_string(),
                        event_name: event.to_string(),
                    }
                );
                continue;
            };

            let path = self.event_path(event);
            debug!("Registering handler for plugin {} at {}", plugin_id, path);
            self.index
                .resolve_or_create(&path)
                .push_handler(HandlerRecord::new(plugin_id, handler.clone()));
        }

        self.plugins.insert(plugin_id);
        info!("Registered plugin: {}", plugin_id);
    }

    /// Remove every handler owned by `plugin_id` and mark it unregistered.
    ///
    /// Returns `false` (and logs) when the plugin is not live. Invocations
    /// already scheduled by an earlier `emit` still run.
    pub fn unregister(&mut self, plugin_id: &str) -> bool {
        if !self.plugins.contains(plugin_id) {
            warn!(
                "{}",
                PluginSystemError::UnknownUnregister {
                    plugin_id: plugin_id.to_string(),
                }
            );
            return false;
        }

        let removed = self.index.remove_by_owner(plugin_id);
        info!("Removed {} handlers for plugin: {}", removed, plugin_id);

        self.plugins.remove(plugin_id);
        info!("Unregistered plugin: {}", plugin_id);
        true
    }

    /// Fan `payload` out to every handler registered exactly at `full_path`.
    ///
    /// Each handler runs as its own spawned task with a fresh copy of the
    /// baseline merged with `{ "meta": payload }`. Returns immediately;
    /// handler failures are logged, never returned. A malformed path
    /// schedules nothing.
    pub fn emit(&self, full_path: &str, payload: Value) -> DispatchHandle {
        match EventPath::parse(full_path) {
            Ok(path) => self.emit_path(&path, payload),
            Err(err) => {
                warn!("{}", err);
                DispatchHandle::empty(full_path)
            }
        }
    }

    /// [`emit`](Self::emit) for a short event name under this namespace
    pub fn emit_event(&self, event: &EventName, payload: Value) -> DispatchHandle {
        self.emit_path(&self.event_path(event), payload)
    }

    fn emit_path(&self, path: &EventPath, payload: Value) -> DispatchHandle {
        let context = self.baseline.with_meta(payload);
        let records = self.index.handlers_at(path);
        let event_path = path.to_string();
        debug!("Emitting event: {} to {} handlers", event_path, records.len());
        dispatch::schedule(&event_path, records, &context)
    }

    /// Check if a plugin is currently registered
    pub fn is_registered(&self, plugin_id: &str) -> bool {
        self.plugins.contains(plugin_id)
    }

    /// Names of live plugins, sorted
    pub fn registered_plugins(&self) -> Vec<String> {
        self.plugins.names()
    }

    /// Number of handlers registered exactly at `full_path`
    pub fn handler_count_for(&self, full_path: &str) -> usize {
        EventPath::parse(full_path)
            .map(|path| self.index.handlers_at(&path).len())
            .unwrap_or(0)
    }
}

impl Default for EventDispatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_namespace(namespace: &str) -> std::result::Result<EventPath, EventSystemError> {
    if namespace.contains(SEGMENT_DELIMITER) {
        return Err(EventSystemError::InvalidNamespace {
            namespace: namespace.to_string(),
            reason: "namespace must be a single segment".to_string(),
        });
    }
    EventPath::parse(namespace).map_err(|_| EventSystemError::InvalidNamespace {
        namespace: namespace.to_string(),
        reason: "namespace must not be empty".to_string(),
    })
}
