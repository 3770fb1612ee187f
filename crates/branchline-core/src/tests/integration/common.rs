#![cfg(test)]

use std::sync::{Arc, Mutex};

use crate::event::context::Context;
use crate::event::handler::{SharedHandler, sync_handler};

/// One handler invocation as observed by a test
#[derive(Debug, Clone)]
pub struct Invocation {
    pub plugin: String,
    pub event: String,
    pub context: Context,
}

/// Shared log of handler invocations across plugins
#[derive(Debug, Clone, Default)]
pub struct InvocationLog {
    entries: Arc<Mutex<Vec<Invocation>>>,
}

impl InvocationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that appends to this log under `plugin`/`event`
    pub fn handler(&self, plugin: &str, event: &str) -> SharedHandler {
        let entries = Arc::clone(&self.entries);
        let plugin = plugin.to_string();
        let event = event.to_string();
        sync_handler(move |context| {
            entries.lock().unwrap().push(Invocation {
                plugin: plugin.clone(),
                event: event.clone(),
                context,
            });
            Ok(())
        })
    }

    pub fn entries(&self) -> Vec<Invocation> {
        self.entries.lock().unwrap().clone()
    }

    /// Plugins that saw `event`, sorted (completion order is unspecified)
    pub fn plugins_for(&self, event: &str) -> Vec<String> {
        let mut plugins: Vec<String> = self
            .entries()
            .into_iter()
            .filter(|entry| entry.event == event)
            .map(|entry| entry.plugin)
            .collect();
        plugins.sort();
        plugins
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
