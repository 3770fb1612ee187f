use std::fmt;

use crate::event::handler::SharedHandler;
use crate::event::path::EventName;

/// A plugin as presented to the engine: a unique name plus the events it
/// declares, each with an optional handler.
///
/// Events behave like a map keyed by name: declaring the same event twice
/// replaces the earlier handler while keeping its position.
#[derive(Clone)]
pub struct PluginDescriptor {
    name: String,
    events: Vec<(EventName, Option<SharedHandler>)>,
}

impl PluginDescriptor {
    /// Create a descriptor with no events
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }

    /// Declare `event` with a handler
    pub fn on(self, event: impl Into<EventName>, handler: SharedHandler) -> Self {
        self.declare(event, Some(handler))
    }

    /// Declare `event` with an optional handler. Entries without a handler
    /// are skipped (with a warning) at registration time.
    pub fn declare(mut self, event: impl Into<EventName>, handler: Option<SharedHandler>) -> Self {
        let event = event.into();
        match self.events.iter_mut().find(|(name, _)| *name == event) {
            Some(entry) => entry.1 = handler,
            None => self.events.push((event, handler)),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared events in declaration order
    pub fn events(&self) -> impl Iterator<Item = (&EventName, Option<&SharedHandler>)> {
        self.events.iter().map(|(name, handler)| (name, handler.as_ref()))
    }

    /// Number of declared events, with or without a handler
    pub fn declared_count(&self) -> usize {
        self.events.len()
    }

    /// Number of declared events that carry a handler
    pub fn handler_count(&self) -> usize {
        self.events.iter().filter(|(_, handler)| handler.is_some()).count()
    }
}

impl fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events: Vec<(&str, bool)> = self
            .events
            .iter()
            .map(|(name, handler)| (name.as_str(), handler.is_some()))
            .collect();
        f.debug_struct("PluginDescriptor")
            .field("name", &self.name)
            .field("events", &events)
            .finish()
    }
}
