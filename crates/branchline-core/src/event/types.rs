use std::fmt;

use crate::event::path::EventName;

/// Built-in editor lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Editor is starting
    OnStart,
    /// A document was saved
    OnSave,
    /// Editor is shutting down
    OnShutdown,
}

impl LifecycleEvent {
    /// Every lifecycle event, in the order an editor session fires them
    pub const ALL: [LifecycleEvent; 3] = [
        LifecycleEvent::OnStart,
        LifecycleEvent::OnSave,
        LifecycleEvent::OnShutdown,
    ];

    /// Short event name as declared by plugins
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::OnStart => "onStart",
            LifecycleEvent::OnSave => "onSave",
            LifecycleEvent::OnShutdown => "onShutdown",
        }
    }

    /// Look up a lifecycle event by its short name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.name() == name)
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<LifecycleEvent> for EventName {
    fn from(event: LifecycleEvent) -> Self {
        EventName::trusted(event.name())
    }
}
