//! # Branchline Plugin System Errors
//!
//! Defines [`PluginSystemError`], the non-fatal rejections raised while
//! registering and unregistering plugins. The engine absorbs all of them:
//! they are formatted into warnings, and the only caller-visible signal is
//! the boolean returned by `unregister`.
#[derive(Debug, thiserror::Error)]
pub enum PluginSystemError {
    #[error("Plugin {plugin_id} already registered")]
    RegistrationConflict {
        plugin_id: String,
    },

    #[error("Plugin {plugin_id} is not registered")]
    UnknownUnregister {
        plugin_id: String,
    },

    #[error("{plugin_id} event handler for '{event_name}' cannot be empty. Skipping...")]
    MissingHandler {
        plugin_id: String,
        event_name: String,
    },
}
