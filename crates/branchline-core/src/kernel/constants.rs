/// Application name
pub const APP_NAME: &str = "Branchline";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Namespace segment used when no configuration overrides it
pub const DEFAULT_NAMESPACE: &str = "user";

/// Baseline context key naming the host editor
pub const EDITOR_NAME_KEY: &str = "editorName";

/// Editor name placed in the default baseline context
pub const DEFAULT_EDITOR_NAME: &str = "MyCodeEditor";
