//! # Branchline Plugin System
//!
//! The host-facing plugin shapes the engine indexes:
//!
//! - **[`descriptor`]**: [`PluginDescriptor`], a plugin name plus its
//!   declared events and optional handlers.
//! - **[`registry`]**: [`RegisteredPluginSet`], the set of live plugin names.
//! - **[`error`]**: [`PluginSystemError`], the non-fatal registration
//!   rejections.
pub mod descriptor;
pub mod error;
pub mod registry;

pub use descriptor::PluginDescriptor;
pub use error::PluginSystemError;
pub use registry::RegisteredPluginSet;
