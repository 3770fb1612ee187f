use branchline_core::event::{Context, HandlerResult};
use branchline_core::kernel::constants::EDITOR_NAME_KEY;
use branchline_core::{LifecycleEvent, PluginDescriptor, sync_handler};
use log::info;
use serde::Deserialize;
use serde_json::Value;

/// Name `SamplePlugin` registers under
pub const SAMPLE_PLUGIN_NAME: &str = "SamplePlugin";

/// Name of the plugin that declares no events
pub const LOG_PLUGIN_NAME: &str = "LogPlugin";

/// Payload `SamplePlugin` accepts with `onStart`. Every field is optional;
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplePluginMeta {
    pub disable_logging: Option<bool>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SamplePluginError {
    #[error("Invalid meta data for SamplePlugin: {0}")]
    InvalidMeta(String),
}

/// Parse the `meta` of an emission as [`SamplePluginMeta`]. The meta must
/// be an object whose known fields have the right types.
pub fn validate_meta(meta: Option<&Value>) -> Result<SamplePluginMeta, SamplePluginError> {
    let meta = match meta {
        Some(meta @ Value::Object(_)) => meta,
        Some(other) => {
            return Err(SamplePluginError::InvalidMeta(format!(
                "expected an object, got {}",
                other
            )));
        }
        None => return Err(SamplePluginError::InvalidMeta("meta is missing".to_string())),
    };
    SamplePluginMeta::deserialize(meta).map_err(|e| SamplePluginError::InvalidMeta(e.to_string()))
}

fn on_start(context: Context) -> HandlerResult {
    let meta = validate_meta(context.meta())?;
    let editor = context.get_str(EDITOR_NAME_KEY).unwrap_or("unknown editor");
    if meta.disable_logging != Some(true) {
        info!(
            "Starting up! {} | meta: {}",
            editor,
            context.meta().map(Value::to_string).unwrap_or_default()
        );
    }
    Ok(())
}

fn on_save(context: Context) -> HandlerResult {
    info!("Document saved. | meta: {}", Value::from(context));
    Ok(())
}

fn on_shutdown(context: Context) -> HandlerResult {
    info!("Shutting down. | meta: {}", Value::from(context));
    Ok(())
}

/// Example plugin reacting to every editor lifecycle event
#[derive(Debug, Default)]
pub struct SamplePlugin;

impl SamplePlugin {
    pub fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor::new(SAMPLE_PLUGIN_NAME)
            .on(LifecycleEvent::OnStart, sync_handler(on_start))
            .on(LifecycleEvent::OnSave, sync_handler(on_save))
            .on(LifecycleEvent::OnShutdown, sync_handler(on_shutdown))
    }
}

/// Example plugin that declares no events at all
#[derive(Debug, Default)]
pub struct LogPlugin;

impl LogPlugin {
    pub fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor::new(LOG_PLUGIN_NAME)
    }
}

#[cfg(test)]
mod tests;
