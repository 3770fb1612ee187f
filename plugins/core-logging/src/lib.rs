use branchline_core::event::Context;
use branchline_core::kernel::error::{Error as KernelError, Result as KernelResult};
use branchline_core::{LifecycleEvent, PluginDescriptor, SharedHandler, sync_handler};

use log::info;

/// Plugin name the logger registers under
pub const PLUGIN_NAME: &str = "core-logging";

/// Install the `env_logger` backend for the `log` facade.
///
/// Verbosity follows `RUST_LOG`; without it only warnings and errors are
/// shown. Fails if a logger was already installed.
pub fn init_logging() -> KernelResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .map_err(|e| KernelError::Other(format!("Failed to initialize env_logger: {}", e)))?;
    info!("Initialized {} v{}", PLUGIN_NAME, env!("CARGO_PKG_VERSION"));
    Ok(())
}

/// Render a context the way the logger writes it
pub fn describe(context: &Context) -> String {
    serde_json::to_string(context).unwrap_or_else(|_| "<unrenderable context>".to_string())
}

fn log_event(event: LifecycleEvent) -> SharedHandler {
    sync_handler(move |context| {
        info!("[{}] {} | context: {}", PLUGIN_NAME, event, describe(&context));
        Ok(())
    })
}

/// Plugin that writes every lifecycle event it receives to the log
#[derive(Debug, Default)]
pub struct LoggingPlugin;

impl LoggingPlugin {
    pub fn descriptor(&self) -> PluginDescriptor {
        LifecycleEvent::ALL
            .into_iter()
            .fold(PluginDescriptor::new(PLUGIN_NAME), |descriptor, event| {
                descriptor.on(event, log_event(event))
            })
    }
}
