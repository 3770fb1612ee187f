use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use log::{debug, error};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::event::context::Context;
use crate::event::error::EventSystemError;
use crate::event::handler::PluginEventHandler;
use crate::event::trie::HandlerRecord;

/// The tasks scheduled by one `emit` call.
///
/// Dropping the handle leaves the tasks running; they cannot be cancelled
/// through it. Hosts and tests that need to observe completion can
/// [`join`](DispatchHandle::join).
#[derive(Debug)]
pub struct DispatchHandle {
    event_path: String,
    tasks: Vec<JoinHandle<()>>,
}

impl DispatchHandle {
    pub(crate) fn empty(event_path: impl Into<String>) -> Self {
        Self {
            event_path: event_path.into(),
            tasks: Vec::new(),
        }
    }

    /// The path that was emitted
    pub fn event_path(&self) -> &str {
        &self.event_path
    }

    /// Number of handler invocations scheduled
    pub fn scheduled(&self) -> usize {
        self.tasks.len()
    }

    /// Wait for every scheduled invocation to finish. Returns how many ran to
    /// completion; handler failures are already absorbed and count as
    /// finished.
    pub async fn join(self) -> usize {
        let mut finished = 0;
        for task in self.tasks {
            match task.await {
                Ok(()) => finished += 1,
                Err(e) => error!("Dispatch task for event {} did not finish: {}", self.event_path, e),
            }
        }
        finished
    }
}

/// Spawn one independent task per record, in record order. Each task gets
/// its own copy of `context`.
pub(crate) fn schedule(event_path: &str, records: &[HandlerRecord], context: &Context) -> DispatchHandle {
    if records.is_empty() {
        return DispatchHandle::empty(event_path);
    }

    let runtime = match Handle::try_current() {
        Ok(handle) => handle,
        Err(_) => {
            let err = EventSystemError::NoRuntime {
                event_path: event_path.to_string(),
                handler_count: records.len(),
            };
            error!("{}", err);
            return DispatchHandle::empty(event_path);
        }
    };

    let tasks = records
        .iter()
        .map(|record| {
            runtime.spawn(run_isolated(
                event_path.to_string(),
                record.owner_id().to_string(),
                Arc::clone(record.handler()),
                context.clone(),
            ))
        })
        .collect();

    DispatchHandle {
        event_path: event_path.to_string(),
        tasks,
    }
}

/// Run one handler, converting an error return or a panic into a log entry.
async fn run_isolated(
    event_path: String,
    plugin_id: String,
    handler: Arc<dyn PluginEventHandler>,
    context: Context,
) {
    let invocation = AssertUnwindSafe(async move { handler.handle(context).await });
    match invocation.catch_unwind().await {
        Ok(Ok(())) => debug!("Handler of {} finished for event {}", plugin_id, event_path),
        Ok(Err(source)) => {
            let err = EventSystemError::HandlerFailed {
                event_path,
                plugin_id,
                source,
            };
            error!("{}", err);
        }
        Err(panic) => {
            let err = EventSystemError::HandlerPanicked {
                event_path,
                plugin_id,
                message: panic_message(panic.as_ref()),
            };
            error!("{}", err);
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
