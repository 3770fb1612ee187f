use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::event::context::Context;

/// Error type a handler may fail with
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Result of a single handler invocation
pub type HandlerResult = Result<(), HandlerError>;

/// Asynchronous plugin event handler.
///
/// Each invocation receives its own copy of the emission context. Returning
/// an error (or panicking) is caught by the engine and logged; it never
/// reaches the emitter or other handlers.
#[async_trait]
pub trait PluginEventHandler: Send + Sync {
    async fn handle(&self, context: Context) -> HandlerResult;
}

/// Shared, cheaply clonable handler reference as stored in the index
pub type SharedHandler = Arc<dyn PluginEventHandler>;

/// Adapter for plain closures (Internal Helper)
struct SyncHandler<F> {
    f: F,
}

impl<F> fmt::Debug for SyncHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncHandler").finish_non_exhaustive()
    }
}

#[async_trait]
impl<F> PluginEventHandler for SyncHandler<F>
where
    F: Fn(Context) -> HandlerResult + Send + Sync + 'static,
{
    async fn handle(&self, context: Context) -> HandlerResult {
        (self.f)(context)
    }
}

/// Adapter for closures returning a future (Internal Helper)
struct AsyncFnHandler<F> {
    f: F,
}

impl<F> fmt::Debug for AsyncFnHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncFnHandler").finish_non_exhaustive()
    }
}

#[async_trait]
impl<F, Fut> PluginEventHandler for AsyncFnHandler<F>
where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    async fn handle(&self, context: Context) -> HandlerResult {
        (self.f)(context).await
    }
}

/// Helper function to create a handler from a synchronous closure
pub fn sync_handler<F>(f: F) -> SharedHandler
where
    F: Fn(Context) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(SyncHandler { f })
}

/// Helper function to create a handler from an async closure
pub fn async_handler<F, Fut>(f: F) -> SharedHandler
where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    Arc::new(AsyncFnHandler { f })
}
