/// Global Tokio runtime for async HTTP operations
///
/// egui runs its own synchronous frame loop, but reqwest and the gateway
/// tasks need a tokio context. This static runtime bridges the two: UI
/// handlers spawn onto it, and results come back to the frame loop over
/// the event channel.
///
/// Usage:
/// ```rust,ignore
/// use crate::utils::runtime::TOKIO_RT;
///
/// TOKIO_RT.spawn(async move {
///     let result = some_async_operation().await;
///     let _ = event_tx.send(AppEvent::from(result)).await;
/// });
/// ```
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
