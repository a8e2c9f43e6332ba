//! Fire-and-forget request dispatch with a completion continuation.
//!
//! Connector operations are plain futures. `dispatch` runs one on the tokio
//! runtime and hands its outcome to `on_complete`, which is called exactly
//! once when the request finishes. The caller returns immediately.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::outcome::Outcome;

/// Spawn `request` and deliver its outcome to `on_complete`.
///
/// Must be called from within a tokio runtime. There is no cancellation:
/// dropping the returned handle detaches the task, it still runs to
/// completion.
pub fn dispatch<T, F, C>(request: F, on_complete: C) -> JoinHandle<()>
where
    T: Send + 'static,
    F: Future<Output = Outcome<T>> + Send + 'static,
    C: FnOnce(Outcome<T>) + Send + 'static,
{
    tokio::spawn(async move {
        let outcome = request.await;
        on_complete(outcome);
    })
}
