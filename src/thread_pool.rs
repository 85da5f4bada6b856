//! Shared thread pool for parallel metric computation.
//!
//! Only per-element work runs on the pool. Reductions happen afterwards on
//! the calling thread, in element order.

use rayon::ThreadPool;
use std::sync::OnceLock;

static THREAD_POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();

/// Get or initialize the shared metrics pool.
///
/// Returns `None` if the pool could not be built, in which case callers fall
/// back to rayon's global pool.
fn get_thread_pool() -> Option<&'static ThreadPool> {
    THREAD_POOL
        .get_or_init(|| {
            rayon::ThreadPoolBuilder::new()
                .thread_name(|i| format!("diffbench-metrics-{}", i))
                .build()
                .map_err(|err| tracing::warn!(error = %err, "falling back to global rayon pool"))
                .ok()
        })
        .as_ref()
}

/// Execute a parallel operation on the shared pool.
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match get_thread_pool() {
        Some(pool) => pool.install(op),
        None => op(),
    }
}
