//! Tokio Runtime Bridge
//!
//! The console front end is synchronous, but the HTTP client needs tokio.
//! This module owns one global runtime and blocks on futures from the
//! synchronous side.
//!
//! ## Pattern
//!
//! ```text
//! console page (sync)
//!       │
//!       ▼
//! block_on(controller.submit())
//!       │
//!       ▼
//! tokio::Runtime::block_on()
//!       │
//!       ▼
//! outcome returned to the page
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::{Builder, Runtime};

use crate::error::Result;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> Result<&'static Runtime> {
    if let Some(runtime) = TOKIO_RUNTIME.get() {
        return Ok(runtime);
    }

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .thread_name("tutor-desk-io")
        .build()?;
    tracing::debug!("Tokio runtime started");

    // A concurrent initializer may have won; the spare runtime is dropped
    Ok(TOKIO_RUNTIME.get_or_init(|| runtime))
}

/// Block on a future synchronously
///
/// **Warning**: This blocks the current thread. Must not be called from
/// inside the runtime itself.
pub fn block_on<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T>,
{
    Ok(get_runtime()?.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_on_returns_output() {
        let value = block_on(async {
            tokio::task::yield_now().await;
            21 * 2
        })
        .expect("runtime");
        assert_eq!(value, 42);
    }

    #[test]
    fn test_runtime_is_shared() {
        let first = get_runtime().expect("runtime") as *const Runtime;
        let second = get_runtime().expect("runtime") as *const Runtime;
        assert_eq!(first, second);
    }
}
