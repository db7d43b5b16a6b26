//! Shared helpers for the `taskline` integration tests.

pub mod builders;
pub mod fake_renderer;

pub use builders::{date, SnapshotBuilder, TaskBuilder};
pub use fake_renderer::FakeRenderer;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use taskline::logging::{crate_directive, LOG_ENV_VAR};
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Upper bound for any awaited step in a runtime or watcher test.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

static TRACING: Once = Once::new();

/// Route `taskline` logs into the per-test capture.
///
/// Reads the same `TASKLINE_LOG` variable as the binary (full directive
/// syntax, e.g. `taskline::timeline=trace`); defaults to `taskline=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(crate_directive(Level::DEBUG)));

        fmt().with_env_filter(filter).with_test_writer().init();
    });
}

/// Await `f`, failing the test after [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(TEST_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("timed out after {TEST_TIMEOUT:?}"),
    }
}
