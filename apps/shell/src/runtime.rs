//! Tokio runtime for the shell.
//!
//! The form is owned by a single task, so a current-thread scheduler is enough.
//! Timers drive toast auto-dismissal; stdin is read through the blocking pool.

use anyhow::{Result, anyhow};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

pub(crate) fn build_runtime() -> Result<Runtime> {
    debug!("Building current-thread tokio runtime");

    let mut builder = Builder::new_current_thread();
    builder.enable_time();

    builder.build().map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}
