//! Process-wide pipeline.
//!
//! Artifacts are loaded once and shared read-only for the rest of the
//! process; nothing mutates them afterwards, so no locking is involved.

use crate::pipeline::{Pipeline, Result};
use crate::settings::Settings;
use std::sync::OnceLock;

static PIPELINE: OnceLock<Pipeline> = OnceLock::new();

/// Load the global pipeline from `settings`, or return the one already loaded.
///
/// Settings passed after the first successful call are ignored.
///
/// # Errors
///
/// Returns an error if loading fails; a later call may retry.
pub fn init_global(settings: &Settings) -> Result<&'static Pipeline> {
    if let Some(pipeline) = PIPELINE.get() {
        return Ok(pipeline);
    }
    let pipeline = Pipeline::load(settings)?;
    Ok(PIPELINE.get_or_init(|| pipeline))
}

/// The global pipeline, if [`init_global`] has succeeded.
pub fn global() -> Option<&'static Pipeline> {
    PIPELINE.get()
}
