use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::script::EventScript;

pub mod headless;

pub use headless::{HeadlessBackend, ReplaySummary};

/// Replay an event script headlessly and write the final frame to `output`.
///
/// # Arguments
/// * `config` - Grid geometry, colors and frame rate
/// * `script` - Input events grouped into frames
/// * `output` - PNG path for the last rendered frame
/// * `realtime` - Pace frames at the configured frame rate
pub fn run_replay(
    config: &Config,
    script: &EventScript,
    output: &Path,
    realtime: bool,
) -> Result<ReplaySummary> {
    let mut backend = HeadlessBackend::new(config)?;
    let summary = backend.run(script, realtime)?;
    backend.write_png(output)?;
    Ok(summary)
}
