//! Orchestration for one full tracker run.
//!
//! Strictly linear: Load → Raw → Stats → Script → Raw → Shift → Raw → TopK.
//! A load failure aborts after the banner, before any data report.

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::script::{StepReport, run_script};
use crate::core::sequence::StepSequence;
use crate::core::shift::shift_all;
use crate::core::stats::Stats;
use crate::core::topk::top_k;
use crate::io::config::TrackerConfig;
use crate::io::loader::load_steps;
use crate::report;

/// Everything a completed run computed, for callers that want more than text.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Values read from the steps file.
    pub loaded: usize,
    /// Statistics over the freshly loaded data.
    pub stats: Stats,
    pub script: Vec<StepReport>,
    /// Sequence after the script and the uniform shift.
    pub days: StepSequence,
    pub top: Vec<i32>,
}

/// Run the pipeline, writing reports to `out`.
///
/// Load failures surface as [`crate::io::loader::LoadError`] inside the
/// returned error.
pub fn run_pipeline(cfg: &TrackerConfig, out: &mut impl Write) -> Result<PipelineOutcome> {
    let layout = cfg.layout();
    report::write_banner(out)?;

    let mut days = load_steps(&cfg.input_file, cfg.min_days)?;
    let loaded = days.len();
    info!(path = %cfg.input_file.display(), loaded, "steps loaded");

    report::write_listing(out, "Raw step counts (from file):", days.as_slice(), layout)?;

    let stats = Stats::compute(&days, cfg.preview_len);
    report::write_stats(out, &stats)?;

    let script = run_script(&mut days, &cfg.script);
    report::write_script(out, &script, layout)?;
    report::write_listing(out, "\nAfter mutation script:", days.as_slice(), layout)?;

    shift_all(&mut days, cfg.shift_delta);
    debug!(delta = cfg.shift_delta, len = days.len(), "uniform shift applied");
    report::write_listing(
        out,
        &format!("\nAfter uniform shift ({:+}):", cfg.shift_delta),
        days.as_slice(),
        layout,
    )?;

    let top = top_k(&days, cfg.top_k);
    debug!(requested = cfg.top_k, reported = top.len(), "top-k selected");
    report::write_top_k(out, &top, layout)?;

    report::write_done(out)?;
    Ok(PipelineOutcome {
        loaded,
        stats,
        script,
        days,
        top,
    })
}
