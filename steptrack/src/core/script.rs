//! Fixed mutation script applied to the live sequence.
//!
//! Each step checks its own precondition; a step whose precondition fails is
//! recorded as [`StepOutcome::Skipped`] and the script moves on. Nothing here
//! returns an error.

use serde::Deserialize;
use tracing::debug;

use crate::core::sequence::StepSequence;

/// Constants used by the mutation script.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScriptConfig {
    /// Extra slots requested by the reserve step.
    pub headroom: usize,
    /// First appended value when the sequence is empty.
    pub seed: i32,
    /// Increment between the last element and each appended value.
    pub append_step: i32,
    /// Amount added to the first and last elements.
    pub edge_delta: i32,
    /// Marker inserted and then removed again.
    pub sentinel: i32,
    pub sentinel_index: usize,
    /// Fill value of the transient baseline swapped with the live sequence.
    pub baseline_fill: i32,
    /// Baseline values shown while it is swapped in.
    pub baseline_preview: usize,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            headroom: 64,
            seed: 5000,
            append_step: 50,
            edge_delta: 250,
            sentinel: 7777,
            sentinel_index: 1,
            baseline_fill: 5000,
            baseline_preview: 10,
        }
    }
}

/// Script steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStep {
    Reserve,
    AppendTwo,
    PopLast,
    BumpEdges,
    InsertSentinel,
    RemoveSentinel,
    SwapBaseline,
    ShrinkToFit,
}

impl MutationStep {
    pub const ALL: [MutationStep; 8] = [
        MutationStep::Reserve,
        MutationStep::AppendTwo,
        MutationStep::PopLast,
        MutationStep::BumpEdges,
        MutationStep::InsertSentinel,
        MutationStep::RemoveSentinel,
        MutationStep::SwapBaseline,
        MutationStep::ShrinkToFit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MutationStep::Reserve => "reserve",
            MutationStep::AppendTwo => "push x2",
            MutationStep::PopLast => "pop",
            MutationStep::BumpEdges => "bump front/back",
            MutationStep::InsertSentinel => "insert sentinel",
            MutationStep::RemoveSentinel => "remove sentinel",
            MutationStep::SwapBaseline => "swap baseline",
            MutationStep::ShrinkToFit => "shrink to fit",
        }
    }
}

/// What a step did to the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Skipped,
    Reserved { additional: usize },
    Appended { first: i32, second: i32 },
    Popped { value: i32 },
    EdgesBumped { front: i32, back: i32 },
    Inserted { index: usize, value: i32 },
    Removed { index: usize, value: i32 },
    /// Leading values of the baseline while it was live.
    Swapped { baseline_preview: Vec<i32> },
    Shrunk,
}

/// Outcome of one step plus the sequence size afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: MutationStep,
    pub outcome: StepOutcome,
    pub len: usize,
    pub capacity: usize,
}

/// Run every step of the script, in order, against `seq`.
pub fn run_script(seq: &mut StepSequence, cfg: &ScriptConfig) -> Vec<StepReport> {
    MutationStep::ALL
        .iter()
        .map(|&step| {
            let outcome = apply_step(seq, step, cfg);
            if outcome == StepOutcome::Skipped {
                debug!(step = step.label(), len = seq.len(), "script step skipped");
            } else {
                debug!(step = step.label(), len = seq.len(), "script step applied");
            }
            StepReport {
                step,
                outcome,
                len: seq.len(),
                capacity: seq.capacity(),
            }
        })
        .collect()
}

/// Apply a single script step.
pub fn apply_step(seq: &mut StepSequence, step: MutationStep, cfg: &ScriptConfig) -> StepOutcome {
    match step {
        MutationStep::Reserve => {
            seq.reserve(cfg.headroom);
            StepOutcome::Reserved {
                additional: cfg.headroom,
            }
        }
        MutationStep::AppendTwo => {
            let first = seq
                .back()
                .map_or(cfg.seed, |last| last.wrapping_add(cfg.append_step));
            seq.push(first);
            let second = first.wrapping_add(cfg.append_step);
            seq.push(second);
            StepOutcome::Appended { first, second }
        }
        MutationStep::PopLast => match seq.pop() {
            Some(value) => StepOutcome::Popped { value },
            None => StepOutcome::Skipped,
        },
        MutationStep::BumpEdges => bump_edges(seq, cfg.edge_delta),
        MutationStep::InsertSentinel => {
            if seq.len() <= cfg.sentinel_index || !seq.insert(cfg.sentinel_index, cfg.sentinel) {
                return StepOutcome::Skipped;
            }
            StepOutcome::Inserted {
                index: cfg.sentinel_index,
                value: cfg.sentinel,
            }
        }
        MutationStep::RemoveSentinel => {
            if seq.get(cfg.sentinel_index) != Some(cfg.sentinel) {
                return StepOutcome::Skipped;
            }
            match seq.remove(cfg.sentinel_index) {
                Some(value) => StepOutcome::Removed {
                    index: cfg.sentinel_index,
                    value,
                },
                None => StepOutcome::Skipped,
            }
        }
        MutationStep::SwapBaseline => {
            let mut baseline = StepSequence::filled(seq.len(), cfg.baseline_fill);
            seq.swap_with(&mut baseline);
            let baseline_preview = seq.iter().take(cfg.baseline_preview).copied().collect();
            seq.swap_with(&mut baseline);
            StepOutcome::Swapped { baseline_preview }
        }
        MutationStep::ShrinkToFit => {
            seq.shrink_to_fit();
            StepOutcome::Shrunk
        }
    }
}

/// Front is bumped before back; a single-element sequence is bumped twice.
fn bump_edges(seq: &mut StepSequence, delta: i32) -> StepOutcome {
    let Some(front) = seq.front_mut() else {
        return StepOutcome::Skipped;
    };
    *front = front.wrapping_add(delta);
    let Some(back) = seq.back_mut() else {
        return StepOutcome::Skipped;
    };
    *back = back.wrapping_add(delta);
    match (seq.front(), seq.back()) {
        (Some(front), Some(back)) => StepOutcome::EdgesBumped { front, back },
        _ => StepOutcome::Skipped,
    }
}
