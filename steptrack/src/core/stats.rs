//! Read-only statistics over the current sequence state.

use crate::core::sequence::StepSequence;

/// A value together with the index where it first occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    pub value: i32,
    pub index: usize,
}

/// Snapshot of sequence statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub capacity: usize,
    /// Sum accumulated in 64 bits so 32-bit inputs cannot overflow it.
    pub sum: i64,
    /// `sum / count`, or `0.0` for an empty sequence.
    pub mean: f64,
    pub min: Option<Located>,
    pub max: Option<Located>,
    pub front: Option<i32>,
    pub back: Option<i32>,
    /// Leading values fetched through bounds-checked access.
    pub preview: Vec<i32>,
}

impl Stats {
    /// Compute statistics, previewing at most `preview_len` leading values.
    pub fn compute(seq: &StepSequence, preview_len: usize) -> Self {
        let sum: i64 = seq.iter().map(|&v| i64::from(v)).sum();
        let mean = if seq.is_empty() {
            0.0
        } else {
            sum as f64 / seq.len() as f64
        };
        let preview = (0..preview_len).map_while(|i| seq.get(i)).collect();

        Self {
            count: seq.len(),
            capacity: seq.capacity(),
            sum,
            mean,
            min: first_extreme(seq, |candidate, best| candidate < best),
            max: first_extreme(seq, |candidate, best| candidate > best),
            front: seq.front(),
            back: seq.back(),
            preview,
        }
    }

    /// Mean rendered to one decimal place.
    pub fn mean_display(&self) -> String {
        format!("{:.1}", self.mean)
    }
}

/// Scan left to right, replacing the best only on a strict improvement so
/// ties resolve to the first occurrence.
fn first_extreme(seq: &StepSequence, better: impl Fn(i32, i32) -> bool) -> Option<Located> {
    let mut best: Option<Located> = None;
    for (index, &value) in seq.iter().enumerate() {
        if best.is_none_or(|current| better(value, current.value)) {
            best = Some(Located { value, index });
        }
    }
    best
}
