//! Uniform in-place shift of every element.

use crate::core::sequence::StepSequence;

/// Add `delta` to every element in index order.
///
/// Values outside the `i32` range wrap; keeping them representable is the
/// caller's concern.
pub fn shift_all(seq: &mut StepSequence, delta: i32) {
    for value in seq.iter_mut() {
        *value = value.wrapping_add(delta);
    }
}
