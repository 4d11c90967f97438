//! Top-K selection over a sorted copy.

use crate::core::sequence::StepSequence;

/// Return the `k` largest values in descending order.
///
/// Works on a copy, so `seq` keeps its order. `k` is clamped to the sequence
/// length; an empty sequence or `k == 0` yields an empty result.
pub fn top_k(seq: &StepSequence, k: usize) -> Vec<i32> {
    if seq.is_empty() || k == 0 {
        return Vec::new();
    }
    let k = k.min(seq.len());
    let mut sorted = seq.as_slice().to_vec();
    sorted.sort_unstable();
    sorted.reverse();
    sorted.truncate(k);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::one_to;

    #[test]
    fn top_five_of_one_to_thirty() {
        assert_eq!(top_k(&one_to(30), 5), vec![30, 29, 28, 27, 26]);
    }

    #[test]
    fn original_order_is_preserved() {
        let seq = StepSequence::from(vec![3, 9, 1, 9, 4]);
        let before = seq.clone();
        assert_eq!(top_k(&seq, 3), vec![9, 9, 4]);
        assert_eq!(seq, before);
    }

    #[test]
    fn k_is_clamped_to_len() {
        let seq = StepSequence::from(vec![2, 7, 5]);
        assert_eq!(top_k(&seq, 10), vec![7, 5, 2]);
    }

    #[test]
    fn zero_k_or_empty_sequence_yields_nothing() {
        assert!(top_k(&one_to(5), 0).is_empty());
        assert!(top_k(&StepSequence::new(), 5).is_empty());
    }
}
