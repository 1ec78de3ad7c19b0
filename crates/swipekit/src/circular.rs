//! Circular index arithmetic.
//!
//! A carousel in continuous mode addresses slides by an unbounded logical
//! index; `circle` reduces any such index to a physical position in the
//! finite slide array, which is what makes a fixed set of elements behave
//! as an infinite circular sequence.

/// Reduce a logical index to a physical slide position in `[0, len)`.
///
/// Total over all `isize` inputs, including negative indices and indices
/// at or beyond `len`. `len` must be at least 1; constructing an engine
/// with zero slides is rejected before any index arithmetic happens.
pub fn circle(index: isize, len: usize) -> usize {
    debug_assert!(len >= 1, "circle() requires at least one slide");
    let n = len as isize;
    (((index % n) + n) % n) as usize
}

#[cfg(test)]
mod tests {
    use super::circle;

    #[test]
    fn stays_in_range_for_all_inputs() {
        for len in 1..=7usize {
            for index in -25..=25isize {
                let reduced = circle(index, len);
                assert!(reduced < len, "circle({index}, {len}) = {reduced}");
            }
        }
    }

    #[test]
    fn is_periodic_in_len() {
        for len in 1..=7usize {
            for index in -25..=25isize {
                assert_eq!(circle(index, len), circle(index + len as isize, len));
            }
        }
    }

    #[test]
    fn identity_on_valid_physical_indices() {
        for index in 0..5isize {
            assert_eq!(circle(index, 5), index as usize);
        }
    }

    #[test]
    fn wraps_negative_indices_backward() {
        assert_eq!(circle(-1, 5), 4);
        assert_eq!(circle(-5, 5), 0);
        assert_eq!(circle(-6, 5), 4);
    }

    #[test]
    fn single_slide_always_maps_to_zero() {
        for index in -10..=10isize {
            assert_eq!(circle(index, 1), 0);
        }
    }
}
