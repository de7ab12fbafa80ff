// =============================================================================
// Sub-indicator calculators
// =============================================================================
//
// Pure, side-effect-free implementations of the three rolling-window
// sub-indicators combined into the composite sentiment index. All three share
// the same windowing convention: a trailing, inclusive window ending at the
// current day, shrinking near the start of available history rather than
// being undefined.

pub mod momentum;
pub mod safe_haven;
pub mod strength;

/// The trailing inclusive window ending at index `i`.
///
/// Spans `[max(0, i - window + 1), i]`, so the first `window - 1` indices get
/// a shortened window instead of no value.
///
/// # Panics
/// Panics if `i >= values.len()` or `window == 0` (caller bugs, not data
/// conditions).
pub(crate) fn trailing_window<T>(values: &[T], i: usize, window: usize) -> &[T] {
    assert!(window > 0, "window must be at least 1");
    let start = (i + 1).saturating_sub(window);
    &values[start..=i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_shrinks_at_start_of_history() {
        let v = [1, 2, 3, 4, 5];
        assert_eq!(trailing_window(&v, 0, 3), &[1]);
        assert_eq!(trailing_window(&v, 1, 3), &[1, 2]);
        assert_eq!(trailing_window(&v, 2, 3), &[1, 2, 3]);
        assert_eq!(trailing_window(&v, 3, 3), &[2, 3, 4]);
        assert_eq!(trailing_window(&v, 4, 3), &[3, 4, 5]);
    }

    #[test]
    fn window_of_one_is_the_current_element() {
        let v = [10, 20, 30];
        assert_eq!(trailing_window(&v, 2, 1), &[30]);
    }

    #[test]
    fn window_longer_than_history_covers_everything() {
        let v = [1, 2, 3];
        assert_eq!(trailing_window(&v, 2, 500), &[1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn zero_window_panics() {
        let v = [1, 2, 3];
        trailing_window(&v, 1, 0);
    }
}
