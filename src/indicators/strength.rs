// =============================================================================
// Stock Price Strength — position within the trailing high/low range
// =============================================================================
//
// Strength min-max-normalises today's close against the trailing window's
// high and low (252 trading days by default, the "52-week" range):
//
//   strength_i = (close_i - low) / (high - low) * 100
//
// The current close is part of its own window, so the result is always in
// [0, 100]: a new 52-week high scores 100, a new low scores 0.
//
// When the window has zero price range (flat prices, or a one-day window at
// the start of history) the formula divides by zero. Policy: emit the caller
// supplied neutral value (50.0 by default) instead of a non-finite number.

use super::trailing_window;

/// Compute the strength series for the given `closes` and `window`.
///
/// Returns one value per close; the window shrinks at the start of history.
/// `neutral` is emitted for degenerate (zero-range) windows.
///
/// # Edge cases
/// - `window == 0` => empty vec
/// - empty `closes` => empty vec
/// - window high == window low => `neutral`
pub fn calculate_strength(closes: &[f64], window: usize, neutral: f64) -> Vec<f64> {
    if window == 0 || closes.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(closes.len());
    for (i, &close) in closes.iter().enumerate() {
        let slice = trailing_window(closes, i, window);
        let high = slice.iter().copied().fold(f64::MIN, f64::max);
        let low = slice.iter().copied().fold(f64::MAX, f64::min);

        let value = if high == low {
            neutral
        } else {
            (close - low) / (high - low) * 100.0
        };
        result.push(value);
    }
    result
}
