// =============================================================================
// Market Momentum — price vs. its own trailing moving average
// =============================================================================
//
// Momentum compares today's close to the simple moving average of closes over
// the trailing window (125 trading days by default):
//
//   momentum_i = close_i / mean(close over trailing window) * 100
//
// A value above 100 means price sits above its own average (greed-leaning);
// below 100 means it has fallen under its average (fear-leaning).

use super::trailing_window;

/// Compute the momentum series for the given `closes` and `window`.
///
/// Returns one value per close; the window shrinks at the start of history,
/// so even the first close gets a value (trivially 100.0, since a one-day
/// window averages to the close itself).
///
/// Closes are expected to be positive; the engine validates this before
/// calling. A zero mean (impossible for positive inputs) maps to the neutral
/// 100.0 rather than a non-finite value.
///
/// # Edge cases
/// - `window == 0` => empty vec
/// - empty `closes` => empty vec
pub fn calculate_momentum(closes: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || closes.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(closes.len());
    for (i, &close) in closes.iter().enumerate() {
        let slice = trailing_window(closes, i, window);
        let mean: f64 = slice.iter().sum::<f64>() / slice.len() as f64;

        let value = if mean == 0.0 {
            100.0
        } else {
            close / mean * 100.0
        };
        result.push(value);
    }
    result
}
