// =============================================================================
// Shared types for the marketmood sentiment engine
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day's closing price for a single instrument.
///
/// Produced by an external price-history provider. Each series is expected to
/// be sorted ascending by date with no duplicate dates; non-trading days are
/// simply absent, so spacing is not uniform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// One day of computed sentiment output.
///
/// - `momentum` and `safe_haven` are centred near 100 / 0 respectively by
///   construction but unbounded in principle.
/// - `strength` is a min-max normalisation and always lies in [0, 100].
/// - `composite` is the unweighted mean of the three sub-indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub date: NaiveDate,
    pub momentum: f64,
    pub strength: f64,
    pub safe_haven: f64,
    pub composite: f64,
}
