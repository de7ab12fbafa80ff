// =============================================================================
// Composite Sentiment Index Engine
// =============================================================================
//
// Turns two aligned daily close series (broad equity benchmark + long
// duration bond benchmark) into one record per trading day carrying the
// three sub-indicators and their unweighted mean, the 0-100-style composite.
//
// The engine is pure and stateless: it reads only its arguments, allocates
// only its output, and does no I/O. Concurrent invocations are independent.
//
// Sub-indicator results are merged with an explicit per-date join: each
// series becomes a date -> value map and only dates present in all three are
// emitted. Momentum and strength cover every equity date (their windows
// shrink at the start of history), so in practice the join drops exactly the
// days without a bond match.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::indicators::momentum::calculate_momentum;
use crate::indicators::safe_haven::calculate_safe_haven;
use crate::indicators::strength::calculate_strength;
use crate::types::{IndexRecord, PricePoint};

/// The sentiment index engine. Holds only configuration; every call to
/// [`compute`](IndexEngine::compute) is a fresh single-pass transform over
/// the full history supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct IndexEngine {
    config: EngineConfig,
}

impl IndexEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the merged sentiment series.
    ///
    /// `equity` and `bond` must each be sorted ascending by date with unique
    /// dates and positive finite closes; the two calendars need not agree.
    /// Output dates are a subset of the equity dates, in the same ascending
    /// order: a date is emitted only when all three sub-indicators produced a
    /// value for it, which drops equity days lacking a bond match.
    ///
    /// # Errors
    /// - [`EngineError::InsufficientData`] — empty equity series.
    /// - [`EngineError::MalformedInput`] — a series violates the provider
    ///   contract (ordering, uniqueness, positive finite closes).
    /// - [`EngineError::Alignment`] — the two calendars share zero dates,
    ///   which signals a broken upstream fetch rather than holiday noise.
    pub fn compute(&self, equity: &[PricePoint], bond: &[PricePoint]) -> Result<Vec<IndexRecord>> {
        if equity.is_empty() {
            return Err(EngineError::InsufficientData { required: 1, got: 0 });
        }
        validate_series(equity, "equity")?;
        validate_series(bond, "bond")?;

        let bond_by_date: BTreeMap<NaiveDate, f64> =
            bond.iter().map(|p| (p.date, p.close)).collect();

        if !equity.iter().any(|p| bond_by_date.contains_key(&p.date)) {
            return Err(EngineError::Alignment);
        }

        debug!(
            equity_days = equity.len(),
            bond_days = bond.len(),
            momentum_window = self.config.momentum_window,
            strength_window = self.config.strength_window,
            safe_haven_window = self.config.safe_haven_window,
            "computing sentiment index"
        );

        let closes: Vec<f64> = equity.iter().map(|p| p.close).collect();

        let momentum = calculate_momentum(&closes, self.config.momentum_window);
        let strength = calculate_strength(
            &closes,
            self.config.strength_window,
            self.config.neutral_strength,
        );
        let safe_haven =
            calculate_safe_haven(equity, &bond_by_date, self.config.safe_haven_window);

        // Per-date join. Momentum and strength come back positionally aligned
        // with the equity series; key them by date before intersecting so the
        // merge never relies on positional alignment across series.
        let momentum_by_date: BTreeMap<NaiveDate, f64> = equity
            .iter()
            .zip(&momentum)
            .map(|(p, &v)| (p.date, v))
            .collect();
        let strength_by_date: BTreeMap<NaiveDate, f64> = equity
            .iter()
            .zip(&strength)
            .map(|(p, &v)| (p.date, v))
            .collect();

        let mut records = Vec::with_capacity(safe_haven.len());
        for point in equity {
            let (Some(&m), Some(&s), Some(&sh)) = (
                momentum_by_date.get(&point.date),
                strength_by_date.get(&point.date),
                safe_haven.get(&point.date),
            ) else {
                continue;
            };

            records.push(IndexRecord {
                date: point.date,
                momentum: m,
                strength: s,
                safe_haven: sh,
                composite: (m + s + sh) / 3.0,
            });
        }

        let dropped = equity.len() - records.len();
        if dropped > 0 {
            warn!(
                dropped,
                emitted = records.len(),
                "equity days dropped from composite (no bond match)"
            );
        }
        debug!(records = records.len(), "sentiment index computed");

        Ok(records)
    }
}

/// Enforce the provider contract: strictly ascending unique dates, positive
/// finite closes. An empty series is fine here; emptiness is judged by the
/// caller (empty equity is insufficient data, empty bond fails alignment).
fn validate_series(series: &[PricePoint], name: &'static str) -> Result<()> {
    for pair in series.windows(2) {
        if pair[1].date <= pair[0].date {
            return Err(EngineError::MalformedInput {
                series: name,
                reason: "dates not strictly ascending",
            });
        }
    }
    for point in series {
        if !point.close.is_finite() || point.close <= 0.0 {
            return Err(EngineError::MalformedInput {
                series: name,
                reason: "closes must be positive and finite",
            });
        }
    }
    Ok(())
}
