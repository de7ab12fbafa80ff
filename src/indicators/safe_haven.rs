// =============================================================================
// Safe Haven Demand — bond/equity ratio vs. its own trailing average
// =============================================================================
//
// For each equity day with a matching bond date, take the bond/equity close
// ratio and compare it to the trailing-window average of that ratio (125
// trading days by default). Only window days that themselves have a bond
// match contribute to the average; unmatched days are skipped, never
// zero-filled.
//
//   value_i = 100 - (ratio_i / window_avg_ratio) * 100
//
// The inversion makes rising relative bond demand (flight to safety) push
// the score down: ratio above its own average => negative value, ratio at
// its average => 0.
//
// Days with no bond match produce no value at all; the engine drops them
// from the merged output.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::trailing_window;
use crate::types::PricePoint;

/// Compute the safe-haven series as a date -> value map.
///
/// `bond_by_date` is the bond series keyed by date. The map contains one
/// entry per equity day that has a matching bond date; other equity days are
/// simply absent. Iteration order of the result is ascending by date.
///
/// # Edge cases
/// - `window == 0` or empty `equity` => empty map
/// - equity day without a bond match => no entry for that date
pub fn calculate_safe_haven(
    equity: &[PricePoint],
    bond_by_date: &BTreeMap<NaiveDate, f64>,
    window: usize,
) -> BTreeMap<NaiveDate, f64> {
    let mut result = BTreeMap::new();
    if window == 0 || equity.is_empty() {
        return result;
    }

    for (i, point) in equity.iter().enumerate() {
        let Some(&bond_close) = bond_by_date.get(&point.date) else {
            continue;
        };
        let ratio = bond_close / point.close;

        // Average the ratio over window days that have a bond match.
        let matched: Vec<f64> = trailing_window(equity, i, window)
            .iter()
            .filter_map(|p| bond_by_date.get(&p.date).map(|&b| b / p.close))
            .collect();

        // The current day matched above, so the window subset is never empty;
        // keep the guard for the impossible case rather than divide by zero.
        if matched.is_empty() {
            continue;
        }
        let avg: f64 = matched.iter().sum::<f64>() / matched.len() as f64;

        let value = 100.0 - (ratio / avg) * 100.0;
        if value.is_finite() {
            result.insert(point.date, value);
        }
    }

    result
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: consecutive daily points starting 2024-01-01.
    fn series(closes: &[f64]) -> Vec<PricePoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PricePoint::new(start + chrono::Days::new(i as u64), c))
            .collect()
    }

    fn to_map(points: &[PricePoint]) -> BTreeMap<NaiveDate, f64> {
        points.iter().map(|p| (p.date, p.close)).collect()
    }

    #[test]
    fn safe_haven_empty_equity() {
        let bond = to_map(&series(&[50.0; 10]));
        assert!(calculate_safe_haven(&[], &bond, 125).is_empty());
    }

    #[test]
    fn safe_haven_window_zero() {
        let equity = series(&[100.0; 10]);
        let bond = to_map(&series(&[50.0; 10]));
        assert!(calculate_safe_haven(&equity, &bond, 0).is_empty());
    }

    #[test]
    fn safe_haven_no_bond_overlap_is_empty() {
        let equity = series(&[100.0; 10]);
        assert!(calculate_safe_haven(&equity, &BTreeMap::new(), 125).is_empty());
    }

    #[test]
    fn safe_haven_flat_ratio_is_zero() {
        // Constant bond/equity ratio: the ratio always equals its own average,
        // so the inverted deviation is exactly 0 every day.
        let equity = series(&[100.0; 300]);
        let bond = to_map(&series(&[50.0; 300]));
        let sh = calculate_safe_haven(&equity, &bond, 125);
        assert_eq!(sh.len(), 300);
        for (&date, &v) in &sh {
            assert!(v.abs() < 1e-10, "expected 0 on {date}, got {v}");
        }
    }

    #[test]
    fn safe_haven_skips_unmatched_days() {
        // Bond series covers only the first 3 of 5 equity days.
        let equity = series(&[100.0, 100.0, 100.0, 100.0, 100.0]);
        let bond = to_map(&series(&[50.0, 50.0, 50.0]));
        let sh = calculate_safe_haven(&equity, &bond, 125);
        assert_eq!(sh.len(), 3);
        assert!(sh.contains_key(&equity[2].date));
        assert!(!sh.contains_key(&equity[3].date));
    }

    #[test]
    fn safe_haven_window_average_uses_matched_days_only() {
        // Equity flat at 10. Bond matches days 0 and 2 with closes 20 and 40:
        //   ratios: day0 = 2.0, day2 = 4.0
        //   day2 window avg over matched days = (2 + 4) / 2 = 3
        //   value = 100 - 4/3 * 100 = -33.33...
        let equity = series(&[10.0, 10.0, 10.0]);
        let mut bond = BTreeMap::new();
        bond.insert(equity[0].date, 20.0);
        bond.insert(equity[2].date, 40.0);

        let sh = calculate_safe_haven(&equity, &bond, 3);
        assert_eq!(sh.len(), 2);
        let day2 = sh[&equity[2].date];
        assert!((day2 - (100.0 - 4.0 / 3.0 * 100.0)).abs() < 1e-10, "got {day2}");
    }

    #[test]
    fn safe_haven_rising_bond_demand_lowers_score() {
        // Equity flat, bond climbing: today's ratio sits above its trailing
        // average, so the inverted value must be negative.
        let equity = series(&[100.0; 50]);
        let bond_closes: Vec<f64> = (1..=50).map(|x| 50.0 + x as f64).collect();
        let bond = to_map(&series(&bond_closes));
        let sh = calculate_safe_haven(&equity, &bond, 20);
        let last = *sh.values().last().unwrap();
        assert!(last < 0.0, "expected negative, got {last}");
    }

    #[test]
    fn safe_haven_first_day_is_zero() {
        // One-day window: the ratio is its own average.
        let equity = series(&[100.0, 110.0]);
        let bond = to_map(&series(&[40.0, 42.0]));
        let sh = calculate_safe_haven(&equity, &bond, 125);
        assert!(sh[&equity[0].date].abs() < 1e-10);
    }
}
