//! Quantiles and percentile ranks over consumption populations.

use noil_core::error::CompareError;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Where one household sits in a population.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionalStanding {
    /// 0–100; 100 means nobody in the population consumes less.
    pub percentile: u8,
    /// 1-based; 1 is the lowest consumer.
    pub rank: usize,
    pub population: usize,
}

/// Validate a consumption value: finite and non-negative.
pub(crate) fn check_value(value: f64) -> Result<f64, CompareError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CompareError::InvalidValue(value))
    }
}

/// Validate and sort a population ascending.
pub(crate) fn sorted_population(values: &[f64]) -> Result<Vec<OrderedFloat<f64>>, CompareError> {
    if values.is_empty() {
        return Err(CompareError::EmptyPopulation);
    }
    let mut sorted = values
        .iter()
        .map(|&v| check_value(v).map(OrderedFloat))
        .collect::<Result<Vec<_>, _>>()?;
    sorted.sort_unstable();
    Ok(sorted)
}

/// Quantile of an ascending, non-empty population.
pub(crate) fn quantile_sorted(sorted: &[OrderedFloat<f64>], q: f64) -> Result<f64, CompareError> {
    if !(0.0..=1.0).contains(&q) {
        return Err(CompareError::QuantileOutOfRange(q));
    }
    let Some(last) = sorted.len().checked_sub(1) else {
        return Err(CompareError::EmptyPopulation);
    };
    let h = last as f64 * q;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(last);
    let frac = h - lo as f64;
    Ok(sorted[lo].0 + frac * (sorted[hi].0 - sorted[lo].0))
}

/// Standing of `value` in an ascending, non-empty population.
pub(crate) fn standing_sorted(sorted: &[OrderedFloat<f64>], value: f64) -> RegionalStanding {
    let key = OrderedFloat(value);
    let less = sorted.partition_point(|v| *v < key);
    let not_greater = sorted.partition_point(|v| *v <= key);
    let n = sorted.len();
    let greater = n - not_greater;
    let ties = not_greater - less;

    // (greater + ties / 2) / n as a whole percent, rounded half up.
    let percentile = (200 * greater + 100 * ties + n) / (2 * n);

    RegionalStanding {
        percentile: percentile.min(100) as u8,
        rank: less + 1,
        population: n,
    }
}

/// Linear-interpolation quantile (`q` in `[0, 1]`).
///
/// # Examples
///
/// ```
/// use noil_compare::quantile;
///
/// let values = [40.0, 10.0, 30.0, 20.0];
/// assert_eq!(quantile(&values, 0.0).unwrap(), 10.0);
/// assert_eq!(quantile(&values, 0.5).unwrap(), 25.0);
/// assert_eq!(quantile(&values, 1.0).unwrap(), 40.0);
/// ```
pub fn quantile(values: &[f64], q: f64) -> Result<f64, CompareError> {
    quantile_sorted(&sorted_population(values)?, q)
}

/// Percentile rank of `value` within `population`; lower consumption is better.
///
/// # Examples
///
/// ```
/// use noil_compare::percentile_rank;
///
/// let population = [10.0, 20.0, 30.0, 40.0];
/// let s = percentile_rank(5.0, &population).unwrap();
/// assert_eq!(s.percentile, 100);
/// assert_eq!(s.rank, 1);
///
/// let s = percentile_rank(50.0, &population).unwrap();
/// assert_eq!(s.percentile, 0);
/// assert_eq!(s.rank, 5);
/// ```
pub fn percentile_rank(value: f64, population: &[f64]) -> Result<RegionalStanding, CompareError> {
    let value = check_value(value)?;
    Ok(standing_sorted(&sorted_population(population)?, value))
}
