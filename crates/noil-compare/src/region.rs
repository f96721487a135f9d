//! A region's population of per-person consumption averages.

use noil_core::error::CompareError;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::quantile::{check_value, quantile_sorted, sorted_population, standing_sorted, RegionalStanding};

/// Pre-sorted population for repeated standing lookups.
///
/// # Invariants
///
/// * `sorted` is non-empty and ascending
/// * every value is finite and non-negative
///
/// Deserialization re-validates and re-sorts through
/// [`Region::from_averages`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RegionRepr")]
pub struct Region {
    name: String,
    sorted: Vec<OrderedFloat<f64>>,
}

#[derive(Deserialize)]
struct RegionRepr {
    name: String,
    sorted: Vec<f64>,
}

impl TryFrom<RegionRepr> for Region {
    type Error = CompareError;

    fn try_from(repr: RegionRepr) -> Result<Self, Self::Error> {
        Self::from_averages(repr.name, &repr.sorted)
    }
}

impl Region {
    /// Build a region from per-person averages (ml/day).
    ///
    /// # Examples
    ///
    /// ```
    /// use noil_compare::Region;
    ///
    /// let region = Region::from_averages("north", &[30.0, 10.0, 20.0]).unwrap();
    /// assert_eq!(region.population(), 3);
    /// assert_eq!(region.median(), 20.0);
    /// assert_eq!(region.standing(15.0).unwrap().rank, 2);
    /// ```
    pub fn from_averages(name: impl Into<String>, averages: &[f64]) -> Result<Self, CompareError> {
        let name = name.into();
        let sorted = sorted_population(averages)?;
        debug!(region = %name, population = sorted.len(), "region: population loaded");
        Ok(Self { name, sorted })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> usize {
        self.sorted.len()
    }

    /// Quantile `q` in `[0, 1]`.
    pub fn quantile(&self, q: f64) -> Result<f64, CompareError> {
        quantile_sorted(&self.sorted, q)
    }

    pub fn median(&self) -> f64 {
        // Non-empty by construction, so the 0.5 quantile always exists.
        quantile_sorted(&self.sorted, 0.5).unwrap_or_default()
    }

    /// Where a household consuming `value` ml/day per person sits.
    pub fn standing(&self, value: f64) -> Result<RegionalStanding, CompareError> {
        let value = check_value(value)?;
        let standing = standing_sorted(&self.sorted, value);
        debug!(
            region = %self.name,
            value,
            percentile = standing.percentile,
            rank = standing.rank,
            "region: standing computed"
        );
        Ok(standing)
    }
}
