//! # noil-compare — Regional and household consumption comparison.
//!
//! Ranks a household's per-person oil consumption against a population of
//! other households' per-person averages. Lower consumption ranks better.
//!
//! - **Quantiles**: linear interpolation between closest ranks.
//! - **Percentile rank**: share of the population consuming strictly more,
//!   plus half of the ties, rounded half up to a whole percent.
//! - **Region**: a pre-sorted population for repeated lookups.

pub mod quantile;
pub mod region;

pub use quantile::{percentile_rank, quantile, RegionalStanding};
pub use region::Region;
