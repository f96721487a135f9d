//! Habit honesty scoring.
//!
//! Pure computation: no storage, no IO, no randomness. Amounts are
//! normalised to integer centi-millilitres per person and every statistic
//! below is integer-only.
//!
//! Score composition for a window with at least [`MIN_PATTERN_DAYS`] days:
//!
//! | Window                        | Score                                   | Flags                |
//! |-------------------------------|-----------------------------------------|----------------------|
//! | every day zero                | `NEUTRAL_SCORE` (60)                    | `ZERO_LOGGING`       |
//! | CV ≤ `FLATLINE_CV_BPS`        | `30 - completeness`                     | `FLATLINE_PATTERN`   |
//! | ≥ 80% of non-zero days equal  | `30 - completeness`                     | `FLATLINE_PATTERN`   |
//! | natural variance              | `45 + dispersion + completeness`        | —                    |
//! | identical non-zero day steps  | capped at `REGULAR_INCREMENT_SCORE_CAP` | `REGULAR_INCREMENTS` |
//!
//! `dispersion` is 0–40, `completeness` is 0–15.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::constants::{
    BPS_PRECISION, CML_PER_ML, COMPLETENESS_POINTS, DISPERSION_POINTS, DISPERSION_SATURATION_BPS,
    FLATLINE_CV_BPS, FLATLINE_DOMINANT_SHARE_BPS, FLATLINE_SCORE_CEILING, LOOKBACK_DAYS, MAX_SCORE, MIN_PATTERN_DAYS,
    MIN_SCORABLE_DAYS, NEUTRAL_SCORE, REGULAR_INCREMENT_SCORE_CAP, VARIANCE_SCORE_FLOOR,
};
use crate::error::ScoringError;
use crate::traits::HonestyScorer;
use crate::types::{DailyLogEntry, FlagCode, Honesty, HonestyAssessment, HonestyLevel};
use crate::window::ScoringWindow;

/// Score a user's raw log rows.
///
/// Builds a [`ScoringWindow`] (same-day rows summed, last
/// [`LOOKBACK_DAYS`] days kept) and scores it with [`WindowScorer`].
///
/// # Examples
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use noil_core::{compute_honesty, DailyLogEntry, FlagCode, HonestyLevel};
///
/// let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let rows: Vec<_> = (0..14)
///     .map(|i| DailyLogEntry::new(start + Duration::days(i), 40.0))
///     .collect();
///
/// let honesty = compute_honesty(&rows, 2).unwrap();
/// let a = honesty.assessment().unwrap();
/// assert_eq!(a.level, HonestyLevel::Low);
/// assert!(a.has_flag(FlagCode::FlatlinePattern));
/// ```
pub fn compute_honesty(
    entries: &[DailyLogEntry],
    household_size: u32,
) -> Result<Honesty, ScoringError> {
    WindowScorer::new().assess_entries(entries, household_size)
}

/// The production scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScorer;

impl WindowScorer {
    pub fn new() -> Self {
        Self
    }
}

impl HonestyScorer for WindowScorer {
    fn assess(&self, window: &ScoringWindow, household_size: u32) -> Result<Honesty, ScoringError> {
        if household_size == 0 {
            return Err(ScoringError::InvalidHouseholdSize(household_size));
        }

        let logged_days = window.len();
        if logged_days < MIN_SCORABLE_DAYS {
            debug!(logged_days, "honesty: insufficient data");
            return Ok(Honesty::InsufficientData { logged_days });
        }

        let amounts = per_person_cml(window, household_size);
        let mut flags = BTreeSet::new();

        let score = if logged_days < MIN_PATTERN_DAYS {
            NEUTRAL_SCORE
        } else if amounts.iter().all(|&a| a == 0) {
            flags.insert(FlagCode::ZeroLogging);
            NEUTRAL_SCORE
        } else {
            let stats = WindowStats::from_amounts(&amounts);
            let completeness = completeness_points(logged_days);

            let mut score = if stats.cv_bps <= FLATLINE_CV_BPS || has_dominant_value(&amounts) {
                flags.insert(FlagCode::FlatlinePattern);
                FLATLINE_SCORE_CEILING.saturating_sub(completeness)
            } else {
                VARIANCE_SCORE_FLOOR
                    .saturating_add(dispersion_points(stats.cv_bps))
                    .saturating_add(completeness)
            };

            if has_regular_increments(&amounts) {
                flags.insert(FlagCode::RegularIncrements);
                score = score.min(REGULAR_INCREMENT_SCORE_CAP);
            }

            debug!(
                logged_days,
                mean_cml = stats.mean,
                stddev_cml = stats.stddev,
                cv_bps = stats.cv_bps,
                score,
                "honesty: window statistics"
            );
            score
        };

        let score = score.min(MAX_SCORE);
        if !flags.is_empty() {
            debug!(score, ?flags, "honesty: anomaly flags raised");
        }

        Ok(Honesty::Assessed(HonestyAssessment {
            score,
            level: HonestyLevel::from_score(score),
            flags,
            logged_days,
        }))
    }
}

// ---------------------------------------------------------------------------
// Window statistics
// ---------------------------------------------------------------------------

/// Integer summary of per-person daily amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WindowStats {
    mean: u64,
    stddev: u64,
    /// `stddev / mean` in BPS. `0` when the sum is zero.
    cv_bps: u64,
}

impl WindowStats {
    fn from_amounts(amounts: &[u64]) -> Self {
        let n = amounts.len() as u128;
        if n == 0 {
            return Self { mean: 0, stddev: 0, cv_bps: 0 };
        }
        let sum = amounts.iter().fold(0u128, |acc, &a| acc.saturating_add(a as u128));
        let sum_squares = amounts
            .iter()
            .fold(0u128, |acc, &a| acc.saturating_add((a as u128).saturating_mul(a as u128)));

        // Population variance: (n * Σx² - (Σx)²) / n².
        let spread = n.saturating_mul(sum_squares).saturating_sub(sum.saturating_mul(sum));
        let variance = (spread / (n * n)).min(u64::MAX as u128) as u64;
        let stddev = isqrt(variance);

        let cv_bps = if sum == 0 {
            0
        } else {
            // stddev / (sum / n), scaled to BPS without truncating the mean first.
            ((stddev as u128) * (BPS_PRECISION as u128) * n / sum).min(u64::MAX as u128) as u64
        };

        Self {
            mean: (sum / n) as u64,
            stddev,
            cv_bps,
        }
    }
}

/// Per-person amounts in centi-millilitres, rounded to nearest.
fn per_person_cml(window: &ScoringWindow, household_size: u32) -> Vec<u64> {
    let household = f64::from(household_size);
    window
        .days()
        .iter()
        .map(|e| (e.amount_ml * CML_PER_ML / household).round() as u64)
        .collect()
}

/// `0..=COMPLETENESS_POINTS`, proportional to logged days over the lookback.
fn completeness_points(logged_days: usize) -> u8 {
    let days = (logged_days as u64).min(LOOKBACK_DAYS as u64);
    (days * COMPLETENESS_POINTS / LOOKBACK_DAYS as u64) as u8
}

/// `0..=DISPERSION_POINTS`, linear in CV up to saturation.
fn dispersion_points(cv_bps: u64) -> u8 {
    let cv = cv_bps.min(DISPERSION_SATURATION_BPS);
    (cv * DISPERSION_POINTS / DISPERSION_SATURATION_BPS) as u8
}

/// `true` when every day-over-day change is the same non-zero step.
fn has_regular_increments(amounts: &[u64]) -> bool {
    if amounts.len() < MIN_PATTERN_DAYS {
        return false;
    }
    let step = amounts[1] as i128 - amounts[0] as i128;
    step != 0
        && amounts
            .windows(2)
            .all(|pair| pair[1] as i128 - pair[0] as i128 == step)
}

/// `true` when a single per-person amount covers at least
/// [`FLATLINE_DOMINANT_SHARE_BPS`] of the non-zero days. Catches flatlines
/// broken up by the odd skipped or outlier day.
fn has_dominant_value(amounts: &[u64]) -> bool {
    let mut counts: BTreeMap<u64, u64> = BTreeMap::new();
    for &a in amounts.iter().filter(|&&a| a != 0) {
        *counts.entry(a).or_default() += 1;
    }
    let non_zero: u64 = counts.values().sum();
    if non_zero < MIN_PATTERN_DAYS as u64 {
        return false;
    }
    let top = counts.values().copied().max().unwrap_or(0);
    top * BPS_PRECISION >= non_zero * FLATLINE_DOMINANT_SHARE_BPS
}

/// Compute `floor(sqrt(n))` using Newton's method from an overestimate.
fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let bits = 64 - n.leading_zeros();
    let mut x = 1u64 << bits.div_ceil(2);
    loop {
        let x_next = (x + n / x) / 2;
        if x_next >= x {
            return x;
        }
        x = x_next;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
