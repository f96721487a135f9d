//! Shared log builders for scenario and property tests.

use chrono::{Duration, NaiveDate};
use noil_core::{DailyLogEntry, Honesty, HonestyAssessment};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// First day of every generated series.
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
}

/// One entry per consecutive day, starting at [`start_date`].
pub fn series(amounts: &[f64]) -> Vec<DailyLogEntry> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, &a)| DailyLogEntry::new(start_date() + Duration::days(i as i64), a))
        .collect()
}

/// `days` identical entries of `amount_ml`.
pub fn flat_series(days: usize, amount_ml: f64) -> Vec<DailyLogEntry> {
    series(&vec![amount_ml; days])
}

/// `days` whole-millilitre entries drawn uniformly from `lo..=hi`,
/// deterministic for a given `seed`.
pub fn random_series(seed: u64, days: usize, lo: u32, hi: u32) -> Vec<DailyLogEntry> {
    let mut rng = StdRng::seed_from_u64(seed);
    let amounts: Vec<f64> = (0..days).map(|_| f64::from(rng.gen_range(lo..=hi))).collect();
    series(&amounts)
}

/// Unwrap an assessed outcome.
pub fn expect_assessed(honesty: Honesty) -> HonestyAssessment {
    match honesty {
        Honesty::Assessed(a) => a,
        other => panic!("expected an assessment, got {other:?}"),
    }
}
