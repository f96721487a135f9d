//! Scoring window construction.
//!
//! Raw log rows may arrive unordered and with several rows per day. The
//! window sums same-day rows, orders days ascending and keeps only the
//! [`LOOKBACK_DAYS`] calendar days ending at the latest logged date.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{LOOKBACK_DAYS, MAX_DAILY_AMOUNT_ML};
use crate::error::ScoringError;
use crate::types::DailyLogEntry;

/// One value per calendar day, ascending by date.
///
/// # Invariants
///
/// * dates are strictly increasing
/// * every amount is finite, non-negative and at most [`MAX_DAILY_AMOUNT_ML`]
/// * `last_date - first_date < LOOKBACK_DAYS`
///
/// Deserialization goes through [`ScoringWindow::build`], so a decoded
/// window upholds the same invariants.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(try_from = "WindowRepr")]
pub struct ScoringWindow {
    days: Vec<DailyLogEntry>,
}

#[derive(Deserialize)]
struct WindowRepr {
    days: Vec<DailyLogEntry>,
}

impl TryFrom<WindowRepr> for ScoringWindow {
    type Error = ScoringError;

    fn try_from(repr: WindowRepr) -> Result<Self, Self::Error> {
        Self::build(&repr.days)
    }
}

impl ScoringWindow {
    /// Build a window from raw log rows. The input is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use noil_core::{DailyLogEntry, ScoringWindow};
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
    /// let rows = [
    ///     DailyLogEntry::new(d(2), 10.0),
    ///     DailyLogEntry::new(d(1), 30.0),
    ///     DailyLogEntry::new(d(2), 15.0),
    /// ];
    /// let w = ScoringWindow::build(&rows).unwrap();
    /// assert_eq!(w.len(), 2);
    /// assert_eq!(w.days()[1].amount_ml, 25.0);
    /// ```
    pub fn build(entries: &[DailyLogEntry]) -> Result<Self, ScoringError> {
        let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for entry in entries {
            let amount = entry.amount_ml;
            if !amount.is_finite() || amount < 0.0 || amount > MAX_DAILY_AMOUNT_ML {
                warn!(date = %entry.date, amount, "window: rejecting log entry");
                return Err(ScoringError::InvalidAmount { date: entry.date, amount });
            }
            let total = per_day.entry(entry.date).or_insert(0.0);
            *total += amount;
            if *total > MAX_DAILY_AMOUNT_ML {
                warn!(date = %entry.date, total = *total, "window: daily total too large");
                return Err(ScoringError::InvalidAmount { date: entry.date, amount: *total });
            }
        }

        let Some(&latest) = per_day.keys().next_back() else {
            return Ok(Self::default());
        };
        let earliest_kept = latest - Duration::days(LOOKBACK_DAYS - 1);

        let days = per_day
            .range(earliest_kept..)
            .map(|(&date, &amount_ml)| DailyLogEntry { date, amount_ml })
            .collect();

        Ok(Self { days })
    }

    pub fn days(&self) -> &[DailyLogEntry] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|e| e.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|e| e.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    #[test]
    fn empty_input_gives_empty_window() {
        let w = ScoringWindow::build(&[]).unwrap();
        assert!(w.is_empty());
        assert_eq!(w.first_date(), None);
    }

    #[test]
    fn sorts_ascending() {
        let rows = [
            DailyLogEntry::new(d(5), 1.0),
            DailyLogEntry::new(d(3), 2.0),
            DailyLogEntry::new(d(4), 3.0),
        ];
        let w = ScoringWindow::build(&rows).unwrap();
        let dates: Vec<_> = w.days().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![d(3), d(4), d(5)]);
    }

    #[test]
    fn sums_same_day_entries() {
        let rows = [
            DailyLogEntry::new(d(1), 20.0),
            DailyLogEntry::new(d(1), 22.5),
        ];
        let w = ScoringWindow::build(&rows).unwrap();
        assert_eq!(w.len(), 1);
        assert_eq!(w.days()[0].amount_ml, 42.5);
    }

    #[test]
    fn keeps_only_lookback_days() {
        // Days 1..=20; latest is 20, so 7..=20 survive.
        let rows: Vec<_> = (1..=20).map(|day| DailyLogEntry::new(d(day), 40.0)).collect();
        let w = ScoringWindow::build(&rows).unwrap();
        assert_eq!(w.len(), LOOKBACK_DAYS as usize);
        assert_eq!(w.first_date(), Some(d(7)));
        assert_eq!(w.last_date(), Some(d(20)));
    }

    #[test]
    fn gaps_count_against_lookback() {
        // Day 1 is 14 days before day 15 and falls outside the window.
        let rows = [DailyLogEntry::new(d(1), 5.0), DailyLogEntry::new(d(15), 5.0)];
        let w = ScoringWindow::build(&rows).unwrap();
        assert_eq!(w.len(), 1);
        assert_eq!(w.first_date(), Some(d(15)));
    }

    #[test]
    fn rejects_negative_amount() {
        let rows = [DailyLogEntry::new(d(1), 10.0), DailyLogEntry::new(d(2), -1.0)];
        let err = ScoringWindow::build(&rows).unwrap_err();
        assert_eq!(err, ScoringError::InvalidAmount { date: d(2), amount: -1.0 });
    }

    #[test]
    fn rejects_non_finite_amount() {
        let rows = [DailyLogEntry::new(d(1), f64::INFINITY)];
        assert!(matches!(
            ScoringWindow::build(&rows),
            Err(ScoringError::InvalidAmount { .. })
        ));
        let rows = [DailyLogEntry::new(d(1), f64::NAN)];
        assert!(ScoringWindow::build(&rows).is_err());
    }

    #[test]
    fn rejects_implausibly_large_amount() {
        let rows = [DailyLogEntry::new(d(1), 1e18)];
        assert_eq!(
            ScoringWindow::build(&rows).unwrap_err(),
            ScoringError::InvalidAmount { date: d(1), amount: 1e18 }
        );
        let rows = [DailyLogEntry::new(d(1), MAX_DAILY_AMOUNT_ML)];
        assert_eq!(ScoringWindow::build(&rows).unwrap().len(), 1);
    }

    #[test]
    fn rejects_daily_total_over_limit() {
        let rows = [
            DailyLogEntry::new(d(3), 60_000.0),
            DailyLogEntry::new(d(3), 60_000.0),
        ];
        assert_eq!(
            ScoringWindow::build(&rows).unwrap_err(),
            ScoringError::InvalidAmount { date: d(3), amount: 120_000.0 }
        );
    }

    #[test]
    fn deserializing_rebuilds_the_window() {
        let json = r#"{"days":[
            {"date":"2026-03-02","amount_ml":10.0},
            {"date":"2026-03-01","amount_ml":30.0},
            {"date":"2026-03-02","amount_ml":5.0}
        ]}"#;
        let w: ScoringWindow = serde_json::from_str(json).unwrap();
        assert_eq!(w.len(), 2);
        assert_eq!(w.first_date(), Some(d(1)));
        assert_eq!(w.days()[1].amount_ml, 15.0);

        let roundtrip: ScoringWindow =
            serde_json::from_str(&serde_json::to_string(&w).unwrap()).unwrap();
        assert_eq!(roundtrip, w);
    }

    #[test]
    fn deserializing_rejects_invalid_amounts() {
        let json = r#"{"days":[{"date":"2026-03-01","amount_ml":-4.0}]}"#;
        assert!(serde_json::from_str::<ScoringWindow>(json).is_err());
    }

    #[test]
    fn input_is_untouched() {
        let rows = vec![DailyLogEntry::new(d(2), 1.0), DailyLogEntry::new(d(1), 2.0)];
        let before = rows.clone();
        let _ = ScoringWindow::build(&rows).unwrap();
        assert_eq!(rows, before);
    }
}
