//! Core data types: log entries, assessments, point adjustments.
//!
//! Everything here is a plain value. Nothing is persisted by this crate;
//! all types derive serde so callers can store them.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{HIGH_BAND_MIN, LOW_BAND_MAX};

/// One logged amount of cooking oil.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DailyLogEntry {
    pub date: NaiveDate,
    pub amount_ml: f64,
}

impl DailyLogEntry {
    pub fn new(date: NaiveDate, amount_ml: f64) -> Self {
        Self { date, amount_ml }
    }
}

/// Discrete banding of the honesty score.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum HonestyLevel {
    Low,
    Medium,
    High,
}

impl HonestyLevel {
    /// Band a score.
    ///
    /// | Score   | Level  |
    /// |---------|--------|
    /// | 75–100  | High   |
    /// | 45–74   | Medium |
    /// | 0–44    | Low    |
    ///
    /// # Examples
    ///
    /// ```
    /// use noil_core::types::HonestyLevel;
    ///
    /// assert_eq!(HonestyLevel::from_score(100), HonestyLevel::High);
    /// assert_eq!(HonestyLevel::from_score(75), HonestyLevel::High);
    /// assert_eq!(HonestyLevel::from_score(74), HonestyLevel::Medium);
    /// assert_eq!(HonestyLevel::from_score(45), HonestyLevel::Medium);
    /// assert_eq!(HonestyLevel::from_score(44), HonestyLevel::Low);
    /// assert_eq!(HonestyLevel::from_score(0), HonestyLevel::Low);
    /// ```
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= HIGH_BAND_MIN => Self::High,
            s if s <= LOW_BAND_MAX => Self::Low,
            _ => Self::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for HonestyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anomaly codes raised while scoring a window. Not mutually exclusive.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagCode {
    /// Non-zero amounts that are identical or near-identical every day.
    FlatlinePattern,
    /// Day-over-day changes that are all the same non-zero step.
    RegularIncrements,
    /// Every logged day is zero.
    ZeroLogging,
}

impl FlagCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FlatlinePattern => "FLATLINE_PATTERN",
            Self::RegularIncrements => "REGULAR_INCREMENTS",
            Self::ZeroLogging => "ZERO_LOGGING",
        }
    }
}

impl fmt::Display for FlagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a window with enough data.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HonestyAssessment {
    /// Habit Stability Score, 0–100.
    pub score: u8,
    /// Always `HonestyLevel::from_score(score)`.
    pub level: HonestyLevel,
    pub flags: BTreeSet<FlagCode>,
    /// Distinct days that contributed to the score.
    pub logged_days: usize,
}

impl HonestyAssessment {
    pub fn has_flag(&self, flag: FlagCode) -> bool {
        self.flags.contains(&flag)
    }
}

/// Outcome of a scoring invocation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Honesty {
    Assessed(HonestyAssessment),
    /// Too few logged days to judge. Callers pick the fallback; see
    /// [`Honesty::multiplier`](crate::reward) for the standard one.
    InsufficientData { logged_days: usize },
}

impl Honesty {
    pub fn assessment(&self) -> Option<&HonestyAssessment> {
        match self {
            Self::Assessed(a) => Some(a),
            Self::InsufficientData { .. } => None,
        }
    }

    pub fn level(&self) -> Option<HonestyLevel> {
        self.assessment().map(|a| a.level)
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

/// Points after a reward multiplier has been applied.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointsAdjustment {
    pub final_points: u64,
    /// `final_points - base_points`; negative under the reduced multiplier.
    pub bonus: i64,
    pub multiplier_applied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries() {
        for s in 0..=LOW_BAND_MAX {
            assert_eq!(HonestyLevel::from_score(s), HonestyLevel::Low, "score={s}");
        }
        for s in (LOW_BAND_MAX + 1)..HIGH_BAND_MIN {
            assert_eq!(HonestyLevel::from_score(s), HonestyLevel::Medium, "score={s}");
        }
        for s in HIGH_BAND_MIN..=100 {
            assert_eq!(HonestyLevel::from_score(s), HonestyLevel::High, "score={s}");
        }
    }

    #[test]
    fn flag_serializes_screaming_snake() {
        let json = serde_json::to_string(&FlagCode::FlatlinePattern).unwrap();
        assert_eq!(json, "\"FLATLINE_PATTERN\"");
        assert_eq!(FlagCode::ZeroLogging.to_string(), "ZERO_LOGGING");
    }

    #[test]
    fn level_serializes_lowercase() {
        let json = serde_json::to_string(&HonestyLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn honesty_serde_roundtrip() {
        let honesty = Honesty::Assessed(HonestyAssessment {
            score: 15,
            level: HonestyLevel::Low,
            flags: BTreeSet::from([FlagCode::FlatlinePattern]),
            logged_days: 14,
        });
        let json = serde_json::to_string(&honesty).unwrap();
        assert!(json.contains("\"status\":\"assessed\""));
        let decoded: Honesty = serde_json::from_str(&json).unwrap();
        assert_eq!(honesty, decoded);
    }

    #[test]
    fn insufficient_data_has_no_level() {
        let honesty = Honesty::InsufficientData { logged_days: 1 };
        assert!(honesty.is_insufficient());
        assert_eq!(honesty.level(), None);
    }

    #[test]
    fn log_entry_parses_from_json() {
        let entry: DailyLogEntry =
            serde_json::from_str(r#"{"date":"2026-03-01","amount_ml":42.5}"#).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(entry.amount_ml, 42.5);
    }
}
