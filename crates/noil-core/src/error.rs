//! Error types for Noil.
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("invalid amount on {date}: {amount} ml")] InvalidAmount { date: NaiveDate, amount: f64 },
    #[error("household size must be at least 1, got {0}")] InvalidHouseholdSize(u32),
    #[error("invalid reward multiplier: {0} (expected 0.5, 1.0 or 1.2)")] InvalidMultiplier(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompareError {
    #[error("empty population")] EmptyPopulation,
    #[error("invalid consumption value: {0}")] InvalidValue(f64),
    #[error("quantile out of range: {0}")] QuantileOutOfRange(f64),
}

#[derive(Error, Debug)]
pub enum NoilError {
    #[error(transparent)] Scoring(#[from] ScoringError),
    #[error(transparent)] Compare(#[from] CompareError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_error_kinds() {
        let e: NoilError = ScoringError::InvalidHouseholdSize(0).into();
        assert_eq!(e.to_string(), "household size must be at least 1, got 0");
        let e: NoilError = CompareError::EmptyPopulation.into();
        assert!(matches!(e, NoilError::Compare(CompareError::EmptyPopulation)));
    }

    #[test]
    fn invalid_amount_message_names_the_day() {
        let e = ScoringError::InvalidAmount {
            date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            amount: -2.5,
        };
        assert_eq!(e.to_string(), "invalid amount on 2026-03-04: -2.5 ml");
    }
}
