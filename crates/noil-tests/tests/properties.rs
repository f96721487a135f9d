//! Property-based tests for scoring and reward invariants.
//!
//! Each property runs under proptest shrinking so a failure reports the
//! smallest log window or point value that breaks it.

use proptest::prelude::*;

use noil_core::reward::apply_reward_multiplier;
use noil_core::{
    calculate_total_points, compute_honesty, multiplier_for_level, FlagCode, Honesty,
    HonestyLevel, RewardMultiplier,
};
use noil_tests::helpers::{expect_assessed, flat_series, series};

fn any_multiplier() -> impl Strategy<Value = RewardMultiplier> {
    prop_oneof![
        Just(RewardMultiplier::Reduced),
        Just(RewardMultiplier::Standard),
        Just(RewardMultiplier::Boost),
    ]
}

fn any_level() -> impl Strategy<Value = HonestyLevel> {
    prop_oneof![
        Just(HonestyLevel::Low),
        Just(HonestyLevel::Medium),
        Just(HonestyLevel::High),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // --- honesty scorer ---

    #[test]
    fn score_in_range_and_level_matches_band(
        amounts in prop::collection::vec(0.0f64..250.0, 0..20),
        household in 1u32..8,
    ) {
        let rows = series(&amounts);
        match compute_honesty(&rows, household).unwrap() {
            Honesty::Assessed(a) => {
                prop_assert!(a.score <= 100);
                prop_assert_eq!(a.level, HonestyLevel::from_score(a.score));
                prop_assert!(a.logged_days >= 3 && a.logged_days <= 14);
            }
            Honesty::InsufficientData { logged_days } => {
                prop_assert!(logged_days < 3);
            }
        }
    }

    #[test]
    fn constant_window_is_flatline(
        days in 5usize..=14,
        amount in 1.0f64..500.0,
        household in 1u32..8,
    ) {
        let a = expect_assessed(compute_honesty(&flat_series(days, amount), household).unwrap());
        prop_assert!(a.has_flag(FlagCode::FlatlinePattern));
        prop_assert_eq!(a.level, HonestyLevel::Low);
        prop_assert!(a.score <= 50);
    }

    #[test]
    fn scoring_is_idempotent_and_pure(
        amounts in prop::collection::vec(0.0f64..250.0, 0..20),
        household in 1u32..8,
    ) {
        let rows = series(&amounts);
        let before = rows.clone();
        let first = compute_honesty(&rows, household).unwrap();
        let second = compute_honesty(&rows, household).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(rows, before);
    }

    #[test]
    fn flagged_windows_never_score_high(
        amounts in prop::collection::vec(0.0f64..250.0, 5..20),
        household in 1u32..8,
    ) {
        if let Honesty::Assessed(a) = compute_honesty(&series(&amounts), household).unwrap() {
            if a.has_flag(FlagCode::FlatlinePattern) || a.has_flag(FlagCode::RegularIncrements) {
                prop_assert_eq!(a.level, HonestyLevel::Low);
            }
        }
    }

    // --- reward engine ---

    #[test]
    fn multiplier_matches_round_half_up(
        base in 0u64..1_000_000,
        m in any_multiplier(),
    ) {
        let expected = (base as f64 * m.factor()).round() as u64;
        prop_assert_eq!(apply_reward_multiplier(base, m), expected);
    }

    #[test]
    fn totals_are_consistent(
        base in 0u64..10_000_000,
        m in any_multiplier(),
    ) {
        let adj = calculate_total_points(base, m);
        prop_assert_eq!(adj.final_points, apply_reward_multiplier(base, m));
        prop_assert_eq!(adj.bonus, adj.final_points as i64 - base as i64);
        prop_assert_eq!(adj.multiplier_applied, m != RewardMultiplier::Standard);
    }

    #[test]
    fn better_level_never_earns_less(
        base in 0u64..1_000_000,
        a in any_level(),
        b in any_level(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_points = apply_reward_multiplier(base, multiplier_for_level(lo));
        let hi_points = apply_reward_multiplier(base, multiplier_for_level(hi));
        prop_assert!(lo_points <= hi_points);
    }

    #[test]
    fn factor_roundtrip(m in any_multiplier()) {
        prop_assert_eq!(RewardMultiplier::from_factor(m.factor()).unwrap(), m);
    }
}
