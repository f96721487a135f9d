//! Reward multipliers and point adjustment.
//!
//! Multipliers are held in basis points (10 000 BPS = 1.0×) so that point
//! arithmetic is integer-only and rounding is exact:
//!
//! | Level  | Multiplier | BPS    | Description                        |
//! |--------|------------|--------|------------------------------------|
//! | High   | 1.2×       | 12,000 | "+20% Honesty Boost"               |
//! | Medium | 1.0×       | 10,000 | —                                  |
//! | Low    | 0.5×       | 5,000  | "Reduced (improve logging habits)" |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BOOST_MULTIPLIER_BPS, BPS_PRECISION, REDUCED_MULTIPLIER_BPS, STANDARD_MULTIPLIER_BPS,
};
use crate::error::ScoringError;
use crate::types::{Honesty, HonestyLevel, PointsAdjustment};

/// Tolerance used when matching a raw factor against the closed set.
const FACTOR_EPSILON: f64 = 1e-9;

/// The closed set of reward multipliers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RewardMultiplier {
    /// 0.5×
    Reduced,
    /// 1.0×
    Standard,
    /// 1.2×
    Boost,
}

impl RewardMultiplier {
    /// Multiplier in basis points.
    pub fn bps(&self) -> u64 {
        match self {
            Self::Reduced => REDUCED_MULTIPLIER_BPS,
            Self::Standard => STANDARD_MULTIPLIER_BPS,
            Self::Boost => BOOST_MULTIPLIER_BPS,
        }
    }

    /// Multiplier as a plain factor (0.5, 1.0 or 1.2).
    pub fn factor(&self) -> f64 {
        self.bps() as f64 / BPS_PRECISION as f64
    }

    /// Parse a raw factor. Anything outside {0.5, 1.0, 1.2} is a caller bug
    /// and is rejected rather than clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use noil_core::RewardMultiplier;
    ///
    /// assert_eq!(RewardMultiplier::from_factor(1.2).unwrap(), RewardMultiplier::Boost);
    /// assert!(RewardMultiplier::from_factor(1.5).is_err());
    /// ```
    pub fn from_factor(factor: f64) -> Result<Self, ScoringError> {
        [Self::Reduced, Self::Standard, Self::Boost]
            .into_iter()
            .find(|m| (m.factor() - factor).abs() < FACTOR_EPSILON)
            .ok_or(ScoringError::InvalidMultiplier(factor))
    }

    /// User-facing label; `None` for the standard multiplier.
    pub fn description(&self) -> Option<&'static str> {
        match self {
            Self::Boost => Some("+20% Honesty Boost"),
            Self::Reduced => Some("Reduced (improve logging habits)"),
            Self::Standard => None,
        }
    }

    pub fn is_standard(&self) -> bool {
        matches!(self, Self::Standard)
    }
}

impl TryFrom<f64> for RewardMultiplier {
    type Error = ScoringError;

    fn try_from(factor: f64) -> Result<Self, Self::Error> {
        Self::from_factor(factor)
    }
}

impl fmt::Display for RewardMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.factor())
    }
}

/// Map an honesty level to its multiplier.
pub fn multiplier_for_level(level: HonestyLevel) -> RewardMultiplier {
    match level {
        HonestyLevel::High => RewardMultiplier::Boost,
        HonestyLevel::Medium => RewardMultiplier::Standard,
        HonestyLevel::Low => RewardMultiplier::Reduced,
    }
}

impl Honesty {
    /// Multiplier for an assessed window; [`RewardMultiplier::Standard`]
    /// when there was not enough data to judge.
    pub fn multiplier(&self) -> RewardMultiplier {
        self.level()
            .map(multiplier_for_level)
            .unwrap_or(RewardMultiplier::Standard)
    }
}

/// `round(base_points × multiplier)` with round-half-up.
///
/// Integer-only: `(base × bps + 5 000) / 10 000` in u128, saturating at
/// `u64::MAX`.
///
/// # Examples
///
/// ```
/// use noil_core::reward::apply_reward_multiplier;
/// use noil_core::RewardMultiplier::{Boost, Reduced};
///
/// assert_eq!(apply_reward_multiplier(7, Boost), 8);    // 8.4
/// assert_eq!(apply_reward_multiplier(3, Boost), 4);    // 3.6
/// assert_eq!(apply_reward_multiplier(11, Reduced), 6); // 5.5
/// assert_eq!(apply_reward_multiplier(3, Reduced), 2);  // 1.5
/// ```
pub fn apply_reward_multiplier(base_points: u64, multiplier: RewardMultiplier) -> u64 {
    let precision = BPS_PRECISION as u128;
    let scaled = (base_points as u128) * (multiplier.bps() as u128) + precision / 2;
    (scaled / precision).min(u64::MAX as u128) as u64
}

/// Apply `multiplier` to `base_points` and report the bonus.
///
/// # Examples
///
/// ```
/// use noil_core::{calculate_total_points, RewardMultiplier};
///
/// let adj = calculate_total_points(100, RewardMultiplier::Reduced);
/// assert_eq!(adj.final_points, 50);
/// assert_eq!(adj.bonus, -50);
/// assert!(adj.multiplier_applied);
/// ```
pub fn calculate_total_points(base_points: u64, multiplier: RewardMultiplier) -> PointsAdjustment {
    let final_points = apply_reward_multiplier(base_points, multiplier);
    let bonus = (final_points as i128 - base_points as i128)
        .clamp(i64::MIN as i128, i64::MAX as i128) as i64;
    PointsAdjustment {
        final_points,
        bonus,
        multiplier_applied: !multiplier.is_standard(),
    }
}
