//! # noil-core
//! Honesty scoring and reward multipliers for household oil-consumption logs.
//!
//! Pure computation: no storage, no IO, no randomness. Log amounts are
//! converted to integer centi-millilitres per person before any statistics
//! are taken, so every result is deterministic.
//!
//! Pipeline:
//! - [`window::ScoringWindow`] aggregates raw [`types::DailyLogEntry`] rows
//!   into one value per day over the lookback period.
//! - [`honesty`] detects suspicious patterns and derives a 0–100 score and
//!   a [`types::HonestyLevel`].
//! - [`reward`] maps the level onto a [`reward::RewardMultiplier`] and
//!   applies it to base points.

pub mod constants;
pub mod error;
pub mod honesty;
pub mod reward;
pub mod traits;
pub mod types;
pub mod window;

pub use error::{NoilError, ScoringError};
pub use honesty::{compute_honesty, WindowScorer};
pub use reward::{calculate_total_points, multiplier_for_level, RewardMultiplier};
pub use traits::HonestyScorer;
pub use types::{DailyLogEntry, FlagCode, Honesty, HonestyAssessment, HonestyLevel, PointsAdjustment};
pub use window::ScoringWindow;
