//! Scoring constants. Amounts are in centi-millilitres per person
//! (1 ml = 100 cml) once inside the scorer.

/// Calendar days covered by a scoring window, ending at the latest log.
pub const LOOKBACK_DAYS: i64 = 14;

/// Fewer logged days than this yields [`Honesty::InsufficientData`](crate::types::Honesty).
pub const MIN_SCORABLE_DAYS: usize = 3;

/// Minimum logged days before pattern detection (flatline, regular
/// increments) is trusted. Shorter windows get [`NEUTRAL_SCORE`].
pub const MIN_PATTERN_DAYS: usize = 5;

/// Centi-millilitres per millilitre. Per-person amounts are rounded to
/// whole cml, so a day below half a cml per person (0.005 ml) counts as
/// zero: a window of such trace logs is scored as [`ZERO_LOGGING`].
///
/// [`ZERO_LOGGING`]: crate::types::FlagCode::ZeroLogging
pub const CML_PER_ML: f64 = 100.0;

/// Largest accepted total for one household day (100 litres). Keeps every
/// per-person cml value and its square well inside integer range.
pub const MAX_DAILY_AMOUNT_ML: f64 = 100_000.0;

/// Basis-point precision: 10 000 BPS = 1.0×.
pub const BPS_PRECISION: u64 = 10_000;

// ---------------------------------------------------------------------------
// Score bands
// ---------------------------------------------------------------------------

/// Maximum honesty score.
pub const MAX_SCORE: u8 = 100;

/// Highest score still classified as [`HonestyLevel::Low`](crate::types::HonestyLevel).
pub const LOW_BAND_MAX: u8 = 44;

/// Lowest score classified as [`HonestyLevel::High`](crate::types::HonestyLevel).
pub const HIGH_BAND_MIN: u8 = 75;

/// Score assigned when there is too little data, or an all-zero window,
/// to judge patterns. Sits inside the medium band.
pub const NEUTRAL_SCORE: u8 = 60;

// ---------------------------------------------------------------------------
// Flatline detection
// ---------------------------------------------------------------------------

/// Coefficient of variation (stddev / mean, in BPS) at or below which a
/// window is treated as a flatline. 200 BPS = 2%.
pub const FLATLINE_CV_BPS: u64 = 200;

/// Share of non-zero days (BPS) that, when all logged with the same
/// per-person amount, flags a flatline even if a few outlier days push
/// the CV above [`FLATLINE_CV_BPS`]. 8 000 BPS = 80%.
pub const FLATLINE_DOMINANT_SHARE_BPS: u64 = 8_000;

/// Upper bound on the score of a flatlined window. Completeness is
/// subtracted from it, so longer flatlines score lower.
pub const FLATLINE_SCORE_CEILING: u8 = 30;

/// Upper bound on the score when day-over-day changes are all identical.
pub const REGULAR_INCREMENT_SCORE_CAP: u8 = 40;

// ---------------------------------------------------------------------------
// Natural-variance scoring
// ---------------------------------------------------------------------------

/// Floor of the score for windows with natural variance.
pub const VARIANCE_SCORE_FLOOR: u8 = 45;

/// Points available for dispersion.
pub const DISPERSION_POINTS: u64 = 40;

/// CV (BPS) at which dispersion earns all of [`DISPERSION_POINTS`].
pub const DISPERSION_SATURATION_BPS: u64 = 1_500;

/// Points available for window completeness (logged days / lookback).
pub const COMPLETENESS_POINTS: u64 = 15;

// ---------------------------------------------------------------------------
// Reward multipliers
// ---------------------------------------------------------------------------

/// 1.2× for high honesty.
pub const BOOST_MULTIPLIER_BPS: u64 = 12_000;

/// 1.0× for medium honesty.
pub const STANDARD_MULTIPLIER_BPS: u64 = 10_000;

/// 0.5× for low honesty.
pub const REDUCED_MULTIPLIER_BPS: u64 = 5_000;
