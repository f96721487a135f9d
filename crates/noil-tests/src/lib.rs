//! Scenario and property test suite for Noil scoring.
//!
//! Integration tests live under `tests/` and drive the public API of
//! `noil-core` and `noil-compare` end to end: raw rows in, assessments,
//! multipliers, point adjustments and standings out.

pub mod helpers;
