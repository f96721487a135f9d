//! Trait seam between request handlers and the scoring implementation.

use crate::error::ScoringError;
use crate::types::{DailyLogEntry, Honesty};
use crate::window::ScoringWindow;

/// Scores a household's logging window.
///
/// Implementations must be pure: the same window and household size always
/// produce the same [`Honesty`]. `Send + Sync` so one scorer can be shared
/// by concurrent callers.
pub trait HonestyScorer: Send + Sync {
    /// Score an already-built window.
    fn assess(&self, window: &ScoringWindow, household_size: u32) -> Result<Honesty, ScoringError>;

    /// Build the window from raw log rows, then score it.
    ///
    /// Default implementation delegates to [`ScoringWindow::build`] and
    /// [`assess`](Self::assess).
    fn assess_entries(
        &self,
        entries: &[DailyLogEntry],
        household_size: u32,
    ) -> Result<Honesty, ScoringError> {
        let window = ScoringWindow::build(entries)?;
        self.assess(&window, household_size)
    }
}
