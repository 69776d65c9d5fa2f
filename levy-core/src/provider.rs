use async_trait::async_trait;

use crate::LevyError;
use crate::calendar::WeeklyWindow;
use crate::types::{KingdomTotal, LandId};

/// Contract implemented by upstream contribution sources.
///
/// The aggregator issues one call per (weekly window, land) pair and treats
/// each call independently: a failing pair never aborts the batch. The
/// upstream API only understands Sunday-aligned 7-day windows, which is why
/// the unit of fetch is a window rather than an arbitrary date range.
#[async_trait]
pub trait ContributionProvider: Send + Sync {
    /// A stable identifier used in logs and error tagging
    /// (e.g. "levy-lok").
    fn name(&self) -> &'static str;

    /// Fetch per-kingdom contribution totals for one land over one weekly
    /// window.
    ///
    /// Returning an empty vector is the normal "no data for this pair"
    /// outcome and is not an error.
    ///
    /// # Errors
    /// Implementations return `LevyError::Provider`, `LevyError::Status`, or
    /// `LevyError::Decode` for transport failures, non-success responses,
    /// and unparseable bodies respectively. Callers absorb these per pair.
    async fn land_contributions(
        &self,
        land: &LandId,
        window: WeeklyWindow,
    ) -> Result<Vec<KingdomTotal>, LevyError>;
}
