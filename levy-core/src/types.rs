//! Common data structures shared across the levy ecosystem.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::LevyError;
use crate::calendar::WeeklyWindow;

/// Identifier of a tracked land in the upstream game system.
///
/// Lands are program configuration, not discovered dynamically: the
/// aggregator queries every configured land for every weekly window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandId(String);

impl LandId {
    /// Wrap a raw upstream land identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier as sent to the upstream API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LandId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier of a kingdom (player/guild unit) as reported by the upstream
/// API. Upstream sometimes reports these as JSON numbers; connectors coerce
/// them to strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KingdomId(String);

impl KingdomId {
    /// Wrap a raw kingdom identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KingdomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KingdomId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One kingdom's contribution total for a single (land, weekly window)
/// query, as returned by a provider before the aggregator stamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KingdomTotal {
    /// Kingdom the total belongs to.
    pub kingdom_id: KingdomId,
    /// Contribution points for the window.
    pub total: f64,
    /// Display name; providers substitute a placeholder when absent upstream.
    pub name: String,
    /// Continent number; zero when absent upstream.
    pub continent: i32,
}

/// A provider row stamped with the weekly window it was queried for and the
/// land it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRecord {
    /// Kingdom the total belongs to.
    pub kingdom_id: KingdomId,
    /// Contribution points for the window.
    pub total: f64,
    /// Display name of the kingdom.
    pub name: String,
    /// Continent number.
    pub continent: i32,
    /// Start (Sunday) of the weekly window this total covers.
    pub date: NaiveDate,
    /// Land the contribution was collected on.
    pub land_id: LandId,
}

impl ContributionRecord {
    /// Stamp a raw provider row with its window and land of origin.
    #[must_use]
    pub fn stamp(row: KingdomTotal, window: WeeklyWindow, land_id: LandId) -> Self {
        Self {
            kingdom_id: row.kingdom_id,
            total: row.total,
            name: row.name,
            continent: row.continent,
            date: window.start(),
            land_id,
        }
    }

    /// The weekly window this record covers.
    #[must_use]
    pub fn window(&self) -> WeeklyWindow {
        WeeklyWindow::starting(self.date)
    }
}

/// Outcome of a single (weekly window, land) upstream query.
///
/// Pair failures are absorbed during aggregation; this is where they end up,
/// so operators can distinguish "upstream down" from "genuinely zero
/// contributions this period".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairOutcome {
    /// Land the pair queried.
    pub land_id: LandId,
    /// Weekly window the pair queried.
    pub window: WeeklyWindow,
    /// Number of valid rows the pair contributed.
    pub records: usize,
    /// The absorbed failure, if the pair did not succeed.
    pub error: Option<LevyError>,
}

impl PairOutcome {
    /// Whether the pair's upstream call succeeded (possibly with zero rows).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Final aggregation output.
///
/// `from`/`to` echo the originally requested reporting range, never the
/// expanded window boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionReport {
    /// Contribution records whose windows overlap the requested range.
    pub data: Vec<ContributionRecord>,
    /// Start of the originally requested range (inclusive, UTC).
    pub from: NaiveDate,
    /// End of the originally requested range (inclusive, UTC).
    pub to: NaiveDate,
    /// Per-pair fetch outcomes, in no contractual order.
    pub pairs: Vec<PairOutcome>,
}

impl ContributionReport {
    /// Number of pairs whose upstream call failed and was absorbed.
    #[must_use]
    pub fn failed_pairs(&self) -> usize {
        self.pairs.iter().filter(|p| !p.is_ok()).count()
    }
}
