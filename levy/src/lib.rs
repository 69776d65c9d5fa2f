//! Levy aggregates guild land-contribution statistics from an upstream
//! provider into per-period reports.
//!
//! Overview
//! - Resolves a human-selected reporting period into a concrete UTC date
//!   range (never including the current, possibly incomplete day).
//! - Expands the range into the Sunday–Saturday weekly windows the upstream
//!   API accepts, and queries every configured land for every window.
//! - Fans the (window × land) queries out with bounded concurrency and a
//!   per-pair timeout; a failing pair contributes zero records and never
//!   aborts the batch.
//! - Filters the collected records back down to the originally requested
//!   range, optionally scoped to a caller-supplied set of kingdoms.
//!
//! Key behaviors and trade-offs
//! - Pair failures are absorbed, not propagated: the report's `data` alone
//!   cannot distinguish "upstream down" from "zero contributions", so each
//!   report also carries per-pair outcomes with the absorbed errors.
//! - Period parsing is permissive by contract: unrecognized tags resolve as
//!   the current week and invalid custom-day counts as a 7-day trailing
//!   window, logged at WARN.
//! - The fan-out is bounded (`max_in_flight`) to avoid hammering the
//!   upstream API; raise it for faster wall-clock aggregation at the cost
//!   of burstier upstream load.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use levy::{Levy, Period};
//! use levy_lok::LokConnector;
//!
//! let levy = Levy::builder()
//!     .with_provider(Arc::new(LokConnector::new_default()))
//!     .track_lands(["134378", "135682"])
//!     .build()?;
//!
//! let report = levy.contributions(&Period::LastWeek).await?;
//! for record in &report.data {
//!     println!("{} contributed {} on land {}", record.name, record.total, record.land_id);
//! }
//! ```
//!
//! See `levy/examples/` for runnable demonstrations against the mock
//! provider.
#![warn(missing_docs)]

mod aggregator;
pub(crate) mod core;

pub use core::{Levy, LevyBuilder};

// Re-export core types for convenience
pub use levy_core::{
    ContributionProvider, ContributionRecord, ContributionReport, DateRange, KingdomId,
    KingdomTotal, LandId, LevyError, PairOutcome, Period, WeeklyWindow,
};
