//! levy-core
//!
//! Core types, traits, and utilities shared across the levy ecosystem.
//!
//! - `types`: common data structures (lands, kingdoms, contribution rows,
//!   reports).
//! - `provider`: the `ContributionProvider` trait implemented by upstream
//!   connectors.
//! - `calendar`: pure UTC date helpers for reporting-period resolution and
//!   weekly (Sunday–Saturday) window expansion.
//!
//! Everything in this crate is runtime-agnostic: the provider trait is
//! `async` via `async-trait`, but nothing here spawns tasks or owns
//! sockets. Orchestration (fan-out, timeouts, filtering) lives in the
//! `levy` crate.
#![warn(missing_docs)]

/// Pure UTC calendar utilities: period resolution and window expansion.
pub mod calendar;
mod error;
/// The `ContributionProvider` trait implemented by upstream connectors.
pub mod provider;
pub mod types;

pub use calendar::{DateRange, Period, WeeklyWindow, resolve, weekly_windows};
pub use error::LevyError;
pub use provider::ContributionProvider;
pub use types::*;
