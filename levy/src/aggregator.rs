use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use futures::stream::{self, StreamExt};

use levy_core::{
    ContributionRecord, ContributionReport, DateRange, KingdomId, LandId, LevyError, PairOutcome,
    Period, WeeklyWindow, resolve, weekly_windows,
};

use crate::core::Levy;

impl Levy {
    /// Aggregate contributions for every kingdom over the given period.
    ///
    /// Resolves the period against the current UTC date, expands it into
    /// weekly windows, queries every (window, land) pair, and filters the
    /// collected records back to the requested range. The report's
    /// `from`/`to` echo the resolved range, not the expanded window bounds.
    ///
    /// # Errors
    /// Only a configured request deadline can fail this call
    /// ([`LevyError::RequestTimeout`]); pair-level failures are absorbed
    /// into the report's `pairs` metadata.
    pub async fn contributions(&self, period: &Period) -> Result<ContributionReport, LevyError> {
        self.contributions_at(period, Utc::now().date_naive()).await
    }

    /// [`contributions`](Self::contributions) with an explicit "today".
    ///
    /// Resolution is deterministic for a fixed date, which makes this the
    /// entry point for tests and replays.
    pub async fn contributions_at(
        &self,
        period: &Period,
        today: NaiveDate,
    ) -> Result<ContributionReport, LevyError> {
        let range = resolve(period, today);
        tracing::debug!(period = %period, from = %range.from, to = %range.to, "resolved reporting period");

        let (mut records, pairs) = self.fetch_range(&range).await?;
        retain_overlapping(&mut records, &range);

        Ok(ContributionReport {
            data: records,
            from: range.from,
            to: range.to,
            pairs,
        })
    }

    /// Aggregate contributions scoped to the given kingdoms.
    ///
    /// Same pipeline as [`contributions`](Self::contributions), then keeps
    /// only records whose kingdom id is in `kingdom_ids`. The per-pair
    /// outcomes are unaffected by the scoping.
    ///
    /// # Errors
    /// See [`contributions`](Self::contributions).
    pub async fn contributions_for_kingdoms(
        &self,
        kingdom_ids: &[KingdomId],
        period: &Period,
    ) -> Result<ContributionReport, LevyError> {
        self.contributions_for_kingdoms_at(kingdom_ids, period, Utc::now().date_naive())
            .await
    }

    /// [`contributions_for_kingdoms`](Self::contributions_for_kingdoms)
    /// with an explicit "today".
    pub async fn contributions_for_kingdoms_at(
        &self,
        kingdom_ids: &[KingdomId],
        period: &Period,
        today: NaiveDate,
    ) -> Result<ContributionReport, LevyError> {
        let mut report = self.contributions_at(period, today).await?;
        let wanted: HashSet<&KingdomId> = kingdom_ids.iter().collect();
        report.data.retain(|r| wanted.contains(&r.kingdom_id));
        Ok(report)
    }

    /// Fetch the full (window × land) cross-product for a range.
    ///
    /// Pairs run with at most `max_in_flight` fetches concurrently; each is
    /// bounded by the pair timeout and absorbed on failure. Completion
    /// order decides record and outcome order, which carries no meaning.
    async fn fetch_range(
        &self,
        range: &DateRange,
    ) -> Result<(Vec<ContributionRecord>, Vec<PairOutcome>), LevyError> {
        let windows = weekly_windows(range);
        tracing::debug!(
            from = %range.from,
            to = %range.to,
            windows = windows.len(),
            lands = self.cfg.lands.len(),
            "fanning out weekly-window fetches"
        );

        let pairs: Vec<(WeeklyWindow, LandId)> = windows
            .iter()
            .flat_map(|w| self.cfg.lands.iter().map(|l| (*w, l.clone())))
            .collect();

        let gather = stream::iter(pairs.into_iter().map(|(window, land)| {
            let provider = Arc::clone(&self.provider);
            let timeout = self.cfg.pair_timeout;
            async move {
                let res = Self::pair_call_with_timeout(
                    provider.name(),
                    timeout,
                    provider.land_contributions(&land, window),
                )
                .await;
                (window, land, res)
            }
        }))
        .buffer_unordered(self.cfg.max_in_flight)
        .collect::<Vec<_>>();

        let joined = if let Some(deadline) = self.cfg.request_timeout {
            (tokio::time::timeout(deadline, gather).await).map_err(|_| LevyError::RequestTimeout)?
        } else {
            gather.await
        };

        let mut records = Vec::new();
        let mut outcomes = Vec::with_capacity(joined.len());
        for (window, land, res) in joined {
            match res {
                Ok(rows) => {
                    tracing::debug!(
                        land = %land,
                        week = %window.start(),
                        rows = rows.len(),
                        "pair fetched"
                    );
                    outcomes.push(PairOutcome {
                        land_id: land.clone(),
                        window,
                        records: rows.len(),
                        error: None,
                    });
                    records.extend(
                        rows.into_iter()
                            .map(|row| ContributionRecord::stamp(row, window, land.clone())),
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        land = %land,
                        week = %window.start(),
                        error = %e,
                        "pair fetch failed; contributing no records"
                    );
                    outcomes.push(PairOutcome {
                        land_id: land,
                        window,
                        records: 0,
                        error: Some(e),
                    });
                }
            }
        }
        Ok((records, outcomes))
    }
}

/// Retain only records whose weekly window overlaps the requested range.
fn retain_overlapping(records: &mut Vec<ContributionRecord>, range: &DateRange) {
    records.retain(|r| r.window().overlaps(range));
}
