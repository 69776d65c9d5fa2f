use std::sync::Arc;
use std::time::Duration;

use levy_core::{ContributionProvider, KingdomTotal, LandId, LevyError};

/// Orchestrator that aggregates contribution data from a provider across
/// every configured land.
pub struct Levy {
    pub(crate) provider: Arc<dyn ContributionProvider>,
    pub(crate) cfg: LevyConfig,
}

#[derive(Debug, Clone)]
pub(crate) struct LevyConfig {
    pub(crate) lands: Vec<LandId>,
    pub(crate) max_in_flight: usize,
    pub(crate) pair_timeout: Duration,
    pub(crate) request_timeout: Option<Duration>,
}

impl Default for LevyConfig {
    fn default() -> Self {
        Self {
            lands: Vec::new(),
            max_in_flight: 4,
            pair_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// Builder for constructing a [`Levy`] aggregator with custom configuration.
pub struct LevyBuilder {
    provider: Option<Arc<dyn ContributionProvider>>,
    cfg: LevyConfig,
}

impl Default for LevyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LevyBuilder {
    /// Create a new builder with conservative defaults.
    ///
    /// Defaults: no provider and no tracked lands (both must be supplied),
    /// at most 4 pair fetches in flight, a 10s per-pair timeout, no overall
    /// request deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: None,
            cfg: LevyConfig::default(),
        }
    }

    /// Register the upstream provider queried for every (window, land) pair.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn ContributionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Add one land to the tracked set.
    ///
    /// The tracked set is explicit aggregator configuration: every
    /// aggregation queries exactly these lands, in cross-product with the
    /// expanded weekly windows.
    #[must_use]
    pub fn track_land(mut self, land: impl Into<LandId>) -> Self {
        self.cfg.lands.push(land.into());
        self
    }

    /// Add several lands to the tracked set.
    #[must_use]
    pub fn track_lands<I, L>(mut self, lands: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<LandId>,
    {
        self.cfg.lands.extend(lands.into_iter().map(Into::into));
        self
    }

    /// Cap the number of concurrently in-flight pair fetches.
    ///
    /// The (window × land) calls are independent, so raising this shortens
    /// wall-clock time at the cost of burstier upstream load. Values below 1
    /// are treated as 1.
    #[must_use]
    pub const fn max_in_flight(mut self, n: usize) -> Self {
        self.cfg.max_in_flight = if n == 0 { 1 } else { n };
        self
    }

    /// Set the per-pair fetch timeout.
    ///
    /// A pair that exceeds it is absorbed exactly like a failed pair: zero
    /// records, outcome recorded, batch continues.
    #[must_use]
    pub const fn pair_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.pair_timeout = timeout;
        self
    }

    /// Set an overall deadline for a whole aggregation call.
    ///
    /// Exceeding it is the one fatal outcome: the call returns
    /// [`LevyError::RequestTimeout`] instead of a partial report.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the [`Levy`] aggregator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no provider was registered or the tracked
    /// land set is empty.
    pub fn build(self) -> Result<Levy, LevyError> {
        let Some(provider) = self.provider else {
            return Err(LevyError::InvalidArg(
                "no provider registered; add one via with_provider(...)".to_string(),
            ));
        };
        if self.cfg.lands.is_empty() {
            return Err(LevyError::InvalidArg(
                "no lands tracked; add at least one via track_land(...)".to_string(),
            ));
        }
        Ok(Levy {
            provider,
            cfg: self.cfg,
        })
    }
}

impl Levy {
    /// Start building a new `Levy` instance.
    #[must_use]
    pub fn builder() -> LevyBuilder {
        LevyBuilder::new()
    }

    /// The lands every aggregation queries.
    #[must_use]
    pub fn tracked_lands(&self) -> &[LandId] {
        &self.cfg.lands
    }

    /// Wrap a single pair fetch with the per-pair timeout, mapping
    /// expiration onto a provider-tagged timeout error.
    pub(crate) async fn pair_call_with_timeout<Fut>(
        provider_name: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<Vec<KingdomTotal>, LevyError>
    where
        Fut: Future<Output = Result<Vec<KingdomTotal>, LevyError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(LevyError::provider_timeout(provider_name)))
    }
}
