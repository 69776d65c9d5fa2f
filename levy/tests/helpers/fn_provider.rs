use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use levy::{ContributionProvider, KingdomId, KingdomTotal, LandId, LevyError, WeeklyWindow};

type FetchFn = dyn Fn(&LandId, WeeklyWindow) -> Result<Vec<KingdomTotal>, LevyError> + Send + Sync;

/// Closure-configurable provider used by integration tests, with in-flight
/// accounting so concurrency behavior can be asserted.
pub struct FnProvider {
    pub name: &'static str,
    pub delay_ms: u64,
    pub fetch: Arc<FetchFn>,
    in_flight: AtomicUsize,
    max_in_flight_seen: Arc<AtomicUsize>,
}

impl FnProvider {
    pub fn new(
        fetch: impl Fn(&LandId, WeeklyWindow) -> Result<Vec<KingdomTotal>, LevyError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            name: "fn_provider",
            delay_ms: 0,
            fetch: Arc::new(fetch),
            in_flight: AtomicUsize::new(0),
            max_in_flight_seen: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Handle to the high-water mark of concurrent fetches.
    pub fn max_in_flight_seen(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.max_in_flight_seen)
    }
}

#[async_trait]
impl ContributionProvider for FnProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn land_contributions(
        &self,
        land: &LandId,
        window: WeeklyWindow,
    ) -> Result<Vec<KingdomTotal>, LevyError> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight_seen.fetch_max(current, Ordering::SeqCst);

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        let out = (self.fetch)(land, window);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        out
    }
}

pub fn total(kingdom_id: &str, points: f64) -> KingdomTotal {
    KingdomTotal {
        kingdom_id: KingdomId::new(kingdom_id),
        total: points,
        name: format!("Kingdom {kingdom_id}"),
        continent: 1,
    }
}
