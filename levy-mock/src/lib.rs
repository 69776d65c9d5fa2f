use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use levy_core::{
    ContributionProvider, KingdomId, KingdomTotal, LandId, LevyError, WeeklyWindow,
};

/// Instruction for how a (land, week) pair fetch should behave.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided rows immediately.
    Return(Vec<KingdomTotal>),
    /// Fail immediately with the provided error.
    Fail(LevyError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

type PairKey = (LandId, NaiveDate);

/// Scriptable provider for deterministic tests and examples.
///
/// Behaviors are keyed by (land, window start); pairs without a scripted
/// behavior use the default (empty rows unless overridden). Every call is
/// recorded so tests can assert the exact (window × land) cross-product.
pub struct MockProvider {
    rules: Mutex<HashMap<PairKey, MockBehavior>>,
    default: MockBehavior,
    requests: Mutex<Vec<PairKey>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Provider whose unscripted pairs return no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default(MockBehavior::Return(Vec::new()))
    }

    /// Provider with a custom behavior for unscripted pairs.
    #[must_use]
    pub fn with_default(default: MockBehavior) -> Self {
        Self {
            rules: Mutex::new(HashMap::new()),
            default,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script the behavior for one (land, week-start) pair.
    pub async fn script(
        &self,
        land: impl Into<LandId>,
        week_start: NaiveDate,
        behavior: MockBehavior,
    ) {
        let mut rules = self.rules.lock().await;
        rules.insert((land.into(), week_start), behavior);
    }

    /// The pairs fetched so far, in call order.
    pub async fn requests(&self) -> Vec<PairKey> {
        self.requests.lock().await.clone()
    }
}

/// Convenience constructor for a contribution row.
#[must_use]
pub fn row(kingdom_id: &str, total: f64) -> KingdomTotal {
    KingdomTotal {
        kingdom_id: KingdomId::new(kingdom_id),
        total,
        name: format!("Kingdom {kingdom_id}"),
        continent: 1,
    }
}

#[async_trait]
impl ContributionProvider for MockProvider {
    fn name(&self) -> &'static str {
        "levy-mock"
    }

    async fn land_contributions(
        &self,
        land: &LandId,
        window: WeeklyWindow,
    ) -> Result<Vec<KingdomTotal>, LevyError> {
        let key = (land.clone(), window.start());
        {
            let mut requests = self.requests.lock().await;
            requests.push(key.clone());
        }

        // Snapshot the behavior without holding the lock across await points.
        let behavior = {
            let rules = self.rules.lock().await;
            rules.get(&key).cloned()
        };

        match behavior.unwrap_or_else(|| self.default.clone()) {
            MockBehavior::Return(rows) => Ok(rows),
            MockBehavior::Fail(e) => Err(e),
            MockBehavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}
