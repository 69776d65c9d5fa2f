use std::sync::Arc;
use std::time::Duration;

use levy::{Levy, LevyError, Period};
use levy_mock::{MockBehavior, MockProvider};

use crate::helpers::today;

#[tokio::test]
async fn exceeding_the_request_deadline_is_fatal() {
    // Every pair hangs; the pair timeout is far beyond the request deadline,
    // so the deadline is what fires.
    let mock = MockProvider::with_default(MockBehavior::Hang);

    let levy = Levy::builder()
        .with_provider(Arc::new(mock))
        .track_land("134378")
        .pair_timeout(Duration::from_secs(60))
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = levy
        .contributions_at(&Period::LastWeek, today())
        .await
        .unwrap_err();

    assert_eq!(err, LevyError::RequestTimeout);
}

#[tokio::test]
async fn deadline_is_not_hit_by_a_healthy_batch() {
    let mock = MockProvider::new();

    let levy = Levy::builder()
        .with_provider(Arc::new(mock))
        .track_land("134378")
        .request_timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let report = levy
        .contributions_at(&Period::LastWeek, today())
        .await
        .unwrap();
    assert_eq!(report.pairs.len(), 1);
}
