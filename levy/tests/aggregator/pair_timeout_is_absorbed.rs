use std::sync::Arc;
use std::time::Duration;

use levy::{Levy, LevyError, Period};
use levy_mock::{MockBehavior, MockProvider, row};

use crate::helpers::{d, today};

#[tokio::test]
async fn a_hung_pair_times_out_and_the_batch_continues() {
    let mock = MockProvider::new();
    mock.script(
        "134378",
        d(2024, 3, 3),
        MockBehavior::Return(vec![row("K1", 10.0)]),
    )
    .await;
    mock.script("135682", d(2024, 3, 3), MockBehavior::Hang).await;

    let levy = Levy::builder()
        .with_provider(Arc::new(mock))
        .track_lands(["134378", "135682"])
        .pair_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let report = levy
        .contributions_at(&Period::LastWeek, today())
        .await
        .unwrap();

    assert_eq!(report.data.len(), 1);
    assert_eq!(report.data[0].kingdom_id.as_str(), "K1");

    let timed_out = report.pairs.iter().find(|p| !p.is_ok()).unwrap();
    assert_eq!(timed_out.land_id.as_str(), "135682");
    assert_eq!(
        timed_out.error,
        Some(LevyError::provider_timeout("levy-mock"))
    );
}
