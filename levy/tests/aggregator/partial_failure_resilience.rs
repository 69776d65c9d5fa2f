use std::sync::Arc;

use levy::{Levy, LevyError, Period};
use levy_mock::{MockBehavior, MockProvider, row};

use crate::helpers::{d, today};

#[tokio::test]
async fn one_failing_pair_does_not_abort_the_batch() {
    // lastWeek at 2024-03-14 is a single window (Mar 3 – Mar 9) across three
    // lands; the middle land's fetch fails.
    let mock = MockProvider::new();
    mock.script(
        "134378",
        d(2024, 3, 3),
        MockBehavior::Return(vec![row("K1", 120.0)]),
    )
    .await;
    mock.script(
        "135682",
        d(2024, 3, 3),
        MockBehavior::Fail(LevyError::status("levy-mock", 502)),
    )
    .await;
    mock.script(
        "145933",
        d(2024, 3, 3),
        MockBehavior::Return(vec![row("K2", 80.0)]),
    )
    .await;

    let levy = Levy::builder()
        .with_provider(Arc::new(mock))
        .track_lands(["134378", "135682", "145933"])
        .build()
        .unwrap();

    let report = levy
        .contributions_at(&Period::LastWeek, today())
        .await
        .unwrap();

    // Records from the two healthy pairs survive.
    let mut kingdoms: Vec<&str> = report.data.iter().map(|r| r.kingdom_id.as_str()).collect();
    kingdoms.sort_unstable();
    assert_eq!(kingdoms, ["K1", "K2"]);

    // The failure is absorbed into the pair metadata.
    assert_eq!(report.pairs.len(), 3);
    assert_eq!(report.failed_pairs(), 1);
    let failed = report.pairs.iter().find(|p| !p.is_ok()).unwrap();
    assert_eq!(failed.land_id.as_str(), "135682");
    assert_eq!(failed.records, 0);
    assert_eq!(
        failed.error,
        Some(LevyError::status("levy-mock", 502))
    );
}

#[tokio::test]
async fn all_pairs_failing_still_yields_a_report() {
    let mock = MockProvider::with_default(MockBehavior::Fail(LevyError::provider(
        "levy-mock",
        "upstream down",
    )));

    let levy = Levy::builder()
        .with_provider(Arc::new(mock))
        .track_lands(["134378", "135682"])
        .build()
        .unwrap();

    let report = levy
        .contributions_at(&Period::LastWeek, today())
        .await
        .unwrap();

    assert!(report.data.is_empty());
    assert_eq!(report.pairs.len(), 2);
    assert_eq!(report.failed_pairs(), 2);
}
