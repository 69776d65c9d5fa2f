use std::sync::Arc;

use levy::{Levy, Period};
use levy_mock::{MockBehavior, MockProvider, row};

use crate::helpers::{d, today};

#[tokio::test]
async fn report_carries_the_resolved_range_not_the_window_bounds() {
    // customDays(10) at 2024-03-14 resolves to Mar 4 – Mar 13, which expands
    // to the two windows Mar 3 – Mar 9 and Mar 10 – Mar 16.
    let mock = MockProvider::new();
    mock.script(
        "134378",
        d(2024, 3, 3),
        MockBehavior::Return(vec![row("K1", 50.0)]),
    )
    .await;
    mock.script(
        "134378",
        d(2024, 3, 10),
        MockBehavior::Return(vec![row("K1", 75.0)]),
    )
    .await;

    let levy = Levy::builder()
        .with_provider(Arc::new(mock))
        .track_lands(["134378", "135682"])
        .build()
        .unwrap();

    let report = levy
        .contributions_at(&Period::CustomDays(10), today())
        .await
        .unwrap();

    assert_eq!(report.from, d(2024, 3, 4));
    assert_eq!(report.to, d(2024, 3, 13));

    // 2 windows x 2 lands.
    assert_eq!(report.pairs.len(), 4);
    assert_eq!(report.failed_pairs(), 0);

    // Records are stamped with their window start and land of origin.
    assert_eq!(report.data.len(), 2);
    for record in &report.data {
        assert_eq!(record.land_id.as_str(), "134378");
        assert!(record.date == d(2024, 3, 3) || record.date == d(2024, 3, 10));
    }
}
