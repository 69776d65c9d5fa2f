use std::sync::Arc;

use levy::{KingdomId, Levy, Period};
use levy_mock::{MockBehavior, MockProvider, row};

use crate::helpers::{d, today};

async fn scripted_levy() -> Levy {
    let mock = MockProvider::new();
    mock.script(
        "134378",
        d(2024, 3, 3),
        MockBehavior::Return(vec![row("K1", 100.0), row("K2", 40.0)]),
    )
    .await;
    mock.script(
        "135682",
        d(2024, 3, 3),
        MockBehavior::Return(vec![row("K1", 15.0), row("K3", 60.0)]),
    )
    .await;

    Levy::builder()
        .with_provider(Arc::new(mock))
        .track_lands(["134378", "135682"])
        .build()
        .unwrap()
}

#[tokio::test]
async fn scoped_report_is_the_full_report_filtered() {
    let levy = scripted_levy().await;

    let full = levy
        .contributions_at(&Period::LastWeek, today())
        .await
        .unwrap();
    let scoped = levy
        .contributions_for_kingdoms_at(&[KingdomId::new("K1")], &Period::LastWeek, today())
        .await
        .unwrap();

    let mut expected: Vec<_> = full
        .data
        .iter()
        .filter(|r| r.kingdom_id.as_str() == "K1")
        .cloned()
        .collect();
    let mut got = scoped.data.clone();
    // Fetch completion order is not contractual; compare as sets.
    expected.sort_by(|a, b| (&a.land_id, a.date).cmp(&(&b.land_id, b.date)));
    got.sort_by(|a, b| (&a.land_id, a.date).cmp(&(&b.land_id, b.date)));

    assert_eq!(got.len(), 2);
    assert_eq!(got, expected);

    // Scoping filters records only; range echo and pair metadata match.
    assert_eq!(scoped.from, full.from);
    assert_eq!(scoped.to, full.to);
    assert_eq!(scoped.pairs.len(), full.pairs.len());
}

#[tokio::test]
async fn unknown_kingdom_scopes_to_an_empty_report() {
    let levy = scripted_levy().await;
    let scoped = levy
        .contributions_for_kingdoms_at(&[KingdomId::new("K999")], &Period::LastWeek, today())
        .await
        .unwrap();
    assert!(scoped.data.is_empty());
    assert_eq!(scoped.pairs.len(), 2);
}
