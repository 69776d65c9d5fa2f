use std::sync::Arc;
use std::sync::atomic::Ordering;

use levy::{Levy, Period};

use crate::helpers::fn_provider::{FnProvider, total};
use crate::helpers::today;

#[tokio::test]
async fn in_flight_fetches_never_exceed_the_cap() {
    // customDays(21) at 2024-03-14 expands to four windows; two lands make
    // eight pairs, each sleeping long enough to overlap.
    let provider = FnProvider::new(|_, _| Ok(vec![total("K1", 5.0)])).with_delay(30);
    let high_water = provider.max_in_flight_seen();

    let levy = Levy::builder()
        .with_provider(Arc::new(provider))
        .track_lands(["134378", "135682"])
        .max_in_flight(2)
        .build()
        .unwrap();

    let report = levy
        .contributions_at(&Period::CustomDays(21), today())
        .await
        .unwrap();

    assert_eq!(report.pairs.len(), 8);
    assert_eq!(report.data.len(), 8);
    assert!(high_water.load(Ordering::SeqCst) <= 2);
    assert!(high_water.load(Ordering::SeqCst) >= 1);
}
