//! Aggregate a scripted week of contributions and print the report.
//!
//! Run with: `cargo run --example 01_weekly_report`

use std::sync::Arc;

use chrono::Utc;
use levy::{Levy, Period};
use levy_core::weekly_windows;
use levy_mock::{MockBehavior, MockProvider, row};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 1. Script last week's totals on one land.
    let today = Utc::now().date_naive();
    let range = levy_core::resolve(&Period::LastWeek, today);
    let window = weekly_windows(&range)[0];

    let mock = MockProvider::new();
    mock.script(
        "134378",
        window.start(),
        MockBehavior::Return(vec![row("K1", 1250.0), row("K2", 430.0)]),
    )
    .await;

    // 2. Build the aggregator and fetch the report.
    let levy = Levy::builder()
        .with_provider(Arc::new(mock))
        .track_lands(["134378", "135682"])
        .build()?;

    let report = levy.contributions(&Period::LastWeek).await?;

    // 3. Print it.
    println!("Contributions {} to {}:", report.from, report.to);
    for record in &report.data {
        println!(
            "  {:<12} {:>8.0} pts  (land {}, week of {})",
            record.name, record.total, record.land_id, record.date
        );
    }
    println!(
        "{} of {} pairs failed",
        report.failed_pairs(),
        report.pairs.len()
    );

    Ok(())
}
