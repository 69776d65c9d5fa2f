//! Wire-format handling for the contribution endpoint.
//!
//! The endpoint answers either `{ "contribution": [ ... ] }` or an error
//! shape `{ "err": { "code": ... } }`, and individual rows are only loosely
//! typed upstream (kingdom ids arrive as strings or numbers, names and
//! continents may be missing). Rows are validated one by one so a single
//! malformed entry never discards its siblings.

use levy_core::{KingdomId, KingdomTotal, LandId, WeeklyWindow};
use serde::Deserialize;
use serde_json::Value;

/// Name substituted when upstream omits a kingdom's display name.
const UNKNOWN_KINGDOM: &str = "Unknown Kingdom";

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub(crate) contribution: Option<Vec<Value>>,
    #[serde(default)]
    pub(crate) err: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub(crate) code: Option<Value>,
}

/// Convert a decoded envelope into valid rows.
///
/// A body without a `contribution` array (including the `err` shape) is "no
/// data for this pair", not a failure.
pub(crate) fn rows_from_envelope(
    envelope: Envelope,
    land: &LandId,
    window: WeeklyWindow,
) -> Vec<KingdomTotal> {
    let Some(items) = envelope.contribution else {
        let code = envelope.err.and_then(|e| e.code);
        tracing::debug!(
            land = %land,
            week = %window.start(),
            code = ?code,
            "no contribution data for pair"
        );
        return Vec::new();
    };

    let mut rows = Vec::with_capacity(items.len());
    for item in &items {
        match parse_row(item) {
            Some(row) => rows.push(row),
            None => tracing::warn!(
                land = %land,
                week = %window.start(),
                item = %item,
                "skipping malformed contribution row"
            ),
        }
    }
    rows
}

/// A usable row needs a kingdom id and a numeric total. Numeric kingdom ids
/// are coerced to strings; name and continent default when absent.
fn parse_row(item: &Value) -> Option<KingdomTotal> {
    let obj = item.as_object()?;
    let total = obj.get("total")?.as_f64()?;

    let kingdom_id = match obj.get("kingdomId")? {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_KINGDOM)
        .to_string();

    let continent = match obj.get("continent") {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|c| i32::try_from(c).ok())
            .unwrap_or(0),
        Some(Value::String(s)) => s.parse().unwrap_or(0),
        _ => 0,
    };

    Some(KingdomTotal {
        kingdom_id: KingdomId::new(kingdom_id),
        total,
        name,
        continent,
    })
}
