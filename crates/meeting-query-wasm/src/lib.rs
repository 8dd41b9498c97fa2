//! WASM bindings for meeting-query.
//!
//! Exposes the meeting slot search and range merging to JavaScript via
//! `wasm-bindgen`. All complex types cross the boundary as JSON strings in the
//! same shape the library serializes them.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-query-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/meeting_query_wasm.wasm
//! ```

use meeting_query::{Schedule, TimeRange};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON-in, JSON-out helpers (testable without a JS host)
// ---------------------------------------------------------------------------

fn find_meeting_times_json(schedule_json: &str) -> Result<String, String> {
    let schedule: Schedule = serde_json::from_str(schedule_json)
        .map_err(|e| format!("Invalid schedule JSON: {}", e))?;

    let result = meeting_query::query_with_attendance(&schedule.events, &schedule.request);

    serde_json::to_string(&result).map_err(|e| format!("Serialization error: {}", e))
}

fn merge_ranges_json(ranges_json: &str) -> Result<String, String> {
    let ranges: Vec<TimeRange> = serde_json::from_str(ranges_json)
        .map_err(|e| format!("Invalid ranges JSON: {}", e))?;

    let merged = meeting_query::merge_ranges(ranges);

    serde_json::to_string(&merged).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every slot of the day where the requested meeting fits.
///
/// `schedule_json` is a `{events, request}` document. Returns a JSON string
/// `{attendance, slots}` where `attendance` is `"all_attendees"` or
/// `"mandatory_only"` and each slot is `{start, end, duration}`.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(schedule_json: &str) -> Result<String, JsValue> {
    find_meeting_times_json(schedule_json).map_err(|e| JsValue::from_str(&e))
}

/// Merge a JSON array of `{start, end}` / `{start, duration}` ranges into
/// sorted, disjoint busy ranges.
#[wasm_bindgen(js_name = "mergeRanges")]
pub fn merge_ranges(ranges_json: &str) -> Result<String, JsValue> {
    merge_ranges_json(ranges_json).map_err(|e| JsValue::from_str(&e))
}
