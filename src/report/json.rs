use serde::Serialize;

use crate::model::view::{NotFoundReason, ResultView};
use crate::query::quick_picks::QuickPicks;
use crate::query::scan::ScanHit;

#[derive(Serialize)]
struct ScanReport<'a> {
    within: u32,
    hits: &'a [ScanHit],
}

#[derive(Serialize)]
struct Unavailable {
    reason: NotFoundReason,
}

pub fn render_view_json(view: &ResultView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

pub fn render_quick_picks_json(picks: &QuickPicks) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(picks)
}

pub fn render_scan_json(hits: &[ScanHit], within: u32) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ScanReport { within, hits })
}

pub fn render_unavailable_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Unavailable {
        reason: NotFoundReason::DataUnavailable,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
