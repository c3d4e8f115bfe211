use std::io::Write;

use thiserror::Error;

use crate::model::view::ResultView;
use crate::query::quick_picks::QuickPicks;
use crate::query::scan::ScanHit;

pub mod json;
pub mod text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn write_view<W: Write>(
    out: &mut W,
    view: &ResultView,
    format: OutputFormat,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", text::render_view_text(view))?,
        OutputFormat::Json => writeln!(out, "{}", json::render_view_json(view)?)?,
    }
    Ok(())
}

/// `None` means the dataset is not ready; that renders as unavailable data,
/// never as an empty list.
pub fn write_quick_picks<W: Write>(
    out: &mut W,
    picks: Option<&QuickPicks>,
    format: OutputFormat,
) -> Result<(), ReportError> {
    let Some(picks) = picks else {
        return write_unavailable(out, format);
    };
    match format {
        OutputFormat::Text => write!(out, "{}", text::render_quick_picks_text(picks))?,
        OutputFormat::Json => writeln!(out, "{}", json::render_quick_picks_json(picks)?)?,
    }
    Ok(())
}

pub fn write_scan<W: Write>(
    out: &mut W,
    hits: Option<&[ScanHit]>,
    within: u32,
    format: OutputFormat,
) -> Result<(), ReportError> {
    let Some(hits) = hits else {
        return write_unavailable(out, format);
    };
    match format {
        OutputFormat::Text => write!(out, "{}", text::render_scan_text(hits, within))?,
        OutputFormat::Json => writeln!(out, "{}", json::render_scan_json(hits, within)?)?,
    }
    Ok(())
}

fn write_unavailable<W: Write>(out: &mut W, format: OutputFormat) -> Result<(), ReportError> {
    match format {
        OutputFormat::Text => write!(out, "{}", text::render_unavailable_text())?,
        OutputFormat::Json => writeln!(out, "{}", json::render_unavailable_json()?)?,
    }
    Ok(())
}

pub fn format_probability(p: f64) -> String {
    format!("{:.4}", p)
}

/// `18349` → `18,349`.
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
