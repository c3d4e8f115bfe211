use crate::model::view::{Neighbor, NotFoundReason, RankBlock, ResultView};
use crate::query::quick_picks::QuickPicks;
use crate::query::scan::ScanHit;
use crate::report::{format_probability, format_thousands};

const KNOWN_IEI_BADGE: &str = "[Known IEI (IUIS 2022)]";
const NOVEL_IEI_BADGE: &str = "[Novel IEI (IUIS 2024)]";
const NON_IMMUNE_BANNER: &str = "Non-immune-related gene";

pub fn render_view_text(view: &ResultView) -> String {
    let mut out = String::new();
    out.push_str(view.symbol());
    out.push('\n');

    match view {
        ResultView::NotFound { reason, .. } => {
            out.push_str(reason.headline());
            out.push('\n');
            out.push_str(reason.detail());
            out.push('\n');
            return out;
        }
        ResultView::NonImmune { .. } => {
            out.push_str(NON_IMMUNE_BANNER);
            out.push('\n');
        }
        ResultView::KnownIei { .. } => {
            out.push_str(KNOWN_IEI_BADGE);
            out.push('\n');
        }
        ResultView::NovelIei { .. } => {
            out.push_str(NOVEL_IEI_BADGE);
            out.push('\n');
        }
        ResultView::Standard { .. } => {}
    }

    if let Some(block) = view.ranking() {
        push_rank_block(&mut out, block);
    }
    for note in view.notes() {
        out.push_str(note.text());
        out.push('\n');
    }
    if let Some(p) = view.probability() {
        out.push_str(&format!("Probability: {}\n", format_probability(p)));
    }
    if !view.neighbors().is_empty() {
        out.push_str(&format!("Neighbors: {}\n", neighbor_strip(view.neighbors())));
    }
    out
}

fn push_rank_block(out: &mut String, block: &RankBlock) {
    out.push_str(&format!("{} / {}\n", block.rank, block.total));
    out.push_str(&format!(
        "Rank among {} STRING v11 proteins.\n",
        format_thousands(block.total)
    ));
    out.push_str(&block.top_label());
    out.push('\n');
}

fn neighbor_strip(neighbors: &[Neighbor]) -> String {
    neighbors
        .iter()
        .map(|n| {
            if n.current {
                format!("[#{} {}]", n.rank, n.symbol)
            } else {
                format!("#{} {}", n.rank, n.symbol)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render_quick_picks_text(picks: &QuickPicks) -> String {
    if picks.is_empty() {
        return "No ranked genes available.\n".to_string();
    }
    let mut out = String::from("Top ranked genes:\n");
    for (pos, pick) in picks.picks().iter().enumerate() {
        out.push_str(&format!("{:>3}. #{} {}\n", pos + 1, pick.rank, pick.symbol));
    }
    out
}

pub fn render_unavailable_text() -> String {
    format!("{}\n", NotFoundReason::DataUnavailable.headline())
}

pub fn render_scan_text(hits: &[ScanHit], within: u32) -> String {
    let mut out = format!("Found {} labelled genes in the top {}:\n", hits.len(), within);
    out.push_str(&format!("{:<5} {:<10} {}\n", "Rank", "Gene", "Labels"));
    out.push_str(&"-".repeat(30));
    out.push('\n');
    for hit in hits {
        let labels = hit
            .matched
            .iter()
            .map(|l| l.tag())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("{:<5} {:<10} {}\n", hit.rank, hit.symbol, labels));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
