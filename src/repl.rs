use std::io::{BufRead, Write};

use crate::index::dataset::Dataset;
use crate::model::thresholds::QUICK_PICK_COUNT;
use crate::query::Resolver;
use crate::query::quick_picks::QuickPicks;
use crate::report::{OutputFormat, ReportError, write_quick_picks, write_view};

/// Answers one query per input line until EOF or `:quit`.
///
/// `#k` selects the k-th quick pick, `:top` reprints the picks, blank lines
/// are ignored.
pub fn run_repl<R: BufRead, W: Write>(
    dataset: &Dataset,
    resolver: Resolver,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> Result<(), ReportError> {
    let picks = QuickPicks::from_dataset(dataset, QUICK_PICK_COUNT);
    write_quick_picks(out, picks.as_ref(), format)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let query = line.trim();
        match query {
            ":quit" | ":q" => break,
            ":top" => {
                write_quick_picks(out, picks.as_ref(), format)?;
                out.flush()?;
                continue;
            }
            _ => {}
        }

        let query = match query.strip_prefix('#') {
            Some(position) => {
                let selected = position
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|p| picks.as_ref()?.select(p));
                match selected {
                    Some(symbol) => symbol.to_string(),
                    None => {
                        tracing::warn!(position = position.trim(), "no such quick pick");
                        continue;
                    }
                }
            }
            None => query.to_string(),
        };

        if let Some(view) = resolver.classify(&query, dataset) {
            write_view(out, &view, format)?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/repl.rs"]
mod tests;
