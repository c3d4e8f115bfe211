use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

pub mod schema;
pub mod source;
pub mod symbols;

use schema::decode_entry;
use source::read_source;
use symbols::normalize_symbol;

use crate::index::GeneIndex;
use crate::model::thresholds::TotalCount;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read gene data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse gene data in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("gene data in {} must be a JSON object keyed by gene symbol, found {found}", .path.display())]
    NotAnObject { path: PathBuf, found: &'static str },
}

pub fn load_gene_index(path: &Path, total: TotalCount) -> Result<GeneIndex, LoadError> {
    let bytes = read_source(path)?;
    decode_gene_index(&bytes, path, total)
}

/// Builds an index from the raw bytes of a dataset document.
///
/// Malformed entries are skipped with a warning; only a document that is not
/// a JSON object fails as a whole.
pub fn decode_gene_index(
    bytes: &[u8],
    origin: &Path,
    total: TotalCount,
) -> Result<GeneIndex, LoadError> {
    let document: Value = serde_json::from_slice(bytes).map_err(|source| LoadError::Json {
        path: origin.to_path_buf(),
        source,
    })?;
    let entries = match document {
        Value::Object(entries) => entries,
        other => {
            return Err(LoadError::NotAnObject {
                path: origin.to_path_buf(),
                found: json_type_name(&other),
            });
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;
    for (raw_symbol, value) in entries {
        let symbol = normalize_symbol(&raw_symbol);
        if symbol.is_empty() {
            tracing::warn!("skipping gene entry with blank symbol");
            skipped += 1;
            continue;
        }
        match decode_entry(symbol, value) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(symbol = %raw_symbol, error = %err, "skipping malformed gene entry");
                skipped += 1;
            }
        }
    }

    let index = GeneIndex::build(records, total);
    if index.is_empty() {
        tracing::warn!(source = %origin.display(), "gene data contains no usable entries");
    }
    tracing::info!(
        source = %origin.display(),
        genes = index.len(),
        ranked = index.ranked_len(),
        skipped,
        total = index.size(),
        "gene data loaded"
    );
    Ok(index)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
