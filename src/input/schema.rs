use serde::Deserialize;
use serde_json::Value;

use crate::model::record::{GeneRecord, Label, Probability};

const NOT_APPLICABLE: &str = "N/A";

/// One dataset entry, either `"SYMBOL": rank` or `"SYMBOL": {rank, labels, probability}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Flat(u32),
    Rich(RawRecord),
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    rank: Option<u32>,
    #[serde(default)]
    labels: Option<Vec<String>>,
    #[serde(default)]
    probability: Option<RawProbability>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawProbability {
    Number(f64),
    Text(String),
}

pub fn decode_entry(symbol: String, value: Value) -> Result<GeneRecord, serde_json::Error> {
    let record = match serde_json::from_value::<RawEntry>(value)? {
        RawEntry::Flat(rank) => GeneRecord {
            symbol,
            rank,
            labels: Vec::new(),
            probability: Probability::NotApplicable,
        },
        RawEntry::Rich(raw) => {
            let mut labels: Vec<Label> = Vec::new();
            for tag in raw.labels.unwrap_or_default() {
                let label = Label::from_tag(&tag);
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }
            let probability = decode_probability(&symbol, raw.probability);
            GeneRecord {
                symbol,
                rank: raw.rank.unwrap_or(0),
                labels,
                probability,
            }
        }
    };
    Ok(record)
}

fn decode_probability(symbol: &str, raw: Option<RawProbability>) -> Probability {
    match raw {
        None => Probability::NotApplicable,
        Some(RawProbability::Number(v)) => Probability::Value(v),
        Some(RawProbability::Text(text)) => {
            let text = text.trim();
            if text.eq_ignore_ascii_case(NOT_APPLICABLE) {
                return Probability::NotApplicable;
            }
            match text.parse::<f64>() {
                Ok(v) if v.is_finite() => Probability::Value(v),
                _ => {
                    tracing::debug!(
                        symbol,
                        value = text,
                        "unparsable probability treated as not applicable"
                    );
                    Probability::NotApplicable
                }
            }
        }
    }
}
