//! Decoding of record batches.
//!
//! Accepts either a JSON array of records or newline-delimited JSON with one
//! record per line. Blank lines are ignored.

use notifi_history_core::error::CoreError;
use notifi_history_core::NotificationRecord;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Invalid record on line {line}: {source}")]
    Line { line: usize, source: CoreError },

    #[error("Invalid record at index {index}: {source}")]
    Element { index: usize, source: CoreError },

    #[error("Invalid record batch: {0}")]
    Batch(#[from] CoreError),
}

pub fn parse_records(input: &str) -> Result<Vec<NotificationRecord>, InputError> {
    if input.trim_start().starts_with('[') {
        parse_array(input)
    } else {
        parse_lines(input)
    }
}

fn parse_array(input: &str) -> Result<Vec<NotificationRecord>, InputError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(input).map_err(|e| InputError::Batch(e.into()))?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            NotificationRecord::from_value(value)
                .map_err(|source| InputError::Element { index, source })
        })
        .collect()
}

fn parse_lines(input: &str) -> Result<Vec<NotificationRecord>, InputError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            NotificationRecord::from_json(line).map_err(|source| InputError::Line {
                line: i + 1,
                source,
            })
        })
        .collect()
}
