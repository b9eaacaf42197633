/// Loading backend records from a file or stdin.
use serde_json::Value;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::CliError;

/// Envelope keys list endpoints commonly wrap their records in.
const ENVELOPE_KEYS: [&str; 3] = ["content", "items", "data"];

/// Parse a JSON payload into a list of record objects.
///
/// Accepts a bare array or an object carrying the array under one of
/// `ENVELOPE_KEYS`. Entries that are not objects are skipped.
pub fn parse_records(content: &str) -> Result<Vec<Value>, CliError> {
    let payload: Value = serde_json::from_str(content.trim())?;

    let list = match payload {
        Value::Array(list) => list,
        Value::Object(mut map) => ENVELOPE_KEYS
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(list)) => Some(list),
                _ => None,
            })
            .ok_or(CliError::InputShape)?,
        _ => return Err(CliError::InputShape),
    };

    let total = list.len();
    let records: Vec<Value> = list.into_iter().filter(Value::is_object).collect();
    if records.len() < total {
        warn!(skipped = total - records.len(), "ignoring list entries that are not JSON objects");
    }
    Ok(records)
}

/// Load records from `--items` or, when absent, from piped stdin.
pub fn load_records(path: Option<&Path>) -> Result<Vec<Value>, CliError> {
    let (source_name, content) = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| CliError::InputRead {
                source_name: path.display().to_string(),
                source,
            })?;
            (path.display().to_string(), content)
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(CliError::NoInput);
            }
            let mut content = String::new();
            stdin
                .lock()
                .read_to_string(&mut content)
                .map_err(|source| CliError::InputRead {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            ("stdin".to_string(), content)
        }
    };

    let records = parse_records(&content)?;
    debug!(source = %source_name, count = records.len(), "loaded records");
    Ok(records)
}
