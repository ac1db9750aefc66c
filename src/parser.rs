use crate::ir::Record;
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsInput {
    List(Vec<Record>),
    Wrapped { records: Vec<Record> },
}

impl RecordsInput {
    fn into_records(self) -> Vec<Record> {
        match self {
            RecordsInput::List(records) | RecordsInput::Wrapped { records } => records,
        }
    }
}

/// Reads records from a JSON array, or an object with a `records` array.
/// Falls back to JSON5 so hand-written files may carry comments and trailing
/// commas.
pub fn parse_records(input: &str) -> Result<Vec<Record>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let parsed = match serde_json::from_str::<RecordsInput>(trimmed) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str::<RecordsInput>(trimmed)
            .with_context(|| format!("input is neither JSON ({json_err}) nor JSON5"))?,
    };
    let records = parsed.into_records();
    debug!(count = records.len(), "parsed records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::NodeRecord;

    #[test]
    fn parses_plain_array() {
        let records =
            parse_records(r#"[{"id":"a"},{"id":"b","parentId":"a","label":"Bee"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].parent_id(), Some("a"));
        assert_eq!(records[1].display_label(), "Bee");
    }

    #[test]
    fn parses_wrapped_records() {
        let records = parse_records(r#"{"records":[{"id":1},{"id":2,"parentId":1}]}"#).unwrap();
        assert_eq!(records[1].id(), "2");
        assert_eq!(records[1].parent_id(), Some("1"));
    }

    #[test]
    fn falls_back_to_json5() {
        let input = "[\n  // the boss\n  { id: 'ceo' },\n  { id: 'cto', parentId: 'ceo' },\n]";
        let records = parse_records(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].parent_id(), Some("ceo"));
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(parse_records("  \n").unwrap().is_empty());
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_records("id,parentId\na,").is_err());
        assert!(parse_records(r#"[{"parentId":"a"}]"#).is_err());
    }
}
