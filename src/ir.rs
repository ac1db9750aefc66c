use serde::{Deserialize, Deserializer, Serialize};

/// Anything that can be assembled into a tree: it knows its own id and,
/// unless it is a root, the id of its parent.
pub trait NodeRecord {
    fn id(&self) -> &str;
    fn parent_id(&self) -> Option<&str>;
}

impl<R: NodeRecord + ?Sized> NodeRecord for &R {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn parent_id(&self) -> Option<&str> {
        (**self).parent_id()
    }
}

impl NodeRecord for (String, Option<String>) {
    fn id(&self) -> &str {
        &self.0
    }

    fn parent_id(&self) -> Option<&str> {
        self.1.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "optional_parent")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    pub fn new(id: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.map(str::to_string),
            label: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

impl NodeRecord for Record {
    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_string)
}

// Empty string and null both mean "no parent".
fn optional_parent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(RawId::into_string).filter(|id| !id.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_reads_camel_case_parent() {
        let record: Record =
            serde_json::from_str(r#"{"id":"b","parentId":"a","title":"CTO"}"#).unwrap();
        assert_eq!(record.id(), "b");
        assert_eq!(record.parent_id(), Some("a"));
        assert_eq!(record.extra.get("title").and_then(|v| v.as_str()), Some("CTO"));
        assert_eq!(record.display_label(), "b");
    }

    #[test]
    fn record_treats_null_and_empty_parent_as_root() {
        let null_parent: Record = serde_json::from_str(r#"{"id":"a","parentId":null}"#).unwrap();
        let empty_parent: Record = serde_json::from_str(r#"{"id":"a","parentId":""}"#).unwrap();
        let missing: Record = serde_json::from_str(r#"{"id":"a"}"#).unwrap();
        assert_eq!(null_parent.parent_id(), None);
        assert_eq!(empty_parent.parent_id(), None);
        assert_eq!(missing.parent_id(), None);
    }

    #[test]
    fn record_accepts_numeric_ids() {
        let record: Record = serde_json::from_str(r#"{"id":7,"parentId":3}"#).unwrap();
        assert_eq!(record.id(), "7");
        assert_eq!(record.parent_id(), Some("3"));
    }
}
