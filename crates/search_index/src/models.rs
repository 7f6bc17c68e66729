//! Search service data models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::IndexError;

/// Summary of an index as reported by `_cat/indices`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexInfo {
    /// Index name
    #[serde(rename = "index")]
    pub name: String,

    /// Document count, reported as a string by the cat API
    #[serde(rename = "docs.count", default)]
    pub docs_count: Option<String>,
}

/// Declared field-name-to-type schema of an index
///
/// Read-only after fetch. Fields are kept in a BTreeMap so iteration order
/// (and therefore any prompt text built from it) is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexSchema {
    /// Index the schema was fetched from
    pub index: String,

    /// Field name to declared type, nested fields flattened with dot paths
    pub fields: BTreeMap<String, String>,
}

impl IndexSchema {
    /// Parse a `GET /{index}/_mapping` response body
    ///
    /// The body has the shape
    /// `{"<index>": {"mappings": {"properties": {...}}}}`.
    /// Object fields without a declared type are descended into and their
    /// children recorded as `parent.child`.
    pub fn from_mapping_response(index: &str, body: &Value) -> Result<Self, IndexError> {
        let properties = body
            .get(index)
            .and_then(|v| v.get("mappings"))
            .and_then(|v| v.get("properties"))
            .and_then(Value::as_object)
            .ok_or_else(|| {
                IndexError::ParseError(format!("mapping response missing properties for {index}"))
            })?;

        let mut fields = BTreeMap::new();
        collect_fields("", properties, &mut fields);

        Ok(Self {
            index: index.to_string(),
            fields,
        })
    }

    /// Field names in deterministic order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Render the schema as `field: type` lines for display
    pub fn describe(&self) -> String {
        self.fields
            .iter()
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn collect_fields(
    prefix: &str,
    properties: &serde_json::Map<String, Value>,
    out: &mut BTreeMap<String, String>,
) {
    for (name, details) in properties {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };

        if let Some(ty) = details.get("type").and_then(Value::as_str) {
            out.insert(path, ty.to_string());
        } else if let Some(nested) = details.get("properties").and_then(Value::as_object) {
            collect_fields(&path, nested, out);
        } else {
            out.insert(path, "object".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping_body() -> Value {
        serde_json::json!({
            "books": {
                "mappings": {
                    "properties": {
                        "title": {"type": "text"},
                        "year": {"type": "integer"},
                        "author": {
                            "properties": {
                                "name": {"type": "keyword"},
                                "born": {"type": "date"}
                            }
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn parses_flat_and_nested_fields() {
        let schema = IndexSchema::from_mapping_response("books", &mapping_body()).unwrap();
        assert_eq!(schema.index, "books");
        assert_eq!(schema.fields.get("title"), Some(&"text".to_string()));
        assert_eq!(schema.fields.get("year"), Some(&"integer".to_string()));
        assert_eq!(schema.fields.get("author.name"), Some(&"keyword".to_string()));
        assert_eq!(schema.fields.get("author.born"), Some(&"date".to_string()));
    }

    #[test]
    fn field_names_are_sorted() {
        let schema = IndexSchema::from_mapping_response("books", &mapping_body()).unwrap();
        let names: Vec<_> = schema.field_names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn describe_lists_each_field_with_type() {
        let schema = IndexSchema::from_mapping_response("books", &mapping_body()).unwrap();
        let described = schema.describe();
        assert!(described.contains("title: text"));
        assert!(described.contains("author.name: keyword"));
    }

    #[test]
    fn missing_properties_is_a_parse_error() {
        let body = serde_json::json!({"books": {"mappings": {}}});
        let err = IndexSchema::from_mapping_response("books", &body).unwrap_err();
        assert!(matches!(err, IndexError::ParseError(_)));
    }

    #[test]
    fn wrong_index_key_is_a_parse_error() {
        let err = IndexSchema::from_mapping_response("other", &mapping_body()).unwrap_err();
        assert!(matches!(err, IndexError::ParseError(_)));
    }

    #[test]
    fn untyped_leaf_falls_back_to_object() {
        let body = serde_json::json!({
            "idx": {"mappings": {"properties": {"blob": {}}}}
        });
        let schema = IndexSchema::from_mapping_response("idx", &body).unwrap();
        assert_eq!(schema.fields.get("blob"), Some(&"object".to_string()));
    }

    #[test]
    fn index_info_deserializes_cat_entry() {
        let entry: IndexInfo = serde_json::from_value(serde_json::json!({
            "index": "books",
            "docs.count": "42",
            "health": "green"
        }))
        .unwrap();
        assert_eq!(entry.name, "books");
        assert_eq!(entry.docs_count.as_deref(), Some("42"));
    }
}
