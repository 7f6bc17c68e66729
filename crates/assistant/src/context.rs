//! Session context for one index

use search_index::IndexSchema;
use serde_json::Value;

use crate::prompt;

/// Context gathered once per session from index introspection
///
/// Immutable after construction; the rendered preamble is fixed for the life
/// of the session.
#[derive(Debug, Clone)]
pub struct IndexContext {
    index: String,
    schema: IndexSchema,
    samples: Vec<Value>,
    preamble: String,
}

impl IndexContext {
    /// Assemble the context from introspection results and guidance text
    pub fn new(schema: IndexSchema, samples: Vec<Value>, guidance: &str) -> Self {
        let index = schema.index.clone();
        let preamble = prompt::context_preamble(&index, &schema, &samples, guidance);
        Self {
            index,
            schema,
            samples,
            preamble,
        }
    }

    /// Name of the index this context was built from
    pub fn index(&self) -> &str {
        &self.index
    }

    /// The introspected schema
    pub const fn schema(&self) -> &IndexSchema {
        &self.schema
    }

    /// The sample documents, in fetch order
    pub fn samples(&self) -> &[Value] {
        &self.samples
    }

    /// The rendered preamble prefixed to every prompt
    pub fn preamble(&self) -> &str {
        &self.preamble
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::DEFAULT_GUIDANCE;

    fn schema() -> IndexSchema {
        let body = serde_json::json!({
            "books": {"mappings": {"properties": {"title": {"type": "text"}}}}
        });
        IndexSchema::from_mapping_response("books", &body).unwrap()
    }

    #[test]
    fn context_captures_index_name_from_schema() {
        let context = IndexContext::new(schema(), vec![], DEFAULT_GUIDANCE);
        assert_eq!(context.index(), "books");
    }

    #[test]
    fn preamble_is_rendered_once_at_construction() {
        let samples = vec![serde_json::json!({"title": "hello"})];
        let context = IndexContext::new(schema(), samples, DEFAULT_GUIDANCE);

        assert!(context.preamble().contains("books"));
        assert!(context.preamble().contains("hello"));
        assert_eq!(context.samples().len(), 1);
    }
}
