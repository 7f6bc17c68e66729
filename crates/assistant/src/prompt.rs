//! Prompt assembly
//!
//! Pure functions from structured inputs to prompt text. Deterministic for
//! identical inputs: schema fields and JSON object keys are emitted in sorted
//! order. Note that prompt text is lossy prose; it is not meant to be parsed
//! back into the inputs.

use search_index::IndexSchema;
use serde_json::Value;

/// Default guidance text included in every context preamble
///
/// Injected configuration; callers may replace it wholesale.
pub const DEFAULT_GUIDANCE: &str = "\
- Use the mapping above to understand the structure of the data
- The sample documents show the real shape of the data
- When useful, suggest search queries to obtain the information
- If a question cannot be answered with the available structure, explain why
- Be precise when referring to fields and their types
- If more data would be needed for a complete answer, say which data";

/// Render the context preamble from schema, samples and guidance
pub fn context_preamble(
    index: &str,
    schema: &IndexSchema,
    samples: &[Value],
    guidance: &str,
) -> String {
    let mapping_json = pretty_json(&serde_json::to_value(&schema.fields).unwrap_or_default());
    let samples_json = pretty_json(&Value::Array(samples.to_vec()));

    format!(
        "You are an assistant specialized in analyzing data held in a search index.\n\
         \n\
         MAPPING OF INDEX '{index}':\n\
         {mapping_json}\n\
         \n\
         SAMPLE DOCUMENTS:\n\
         {samples_json}\n\
         \n\
         GUIDELINES:\n\
         {guidance}"
    )
}

/// Build the prompt for a plain question against an existing preamble
pub fn question_prompt(preamble: &str, question: &str) -> String {
    format!(
        "{preamble}\n\
         \n\
         QUESTION: {question}\n\
         \n\
         Please analyze the question using the mapping and the sample documents above."
    )
}

/// Wrap a question with the instruction to return only a query body as JSON
pub fn query_proposal_prompt(question: &str) -> String {
    format!(
        "{question}\n\
         \n\
         Please suggest a search query body appropriate for answering this question.\n\
         Return only the query as JSON, with no additional explanation."
    )
}

/// Build the second-phase prompt embedding the query results
pub fn analysis_prompt(preamble: &str, question: &str, results: &Value) -> String {
    let results_json = pretty_json(results);

    format!(
        "{preamble}\n\
         \n\
         ORIGINAL QUESTION: {question}\n\
         \n\
         QUERY RESULTS:\n\
         {results_json}\n\
         \n\
         Please analyze the results and give a complete answer to the original question."
    )
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> IndexSchema {
        let body = serde_json::json!({
            "books": {
                "mappings": {
                    "properties": {
                        "title": {"type": "text"},
                        "year": {"type": "integer"}
                    }
                }
            }
        });
        IndexSchema::from_mapping_response("books", &body).unwrap()
    }

    #[test]
    fn preamble_contains_index_schema_and_samples() {
        let samples = vec![serde_json::json!({"title": "hello", "year": 2020})];
        let preamble = context_preamble("books", &schema(), &samples, DEFAULT_GUIDANCE);

        assert!(preamble.contains("MAPPING OF INDEX 'books'"));
        assert!(preamble.contains("\"title\": \"text\""));
        assert!(preamble.contains("hello"));
        assert!(preamble.contains("GUIDELINES:"));
    }

    #[test]
    fn preamble_is_deterministic() {
        let samples = vec![serde_json::json!({"b": 1, "a": 2})];
        let first = context_preamble("books", &schema(), &samples, DEFAULT_GUIDANCE);
        let second = context_preamble("books", &schema(), &samples, DEFAULT_GUIDANCE);
        assert_eq!(first, second);
    }

    #[test]
    fn question_prompt_contains_question_verbatim() {
        let prompt = question_prompt("preamble text", "What fields exist?");
        assert!(prompt.contains("QUESTION: What fields exist?"));
        assert!(prompt.starts_with("preamble text"));
    }

    #[test]
    fn query_proposal_prompt_requests_json_only() {
        let prompt = query_proposal_prompt("How many books per year?");
        assert!(prompt.contains("How many books per year?"));
        assert!(prompt.contains("Return only the query as JSON"));
    }

    #[test]
    fn analysis_prompt_embeds_results() {
        let results = serde_json::json!({"hits": {"hits": [{"_source": {"title": "hello"}}]}});
        let prompt = analysis_prompt("preamble", "What titles exist?", &results);

        assert!(prompt.contains("ORIGINAL QUESTION: What titles exist?"));
        assert!(prompt.contains("QUERY RESULTS:"));
        assert!(prompt.contains("hello"));
    }

    #[test]
    fn custom_guidance_replaces_default() {
        let preamble = context_preamble("books", &schema(), &[], "Answer in one word.");
        assert!(preamble.contains("Answer in one word."));
        assert!(!preamble.contains("Be precise when referring to fields"));
    }
}
