//! The assistant session

use std::sync::Arc;

use inference::{GenerationRequest, TextGenerationClient};
use search_index::IndexClient;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::context::IndexContext;
use crate::error::AssistantError;
use crate::prompt;

/// Index-aware question answering session
///
/// Holds an immutable [`IndexContext`] plus handles to the two services.
/// All index operations are read-only.
pub struct Assistant {
    inference: Arc<dyn TextGenerationClient>,
    index: IndexClient,
    context: IndexContext,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("index", &self.context.index())
            .finish_non_exhaustive()
    }
}

impl Assistant {
    /// Build a session for an index by introspecting its schema and samples
    ///
    /// Fetches the mapping and a few sample documents once; both live for the
    /// whole session. Fails on the first error, no retries.
    #[instrument(skip(inference, index_client, guidance))]
    pub async fn for_index(
        inference: Arc<dyn TextGenerationClient>,
        index_client: IndexClient,
        index: &str,
        guidance: Option<&str>,
    ) -> Result<Self, AssistantError> {
        let schema = index_client.get_mapping(index).await?;
        let samples = index_client
            .sample_documents(index, index_client.sample_size())
            .await?;

        debug!(
            fields = schema.fields.len(),
            samples = samples.len(),
            "Built index context"
        );

        let context = IndexContext::new(
            schema,
            samples,
            guidance.unwrap_or(prompt::DEFAULT_GUIDANCE),
        );

        Ok(Self {
            inference,
            index: index_client,
            context,
        })
    }

    /// The session context
    pub const fn context(&self) -> &IndexContext {
        &self.context
    }

    /// Answer a question about the index in a single generation call
    #[instrument(skip(self, question))]
    pub async fn ask(&self, question: &str) -> Result<String, AssistantError> {
        let full_prompt = prompt::question_prompt(self.context.preamble(), question);
        let response = self
            .inference
            .generate(GenerationRequest::new(full_prompt))
            .await?;
        Ok(response.text)
    }

    /// Two-phase workflow: propose a query, execute it, summarize the results
    ///
    /// The model's proposal must be a syntactically valid JSON query body.
    /// On a parse failure the raw model output is surfaced and the index is
    /// not touched; a single failure ends the interaction.
    #[instrument(skip(self, question))]
    pub async fn query_and_analyze(&self, question: &str) -> Result<String, AssistantError> {
        let proposal = self.ask(&prompt::query_proposal_prompt(question)).await?;

        let query: Value = match serde_json::from_str(proposal.trim()) {
            Ok(query) => query,
            Err(e) => {
                warn!(error = %e, "Model returned an unparsable query proposal");
                return Err(AssistantError::UnparsableQuery { raw: proposal });
            },
        };

        let results = self.index.search(self.context.index(), &query).await?;

        let analysis = prompt::analysis_prompt(self.context.preamble(), question, &results);
        let response = self
            .inference
            .generate(GenerationRequest::new(analysis))
            .await?;

        Ok(response.text)
    }
}
