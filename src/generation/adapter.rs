//! Generation adapter: one completion call in JSON-object mode, parsed into a
//! [`StructuredReply`]. No retries happen here.

use crate::error::ApiError;
use crate::generation::reply::StructuredReply;
use crate::provider::{ChatMessage, CompletionOptions, ModelProviderClient, ResponseFormat};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

pub struct GenerationAdapter {
    client: Arc<dyn ModelProviderClient>,
    options: CompletionOptions,
}

impl GenerationAdapter {
    /// `options.response_format` is always forced to JSON-object mode.
    pub fn new(client: Arc<dyn ModelProviderClient>, options: CompletionOptions) -> Self {
        Self {
            client,
            options: CompletionOptions {
                response_format: Some(ResponseFormat::JsonObject),
                ..options
            },
        }
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Send an optional system instruction and a user instruction, and parse the reply.
    ///
    /// Transport failures come back as provider errors; a reply that is not a
    /// JSON object comes back as [`ApiError::MalformedReply`].
    pub async fn generate(
        &self,
        system: Option<&str>,
        user: &str,
    ) -> Result<StructuredReply, ApiError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(user));

        let started = Instant::now();
        let response = self
            .client
            .complete(messages, self.options.clone())
            .await
            .map_err(|e| {
                warn!(
                    provider = self.client.provider_name(),
                    model = self.client.model_name(),
                    error = %e,
                    "completion call failed"
                );
                e
            })?;

        debug!(
            provider = self.client.provider_name(),
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "completion call finished"
        );

        StructuredReply::parse(&response.content)
    }
}
