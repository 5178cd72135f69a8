/*!
 * Core translation service implementation.
 *
 * This module contains the main TranslationService struct, the production
 * ChunkTranslator: it owns the provider client, the prompt template, and the
 * glossary for the lifetime of one job, and turns chunks into translated
 * text through an OpenAI-compatible endpoint.
 */

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use log::{debug, info};
use url::Url;

use crate::app_config::TranslationConfig;
use crate::errors::TranslationError;
use crate::language_utils;
use crate::providers::Provider;
use crate::providers::openai::{OpenAI, OpenAIRequest};
use super::glossary::Glossary;
use super::orchestrator::ChunkTranslator;
use super::prompts::PromptTemplate;

/// Translation provider implementation variants
enum TranslationProviderImpl {
    /// OpenAI-compatible API service
    OpenAI {
        /// Client instance
        client: OpenAI,
    },
}

/// Main translation service for book translation.
///
/// The configuration, glossary, and prompt are fixed when the service is
/// created and never mutated during a job.
pub struct TranslationService {
    /// Provider implementation
    provider: TranslationProviderImpl,

    /// Configuration for the translation service
    pub config: TranslationConfig,

    /// System instruction rendered once per job
    system_prompt: String,
}

impl TranslationService {
    /// Create a new translation service with the given configuration.
    ///
    /// Languages are resolved to their English names for the instruction
    /// payload; the glossary policy is rendered into it verbatim.
    pub fn new(config: TranslationConfig, source_language: &str, target_language: &str) -> Result<Self> {
        let source_name = language_utils::get_language_name(source_language)?;
        let target_name = language_utils::get_language_name(target_language)?;

        let glossary = Glossary::software_terms()
            .with_extra_terms(&config.common.glossary_terms);
        let system_prompt =
            PromptTemplate::book_translator().render(&source_name, &target_name, &glossary);

        let provider = TranslationProviderImpl::OpenAI {
            client: OpenAI::new_with_config(
                config.provider.api_key.clone(),
                config.provider.endpoint.clone(),
                config.provider.timeout_secs,
                config.common.retry_count,
                config.common.retry_backoff_ms,
            ),
        };

        info!(
            "Initialized translation client with model: {} ({} terms in glossary)",
            config.provider.model,
            glossary.term_count()
        );
        debug!("Using endpoint: {}", config.provider.endpoint);

        Ok(Self {
            provider,
            config,
            system_prompt,
        })
    }

    /// Validate that the configured endpoint parses as a URL
    pub fn validate_endpoint(&self) -> Result<()> {
        let endpoint = &self.config.provider.endpoint;
        if endpoint.is_empty() {
            return Ok(());
        }
        Url::parse(endpoint).map_err(|e| anyhow!("Invalid endpoint '{}': {}", endpoint, e))?;
        Ok(())
    }

    /// Test the connection to the translation provider.
    ///
    /// Setup failures must surface before any chunk is processed, never
    /// mid-job.
    pub async fn test_connection(&self) -> Result<()> {
        match &self.provider {
            TranslationProviderImpl::OpenAI { client } => client
                .test_connection()
                .await
                .map_err(|e| anyhow!("Failed to connect to translation service: {}", e)),
        }
    }

    /// The rendered system instruction for this job
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Get the maximum number of output tokens for the configured model
    fn max_output_tokens(&self) -> u32 {
        let configured = self.config.common.max_output_tokens;
        if configured > 0 {
            return configured;
        }

        match self.config.provider.model.as_str() {
            "gpt-4" | "gpt-4-0613" => 8192,
            "gpt-4o" | "gpt-4o-mini" | "gpt-4-turbo" => 4096,
            "gpt-3.5-turbo" | "gpt-3.5-turbo-0613" => 4096,
            "gpt-3.5-turbo-16k" => 16384,
            _ => 2048,
        }
    }
}

#[async_trait]
impl ChunkTranslator for TranslationService {
    async fn translate_chunk(
        &self,
        text: &str,
        _source_language: &str,
        _target_language: &str,
    ) -> Result<String, TranslationError> {
        // The language pair is already baked into the system instruction;
        // the chunk travels as user content.
        let request = OpenAIRequest::new(self.config.provider.model.clone())
            .add_message("system", &self.system_prompt)
            .add_message("user", format!("Text to translate:\n{}", text))
            .temperature(self.config.common.temperature)
            .max_tokens(self.max_output_tokens());

        let response = match &self.provider {
            TranslationProviderImpl::OpenAI { client } => client.complete(request).await?,
        };

        let translated = OpenAI::extract_text(&response);
        if translated.is_empty() {
            return Err(TranslationError::EmptyResponse);
        }

        if let Some(usage) = response.usage {
            debug!(
                "Translated {} chars ({} prompt / {} completion tokens)",
                text.len(),
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        Ok(translated)
    }
}
