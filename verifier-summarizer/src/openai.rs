use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

use verifier_core::{Summarizer, VerifierResult};

use crate::error::SummarizeError;

const SYSTEM_PROMPT: &str = "You summarize news articles. Write a neutral summary of the \
article text in two to three sentences. Report only what the text states, without \
commentary or judgement about its accuracy.";

#[derive(Debug, Clone)]
pub struct OpenAiSummarizer {
    client: Client<OpenAIConfig>,
    model: String,
    max_tokens: u32,
}

impl OpenAiSummarizer {
    /// Create a summarizer from `OPENAI_API_KEY`
    pub fn from_env() -> Result<Self, SummarizeError> {
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => {}
            _ => return Err(SummarizeError::MissingApiKey),
        }

        // async-openai reads OPENAI_API_KEY from env automatically
        let config = OpenAIConfig::default();

        Ok(Self {
            client: Client::with_config(config),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 256,
        })
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[instrument(skip(self, text), fields(model = %self.model, chars = text.len()))]
    pub async fn summarize_article(&self, text: &str) -> Result<String, SummarizeError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_PROMPT)
                    .build()
                    .map_err(|e| SummarizeError::Request(e.to_string()))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(format!("Article text:\n{}", text))
                    .build()
                    .map_err(|e| SummarizeError::Request(e.to_string()))?
                    .into(),
            ])
            .temperature(0.2)
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| SummarizeError::Request(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| SummarizeError::Api(e.to_string()))?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(SummarizeError::EmptyResponse)?;

        debug!("Received summary of {} chars", summary.len());

        Ok(summary)
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn summarize(&self, text: &str) -> VerifierResult<String> {
        Ok(self.summarize_article(text).await?)
    }
}
